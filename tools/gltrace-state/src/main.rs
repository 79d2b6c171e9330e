//! gltrace State Tool
//!
//! A CLI tool for inspecting the default GL context state trees and trying
//! mutations against them the way a trace replay would apply them.

mod cli;
mod config;
mod replay;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches};

use gltrace_core::state::{ExportOptions, format_tree, to_json};
use gltrace_core::{GlProperty, PropertyKind, build_empty_root};

use cli::{Cli, Commands, DumpArgs};
use config::{Config, OutputFormat, ProfileChoice};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Dump(args) => {
            let mutations = args.mutations(matches.subcommand_matches("dump"));
            run_dump(&args, &mutations, &config)
        }
        Commands::Paths {
            profile,
            leaves_only,
        } => run_paths(profile.unwrap_or(config.dump.profile), leaves_only),
    }
}

fn build_state(choice: ProfileChoice) -> Result<GlProperty> {
    let state = match choice.profile() {
        Some(profile) => profile
            .build()
            .with_context(|| format!("failed to build {:?} state", profile))?,
        None => build_empty_root(),
    };
    Ok(state)
}

fn run_dump(args: &DumpArgs, mutations: &[replay::Mutation], config: &Config) -> Result<()> {
    let mut state = build_state(args.profile.unwrap_or(config.dump.profile))?;

    let strict = args.strict || config.replay.strict;
    let summary = replay::apply_all(&mut state, mutations, strict)?;
    if summary.skipped > 0 {
        tracing::info!(
            "applied {} mutations, skipped {}",
            summary.applied,
            summary.skipped
        );
    }

    match args.format.unwrap_or(config.dump.format) {
        OutputFormat::Text => {
            let options = ExportOptions {
                show_defaults: !(args.hide_defaults || config.dump.hide_defaults),
                changed_only: args.changed_only || config.dump.changed_only,
                display_names: args.display_names || config.dump.display_names,
            };
            print!("{}", format_tree(&state, &options));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&to_json(&state))?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn run_paths(choice: ProfileChoice, leaves_only: bool) -> Result<()> {
    let state = build_state(choice)?;

    state.walk(&mut |path, node| {
        if path.is_empty() || (leaves_only && node.kind() != PropertyKind::Scalar) {
            return;
        }
        match node.as_scalar() {
            Some(leaf) => println!("{} ({})", path, leaf.value_type()),
            None => println!("{} ({:?})", path, node.kind()),
        }
    });

    Ok(())
}
