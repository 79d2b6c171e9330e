//! CLI command definitions using clap

use clap::{ArgMatches, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{OutputFormat, ProfileChoice};
use crate::replay::Mutation;

#[derive(Parser)]
#[command(name = "gltrace-state")]
#[command(about = "Build, mutate and inspect GL context state trees")]
pub struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a default state tree, apply mutations and print it
    Dump(DumpArgs),

    /// List every addressable path in a default state tree
    Paths {
        /// Context profile to build
        #[arg(long, value_enum)]
        profile: Option<ProfileChoice>,

        /// Only list leaves
        #[arg(long)]
        leaves_only: bool,
    },
}

#[derive(Args)]
pub struct DumpArgs {
    /// Context profile to build
    #[arg(long, value_enum)]
    pub profile: Option<ProfileChoice>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only print leaves that differ from their defaults
    #[arg(long)]
    pub changed_only: bool,

    /// Do not annotate modified leaves with their defaults
    #[arg(long)]
    pub hide_defaults: bool,

    /// Label nodes with display names
    #[arg(long)]
    pub display_names: bool,

    /// Assign a leaf, e.g. `RasterizationState/LineWidth=2.0`
    #[arg(long = "set", value_name = "PATH=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,

    /// Create a sparse array entry, e.g. `TextureState/Textures=5`
    #[arg(long = "add", value_name = "PATH=HANDLE", value_parser = parse_handle)]
    pub add: Vec<(String, u32)>,

    /// Delete a sparse array entry
    #[arg(long = "remove", value_name = "PATH=HANDLE", value_parser = parse_handle)]
    pub remove: Vec<(String, u32)>,

    /// Abort on the first failing mutation
    #[arg(long)]
    pub strict: bool,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (path, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected PATH=VALUE, got '{}'", s))?;
    Ok((path.trim().to_string(), value.to_string()))
}

fn parse_handle(s: &str) -> Result<(String, u32), String> {
    let (path, handle) = parse_assignment(s)?;
    let handle = handle
        .trim()
        .parse()
        .map_err(|_| format!("invalid object handle '{}'", handle))?;
    Ok((path, handle))
}

impl DumpArgs {
    /// Mutations in the order they were given on the command line
    ///
    /// `matches` are the `dump` subcommand's matches; without them, sets come
    /// first, then adds, then removes.
    pub fn mutations(&self, matches: Option<&ArgMatches>) -> Vec<Mutation> {
        let positions = |id: &str, count: usize| -> Vec<usize> {
            matches
                .and_then(|m| m.indices_of(id))
                .map(|indices| indices.collect())
                .unwrap_or_else(|| (0..count).collect())
        };

        let sets = self.set.iter().map(|(path, value)| Mutation::Set {
            path: path.clone(),
            value: value.clone(),
        });
        let adds = self.add.iter().map(|(path, handle)| Mutation::Add {
            path: path.clone(),
            handle: *handle,
        });
        let removes = self.remove.iter().map(|(path, handle)| Mutation::Remove {
            path: path.clone(),
            handle: *handle,
        });

        let mut ordered: Vec<(usize, Mutation)> = positions("set", self.set.len())
            .into_iter()
            .zip(sets)
            .chain(positions("add", self.add.len()).into_iter().zip(adds))
            .chain(positions("remove", self.remove.len()).into_iter().zip(removes))
            .collect();
        ordered.sort_by_key(|(position, _)| *position);
        ordered.into_iter().map(|(_, mutation)| mutation).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, FromArgMatches};

    fn parse(args: &[&str]) -> (Cli, ArgMatches) {
        let matches = Cli::command().try_get_matches_from(args).unwrap();
        let cli = Cli::from_arg_matches(&matches).unwrap();
        (cli, matches)
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("PixelPacking/PackAlignment=8"),
            Ok(("PixelPacking/PackAlignment".to_string(), "8".to_string()))
        );
        // Only the first '=' separates
        assert_eq!(
            parse_assignment("Shaders#1/ShaderSource=a=b"),
            Ok(("Shaders#1/ShaderSource".to_string(), "a=b".to_string()))
        );
        assert!(parse_assignment("PixelPacking").is_err());
        assert!(parse_handle("TextureState/Textures=x").is_err());
        assert_eq!(
            parse_handle("TextureState/Textures=5"),
            Ok(("TextureState/Textures".to_string(), 5))
        );
    }

    #[test]
    fn test_dump_flags() {
        let (cli, _) = parse(&[
            "gltrace-state",
            "dump",
            "--profile",
            "none",
            "--format",
            "json",
            "--changed-only",
            "--config",
            "/tmp/gltrace.toml",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/gltrace.toml")));
        let Commands::Dump(args) = cli.command else {
            panic!("Expected dump");
        };
        assert_eq!(args.profile, Some(ProfileChoice::NoContext));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(args.changed_only);
        assert!(!args.strict);
    }

    #[test]
    fn test_mutations_keep_command_line_order() {
        let (cli, matches) = parse(&[
            "gltrace-state",
            "dump",
            "--add",
            "Shaders=1",
            "--set",
            "Shaders#1/ShaderSource=x",
            "--remove",
            "Shaders=1",
            "--set",
            "PixelOperations/Dither=false",
        ]);
        let Commands::Dump(args) = cli.command else {
            panic!("Expected dump");
        };

        let mutations = args.mutations(matches.subcommand_matches("dump"));
        let rendered: Vec<String> = mutations.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "add Shaders=1",
                "set Shaders#1/ShaderSource=x",
                "remove Shaders=1",
                "set PixelOperations/Dither=false",
            ]
        );
    }

    #[test]
    fn test_mutations_without_matches() {
        let (cli, _) = parse(&["gltrace-state", "dump", "--remove", "Shaders=1", "--set", "A=1"]);
        let Commands::Dump(args) = cli.command else {
            panic!("Expected dump");
        };
        let mutations = args.mutations(None);
        assert!(matches!(mutations[0], Mutation::Set { .. }));
        assert!(matches!(mutations[1], Mutation::Remove { .. }));
    }
}
