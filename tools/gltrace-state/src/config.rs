//! Configuration management (gltrace-state/config.toml)
//!
//! Settings are stored in TOML format in the platform-specific config
//! directory, or read from an explicit `--config` file. Command-line flags
//! take precedence over every value here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use gltrace_core::Profile;

/// Tool configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output settings for `dump` and `paths`
    #[serde(default)]
    pub dump: DumpConfig,
    /// Mutation replay settings
    #[serde(default)]
    pub replay: ReplayConfig,
}

/// Which default tree to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProfileChoice {
    /// GLES 1.x context
    Es1,
    /// GLES 2.0 context
    #[default]
    Es2,
    /// Context list before any context exists
    #[value(name = "none")]
    #[serde(rename = "none")]
    NoContext,
}

impl ProfileChoice {
    pub fn profile(self) -> Option<Profile> {
        match self {
            ProfileChoice::Es1 => Some(Profile::Es1),
            ProfileChoice::Es2 => Some(Profile::Es2),
            ProfileChoice::NoContext => None,
        }
    }
}

/// Output format for `dump`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented tree
    #[default]
    Text,
    /// JSON snapshot
    Json,
}

/// Dump configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DumpConfig {
    /// Profile built when `--profile` is not given (default: es2)
    #[serde(default)]
    pub profile: ProfileChoice,
    /// Output format (default: text)
    #[serde(default)]
    pub format: OutputFormat,
    /// Omit the default annotation on modified leaves (default: false)
    #[serde(default)]
    pub hide_defaults: bool,
    /// Print only modified leaves (default: false)
    #[serde(default)]
    pub changed_only: bool,
    /// Label nodes with display names (default: false)
    #[serde(default)]
    pub display_names: bool,
}

/// Replay configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReplayConfig {
    /// Abort on the first failing mutation instead of skipping it (default: false)
    #[serde(default)]
    pub strict: bool,
}

/// Returns the platform-specific configuration directory.
///
/// On Linux: `~/.config/gltrace-state`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.gltrace", "", "gltrace-state")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads the configuration.
///
/// An explicit path must exist and parse. Otherwise `config.toml` is read from
/// the platform's configuration directory, falling back to defaults if it is
/// missing or malformed.
pub fn load(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        return toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()));
    }

    let Some(path) = config_dir().map(|dir| dir.join("config.toml")) else {
        return Ok(Config::default());
    };
    let Ok(content) = std::fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!("ignoring malformed config {}: {}", path.display(), e);
            Ok(Config::default())
        }
    }
}
