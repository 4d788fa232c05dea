// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is read from an optional `sprig.toml` in the working
//! directory and includes:
//! - `store`: Directory holding the simulated tracker (default `local_github_simulation`)
//! - `timestamp`: Whether `visualize` prints a generated-at line

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "sprig.toml";

/// Store directory used when nothing else names one.
pub const DEFAULT_STORE_DIR: &str = "local_github_simulation";

/// Project configuration stored in `sprig.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Store root (relative to the working directory or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    /// Include a generated-at line in `visualize` output.
    #[serde(default)]
    pub timestamp: bool,
}

impl Config {
    /// Loads configuration from `sprig.toml` in `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        Self::parse(&content)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        match fs::read_to_string(dir.join(CONFIG_FILE_NAME)) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(Error::Config(format!("failed to read config: {}", e))),
        }
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("failed to parse config: {}", e)))
    }

    /// Saves configuration to `sprig.toml` in `dir`.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(dir.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }
}

/// Resolve the store root.
///
/// First match wins: the `--store` flag, the `SPRIG_STORE` value, the config
/// file, then [`DEFAULT_STORE_DIR`]. Relative paths are taken from `cwd`.
pub fn resolve_store_root(
    cwd: &Path,
    flag: Option<&Path>,
    env: Option<PathBuf>,
    config: &Config,
) -> PathBuf {
    let chosen = flag
        .map(Path::to_path_buf)
        .or(env)
        .or_else(|| config.store.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR));

    if chosen.is_absolute() {
        chosen
    } else {
        cwd.join(chosen)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
