// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use sg_core::Store;

use crate::config::{resolve_store_root, Config, CONFIG_FILE_NAME};
use crate::error::{Error, Result};

pub fn run(store_flag: Option<&Path>, timestamp: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    print!("{}", run_impl(&cwd, store_flag, timestamp)?);
    Ok(())
}

/// Write `sprig.toml` into `dir` and create the store it points at.
///
/// Only an explicit `--store` is recorded; without it the config leaves the
/// store unset so the default directory applies.
pub(crate) fn run_impl(dir: &Path, store_flag: Option<&Path>, timestamp: bool) -> Result<String> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Err(Error::AlreadyInitialized(config_path.display().to_string()));
    }

    let config = Config {
        store: store_flag.map(|p| p.display().to_string()),
        timestamp,
    };
    let root = resolve_store_root(dir, None, None, &config);
    Store::new(&root).init()?;
    config.save(dir)?;

    tracing::info!(root = %root.display(), "initialized store");
    Ok(format!(
        "Initialized sprig in {}\nStore: {}\n",
        dir.display(),
        root.display()
    ))
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
