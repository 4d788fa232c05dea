// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod init;
pub mod plan;
pub mod schema;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod visualize;

use std::path::Path;

use sg_core::Store;

use crate::config::{resolve_store_root, Config};
use crate::env;
use crate::error::Result;

/// Helper to open the store from the current context.
///
/// The store root comes from `--store`, then `SPRIG_STORE`, then
/// `sprig.toml` in the working directory, then the default directory.
pub fn open_store(store_flag: Option<&Path>) -> Result<(Store, Config)> {
    let cwd = std::env::current_dir()?;
    let config = Config::load_or_default(&cwd)?;
    let root = resolve_store_root(&cwd, store_flag, env::store_dir(), &config);
    tracing::debug!(root = %root.display(), "resolved store");
    Ok((Store::new(root), config))
}
