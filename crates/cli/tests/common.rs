// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Default store directory name, relative to the working directory.
pub const STORE: &str = "local_github_simulation";

pub const TWO_STORIES: &str = r#"[
  {"title": "Add login", "description": "OAuth flow", "assignee": "alice", "labels": ["auth", "ui"], "sprint": 1},
  {"title": "Add logout", "description": "Clear session", "sprint": 2}
]"#;

/// `sprig` with a clean environment: no store override, no colors.
pub fn sprig() -> Command {
    let mut cmd = cargo_bin_cmd!("sprig");
    cmd.env_remove("SPRIG_STORE")
        .env_remove("SPRIG_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// Write a stories file into `temp` and return its path.
pub fn write_stories(temp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Run `sprig plan acme web <file> --start-date 2025-03-03` in `temp`.
pub fn plan(temp: &TempDir, file: &str) -> assert_cmd::assert::Assert {
    sprig()
        .args(["plan", "acme", "web", file, "--start-date", "2025-03-03"])
        .current_dir(temp.path())
        .assert()
}

/// Sorted file names in `dir`, empty if it does not exist.
pub fn file_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Parse a stored record.
pub fn read_record(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}
