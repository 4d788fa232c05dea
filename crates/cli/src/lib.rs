// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sprigrs - command-line front end for the sprig sprint-planning simulator.
//!
//! This crate wires the `sg_core` planning pipeline to a CLI: it resolves
//! where the store lives, runs the `plan` and `visualize` commands, and
//! renders their output.
//!
//! # Main Components
//!
//! - [`Cli`] - clap definition of the command line
//! - [`Config`] - optional `sprig.toml` settings
//! - [`display`] - report and plan summary rendering
//! - [`Error`] - Error types for all operations
//!
//! # Example
//!
//! ```rust,ignore
//! use clap::Parser;
//! use sprigrs::{run, Cli};
//!
//! let cli = Cli::parse_from(["sprig", "visualize"]);
//! run(cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod display;
pub mod env;
pub mod help;
pub mod logging;
mod schema;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, SchemaCommand};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let store = cli.store.as_deref();
    match cli.command {
        Command::Plan {
            owner,
            repo,
            stories_file,
            start_date,
        } => commands::plan::run(store, owner, repo, &stories_file, start_date.as_deref()),
        Command::Visualize { timestamp } => commands::visualize::run(store, timestamp),
        Command::Init { timestamp } => commands::init::run(store, timestamp),
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "sprig", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
