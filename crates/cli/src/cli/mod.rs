// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[derive(Parser)]
#[command(name = "sprig")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "A local sprint-planning simulator")]
#[command(
    long_about = "A local sprint-planning simulator.\n\n\
    Turns user stories into two sprint milestones and one issue per story, \
    stored as JSON files that stand in for a remote tracker."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Store directory [env: SPRIG_STORE] [default: local_github_simulation]
    #[arg(short = 's', long = "store", global = true, value_name = "dir")]
    pub store: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Sprint Planning
    // ─────────────────────────────────────────────────────────────────────────
    /// Synthesize sprint milestones and issues from a stories file
    ///
    /// Creates two milestones, Sprint 1 and Sprint 2, then one issue per
    /// story attached to the milestone for the story's sprint. The stories
    /// file is a JSON array of stories or one story per line.
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  sprig plan acme web stories.json                          Plan from today
  sprig plan acme web stories.json --start-date 2025-03-03  Plan from a fixed date
  sprig -s /tmp/sim plan acme web stories.jsonl             Plan into another store")
    )]
    Plan {
        /// Repository owner
        #[arg(value_parser = non_empty_string)]
        owner: String,

        /// Repository name
        #[arg(value_parser = non_empty_string)]
        repo: String,

        /// Path to the stories file
        stories_file: PathBuf,

        /// First day of sprint 1 (YYYY-MM-DD) [default: today]
        #[arg(long, value_name = "date")]
        start_date: Option<String>,
    },

    /// Show the simulated tracker grouped by sprint and assignee
    #[command(after_help = colors::examples("\
Examples:
  sprig visualize                Show the report
  sprig visualize --timestamp    Add a generated-at line"))]
    Visualize {
        /// Print a generated-at line above the report
        #[arg(long)]
        timestamp: bool,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Write sprig.toml in the current directory and create the store
    #[command(after_help = colors::examples("\
Examples:
  sprig init                  Use the default store directory
  sprig -s sim init           Remember 'sim' as the store
  sprig init --timestamp      Always timestamp reports"))]
    Init {
        /// Make visualize print a generated-at line by default
        #[arg(long)]
        timestamp: bool,
    },

    /// Output JSON Schema for stories and stored records
    #[command(
        subcommand,
        after_help = colors::examples("\
Examples:
  sprig schema stories      Schema of the stories file
  sprig schema issue        Schema of issues/<id>.json

Available schemas: stories, milestone, issue")
    )]
    Schema(SchemaCommand),

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Schema output commands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Output JSON Schema for the stories file
    Stories,
    /// Output JSON Schema for a stored milestone
    Milestone,
    /// Output JSON Schema for a stored issue
    Issue,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
