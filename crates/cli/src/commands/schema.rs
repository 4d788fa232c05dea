// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema for the stories file and the stored record files.

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{IssueJson, MilestoneJson, StoriesJson};
use schemars::schema::RootSchema;
use schemars::schema_for;

/// Schema for one subcommand.
pub fn schema(cmd: &SchemaCommand) -> RootSchema {
    match cmd {
        SchemaCommand::Stories => schema_for!(StoriesJson),
        SchemaCommand::Milestone => schema_for!(MilestoneJson),
        SchemaCommand::Issue => schema_for!(IssueJson),
    }
}

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let json = serde_json::to_string_pretty(&schema(&cmd))?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
