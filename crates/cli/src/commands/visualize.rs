// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Visualize command: report on everything in the store.

use std::path::Path;

use chrono::Utc;
use sg_core::{Issue, Milestone, Store};

use super::open_store;
use crate::colors;
use crate::display::{format_report, ReportOptions};
use crate::error::Result;

pub fn run(store_flag: Option<&Path>, timestamp: bool) -> Result<()> {
    let (store, config) = open_store(store_flag)?;
    let options = ReportOptions {
        generated_at: (timestamp || config.timestamp).then(Utc::now),
        color: colors::should_colorize(),
    };
    print!("{}", run_impl(&store, &options)?);
    Ok(())
}

/// Internal implementation that accepts the store for testing.
///
/// Read-only: a missing store reports as empty and is not created.
pub(crate) fn run_impl(store: &Store, options: &ReportOptions) -> Result<String> {
    let milestones: Vec<Milestone> = store.list()?;
    let issues: Vec<Issue> = store.list()?;
    format_report(&milestones, &issues, options)
}

#[cfg(test)]
#[path = "visualize_tests.rs"]
mod tests;
