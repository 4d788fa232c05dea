// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plan command: stories file in, milestones and issues written to the store.

use std::path::Path;

use chrono::{Local, NaiveDate};
use sg_core::{issue, story, PlanRequest, Store};

use super::open_store;
use crate::display::format_plan_summary;
use crate::error::{Error, Result};

/// Accepted `--start-date` format.
const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn run(
    store_flag: Option<&Path>,
    owner: String,
    repo: String,
    stories_file: &Path,
    start_date: Option<&str>,
) -> Result<()> {
    let base_date = match start_date {
        Some(value) => parse_date(value)?,
        None => Local::now().date_naive(),
    };
    let (mut store, _) = open_store(store_flag)?;
    let request = PlanRequest::new(owner, repo, base_date);
    let summary = run_impl(&mut store, &request, stories_file)?;
    print!("{}", summary);
    Ok(())
}

/// Internal implementation that accepts the store for testing.
///
/// The stories are loaded and checked before the store is locked or
/// created, so a rejected batch leaves no trace on disk.
pub(crate) fn run_impl(
    store: &mut Store,
    request: &PlanRequest,
    stories_file: &Path,
) -> Result<String> {
    let stories = story::load(stories_file)?;
    issue::validate(&stories)?;

    let _lock = store.lock()?;
    store.init()?;
    let outcome = sg_core::plan(store, request, &stories)?;

    Ok(format_plan_summary(
        &outcome,
        &store.root().display().to_string(),
    ))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate {
        value: value.to_string(),
    })
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
