// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sg-core: Shared library for the sprig sprint-planning simulator
//!
//! This crate provides the data model, story parsing, identifier allocation,
//! milestone and issue synthesis, and the flat-file store used by the sprig
//! CLI.

pub mod alloc;
pub mod error;
pub mod issue;
pub mod milestone;
pub mod plan;
pub mod record;
pub mod store;
pub mod story;
pub mod tracker;

#[cfg(test)]
mod testing;

pub use alloc::IdAllocator;
pub use error::{Error, Result};
pub use issue::Issue;
pub use milestone::Milestone;
pub use plan::{plan, PlanOutcome, PlanRequest};
pub use record::{EntityKind, Record, State};
pub use store::{Store, StoreLock};
pub use story::UserStory;
pub use tracker::Tracker;
