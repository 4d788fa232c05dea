// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The write surface of an issue tracker.
//!
//! [`Store`](crate::Store) implements this against the local filesystem. A
//! network-backed tracker accepting the same milestones and issues can be
//! swapped in for [`plan`](crate::plan::plan) without touching synthesis.

use crate::error::Result;
use crate::issue::Issue;
use crate::milestone::Milestone;
use crate::record::EntityKind;

pub trait Tracker {
    /// Highest identifier already used for `kind`, or 0 when there are none.
    fn max_id(&self, kind: EntityKind) -> Result<u64>;

    /// Persists a milestone.
    fn create_milestone(&mut self, milestone: &Milestone) -> Result<()>;

    /// Persists an issue. Its milestone must already have been created.
    fn create_issue(&mut self, issue: &Issue) -> Result<()>;
}
