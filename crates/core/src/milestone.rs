// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sprint milestones.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::alloc::IdAllocator;
use crate::error::Result;
use crate::record::{EntityKind, Record, State};

/// Sprints planned per run.
pub const SPRINTS: [u32; 2] = [1, 2];

/// Length of one sprint in days.
pub const SPRINT_LENGTH_DAYS: u64 = 7;

/// A time-boxed sprint that issues are attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Allocator-assigned identifier.
    pub id: u64,
    /// Sprint number this milestone represents.
    pub sprint: u32,
    /// Display title, e.g. "Sprint 1".
    pub title: String,
    pub description: String,
    /// Date the sprint ends.
    pub due_on: NaiveDate,
    pub state: State,
    /// `owner/repo` the milestone was planned for.
    pub repository: String,
}

impl Record for Milestone {
    const KIND: EntityKind = EntityKind::Milestone;

    fn id(&self) -> u64 {
        self.id
    }
}

/// Due date of `sprint` when planning starts on `base_date`.
///
/// Sprint `n` ends `n` weeks after the base date. Saturates at the maximum
/// representable date rather than overflowing.
pub fn due_date(base_date: NaiveDate, sprint: u32) -> NaiveDate {
    base_date
        .checked_add_days(Days::new(SPRINT_LENGTH_DAYS * u64::from(sprint)))
        .unwrap_or(NaiveDate::MAX)
}

/// Creates the two sprint milestones for a planning run.
///
/// Output depends only on `base_date`, `repository`, and the allocator state.
/// Fails only when the allocator has no milestone ids left.
pub fn synthesize(
    base_date: NaiveDate,
    repository: &str,
    ids: &mut IdAllocator,
) -> Result<[Milestone; 2]> {
    let mut sprint_milestone = |sprint: u32| -> Result<Milestone> {
        Ok(Milestone {
            id: ids.next(EntityKind::Milestone)?,
            sprint,
            title: format!("Sprint {sprint}"),
            description: format!("Sprint {sprint} tasks"),
            due_on: due_date(base_date, sprint),
            state: State::Open,
            repository: repository.to_string(),
        })
    };
    let [first, second] = SPRINTS;
    Ok([sprint_milestone(first)?, sprint_milestone(second)?])
}

#[cfg(test)]
#[path = "milestone_tests.rs"]
mod tests;
