// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sprint planning: stories in, milestones and issues out.

use chrono::NaiveDate;

use crate::alloc::IdAllocator;
use crate::error::Result;
use crate::issue::{self, Issue};
use crate::milestone::{self, Milestone};
use crate::story::UserStory;
use crate::tracker::Tracker;

/// Where and when a plan is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub owner: String,
    pub repo: String,
    /// Date the first sprint starts.
    pub base_date: NaiveDate,
}

impl PlanRequest {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, base_date: NaiveDate) -> Self {
        PlanRequest {
            owner: owner.into(),
            repo: repo.into(),
            base_date,
        }
    }

    /// `owner/repo`.
    pub fn repository(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Records written by a successful plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOutcome {
    pub milestones: Vec<Milestone>,
    pub issues: Vec<Issue>,
}

impl PlanOutcome {
    /// The milestone an issue belongs to.
    pub fn milestone_for(&self, issue: &Issue) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == issue.milestone_id)
    }
}

/// Plans `stories` into `tracker`.
///
/// All synthesis and validation happens before the first write, so an
/// invalid batch leaves the tracker untouched. Milestones are written before
/// issues so every written issue's milestone already exists.
///
/// Not safe to run concurrently against the same tracker: ids are chosen by
/// scanning what is already there. Callers using a [`Store`](crate::Store)
/// should hold its lock.
pub fn plan<T: Tracker + ?Sized>(
    tracker: &mut T,
    request: &PlanRequest,
    stories: &[UserStory],
) -> Result<PlanOutcome> {
    let repository = request.repository();
    let mut ids = IdAllocator::from_tracker(&*tracker)?;

    let milestones = milestone::synthesize(request.base_date, &repository, &mut ids)?;
    let issues = issue::synthesize(stories, &milestones, &repository, &mut ids)?;

    for m in &milestones {
        tracker.create_milestone(m)?;
    }
    for i in &issues {
        tracker.create_issue(i)?;
    }

    tracing::info!(
        repository = %repository,
        milestones = milestones.len(),
        issues = issues.len(),
        "plan complete"
    );

    Ok(PlanOutcome {
        milestones: milestones.to_vec(),
        issues,
    })
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
