// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated tracker issues and their synthesis from user stories.

use serde::{Deserialize, Serialize};

use crate::alloc::IdAllocator;
use crate::error::{Error, Result};
use crate::milestone::{Milestone, SPRINTS};
use crate::record::{EntityKind, Record, State};
use crate::story::UserStory;

/// A single unit of work attached to a sprint milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Allocator-assigned identifier, independent of milestone ids.
    pub id: u64,
    pub title: String,
    /// Longer description, taken from the story.
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    /// Id of the milestone for the story's sprint.
    pub milestone_id: u64,
    pub state: State,
    /// `owner/repo` the issue was planned for.
    pub repository: String,
}

impl Record for Issue {
    const KIND: EntityKind = EntityKind::Issue;

    fn id(&self) -> u64 {
        self.id
    }
}

/// Checks every story against the planned sprints before any is converted.
///
/// Needs no milestones, so callers can reject a batch before touching a
/// store. Positions in errors are 1-based.
pub fn validate(stories: &[UserStory]) -> Result<()> {
    for (idx, story) in stories.iter().enumerate() {
        let index = idx + 1;
        if story.title.trim().is_empty() {
            return Err(Error::MissingTitle { index });
        }
        if !SPRINTS.iter().any(|&s| i64::from(s) == story.sprint) {
            return Err(Error::InvalidSprint {
                index,
                title: story.title.clone(),
                sprint: story.sprint,
            });
        }
    }
    Ok(())
}

fn find_milestone(milestones: &[Milestone], sprint: i64) -> Option<&Milestone> {
    milestones.iter().find(|m| i64::from(m.sprint) == sprint)
}

/// Converts stories into issues, one per story, in input order.
///
/// The whole batch is validated first; on error no issue id is consumed.
/// A story whose sprint has no milestone in `milestones` is rejected too.
pub fn synthesize(
    stories: &[UserStory],
    milestones: &[Milestone],
    repository: &str,
    ids: &mut IdAllocator,
) -> Result<Vec<Issue>> {
    validate(stories)?;

    let mut issues = Vec::with_capacity(stories.len());
    for (idx, story) in stories.iter().enumerate() {
        let milestone = find_milestone(milestones, story.sprint).ok_or_else(|| {
            Error::InvalidSprint {
                index: idx + 1,
                title: story.title.clone(),
                sprint: story.sprint,
            }
        })?;
        issues.push(Issue {
            id: ids.next(EntityKind::Issue)?,
            title: story.title.clone(),
            body: story.description.clone(),
            assignee: story.assignee.clone(),
            labels: story.labels.clone(),
            milestone_id: milestone.id,
            state: State::Open,
            repository: repository.to_string(),
        });
    }
    Ok(issues)
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
