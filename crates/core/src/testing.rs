// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory [`Tracker`] for exercising planning without a filesystem.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::issue::Issue;
use crate::milestone::Milestone;
use crate::record::EntityKind;
use crate::tracker::Tracker;

#[derive(Debug, Default)]
pub struct MemoryTracker {
    pub milestones: Vec<Milestone>,
    pub issues: Vec<Issue>,
    pub(crate) floors: HashMap<EntityKind, u64>,
    /// Fail the write of the issue with this id.
    pub fail_issue: Option<u64>,
}

impl MemoryTracker {
    /// Pretend ids up to `max` are already taken for `kind`.
    pub fn seed(&mut self, kind: EntityKind, max: u64) -> &mut Self {
        self.floors.insert(kind, max);
        self
    }
}

impl Tracker for MemoryTracker {
    fn max_id(&self, kind: EntityKind) -> Result<u64> {
        let stored = match kind {
            EntityKind::Milestone => self.milestones.iter().map(|m| m.id).max(),
            EntityKind::Issue => self.issues.iter().map(|i| i.id).max(),
        };
        let floor = self.floors.get(&kind).copied().unwrap_or(0);
        Ok(stored.unwrap_or(0).max(floor))
    }

    fn create_milestone(&mut self, milestone: &Milestone) -> Result<()> {
        self.milestones.push(milestone.clone());
        Ok(())
    }

    fn create_issue(&mut self, issue: &Issue) -> Result<()> {
        if self.fail_issue == Some(issue.id) {
            return Err(Error::Io(std::io::Error::other("injected failure")));
        }
        self.issues.push(issue.clone());
        Ok(())
    }
}
