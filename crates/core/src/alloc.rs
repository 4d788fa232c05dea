// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier allocation for milestones and issues.
//!
//! Each [`EntityKind`] has its own counter. A fresh allocator starts every
//! kind at 1; one seeded from a tracker continues after the highest id
//! already persisted, so repeated runs against the same store never collide.
//! Running out of ids is an error, never a wrap-around.

use crate::error::{Error, Result};
use crate::record::EntityKind;
use crate::tracker::Tracker;

/// Hands out monotonically increasing ids per entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next_milestone: u64,
    next_issue: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::fresh()
    }
}

impl IdAllocator {
    /// Creates an allocator for an empty store.
    pub fn fresh() -> Self {
        IdAllocator {
            next_milestone: 1,
            next_issue: 1,
        }
    }

    /// Creates an allocator that continues after the highest ids in `tracker`.
    pub fn from_tracker<T: Tracker + ?Sized>(tracker: &T) -> Result<Self> {
        Ok(IdAllocator {
            next_milestone: successor(tracker.max_id(EntityKind::Milestone)?, EntityKind::Milestone)?,
            next_issue: successor(tracker.max_id(EntityKind::Issue)?, EntityKind::Issue)?,
        })
    }

    /// Returns the id the next call to [`next`](Self::next) will produce.
    pub fn peek(&self, kind: EntityKind) -> u64 {
        match kind {
            EntityKind::Milestone => self.next_milestone,
            EntityKind::Issue => self.next_issue,
        }
    }

    /// Allocates the next id for `kind`.
    ///
    /// `u64::MAX` is never handed out; the counter stops one short of it.
    pub fn next(&mut self, kind: EntityKind) -> Result<u64> {
        let counter = match kind {
            EntityKind::Milestone => &mut self.next_milestone,
            EntityKind::Issue => &mut self.next_issue,
        };
        let id = *counter;
        *counter = successor(id, kind)?;
        Ok(id)
    }
}

fn successor(id: u64, kind: EntityKind) -> Result<u64> {
    id.checked_add(1).ok_or(Error::IdSpaceExhausted { kind })
}

#[cfg(test)]
#[path = "alloc_tests.rs"]
mod tests;
