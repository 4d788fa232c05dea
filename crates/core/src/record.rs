// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared record vocabulary: entity kinds, record state, and the
//! [`Record`] trait implemented by everything the store persists.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

/// The kinds of entity kept in the store, each with its own id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Milestone,
    Issue,
}

impl EntityKind {
    /// Returns the string representation used in logs and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Milestone => "milestone",
            EntityKind::Issue => "issue",
        }
    }

    /// Name of the store subdirectory holding records of this kind.
    pub fn dir_name(&self) -> &'static str {
        match self {
            EntityKind::Milestone => "milestones",
            EntityKind::Issue => "issues",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of a simulated record.
///
/// The simulator never closes anything, so `Open` is the only state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    #[default]
    Open,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Open => "open",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted entity with a numeric identifier.
pub trait Record: Serialize + DeserializeOwned {
    /// Kind shared by every value of this type.
    const KIND: EntityKind;

    /// Allocator-assigned identifier, unique within [`Self::KIND`].
    fn id(&self) -> u64;
}
