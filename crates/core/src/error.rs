// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sg-core operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::EntityKind;

/// All possible errors that can occur in sg-core operations.
///
/// Variants fall into two families: validation errors (bad input, always
/// raised before anything is written) and storage errors (I/O or corrupt
/// on-disk records, always fatal).
#[derive(Debug, Error)]
pub enum Error {
    #[error("story {index}: missing title\n  hint: every story needs a non-empty \"title\"")]
    MissingTitle { index: usize },

    #[error("story {index} ('{title}'): invalid sprint {sprint}\n  hint: valid sprints are: 1, 2")]
    InvalidSprint {
        index: usize,
        title: String,
        sprint: i64,
    },

    #[error("malformed input{}: {reason}", line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    MalformedInput { line: Option<usize>, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupt record {}: {reason}", path.display())]
    CorruptRecord { path: PathBuf, reason: String },

    #[error("issue {issue} references missing milestone {milestone}")]
    DanglingMilestone { issue: u64, milestone: u64 },

    #[error("store is locked: {0}\n  hint: another plan is writing to this store")]
    StoreLocked(String),

    #[error("no {kind} ids left in store\n  hint: the highest stored {kind} id is already at the limit")]
    IdSpaceExhausted { kind: EntityKind },
}

impl Error {
    /// Stable, kebab-case name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MissingTitle { .. } => "missing-title",
            Error::InvalidSprint { .. } => "invalid-sprint",
            Error::MalformedInput { .. } => "malformed-input",
            Error::Io(_) => "io",
            Error::Json(_) => "json",
            Error::CorruptRecord { .. } => "corrupt-record",
            Error::DanglingMilestone { .. } => "dangling-milestone",
            Error::StoreLocked(_) => "store-locked",
            Error::IdSpaceExhausted { .. } => "id-space-exhausted",
        }
    }

    /// Returns true for errors caused by bad input rather than storage.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingTitle { .. } | Error::InvalidSprint { .. } | Error::MalformedInput { .. }
        )
    }
}

/// A specialized Result type for sg-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
