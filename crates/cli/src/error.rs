// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the sprigrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("already initialized: {0} exists")]
    AlreadyInitialized(String),

    #[error("invalid date '{value}'\n  hint: use YYYY-MM-DD, e.g. 2025-03-03")]
    InvalidDate { value: String },

    #[error(transparent)]
    Core(#[from] sg_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Stable, kebab-case name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::AlreadyInitialized(_) => "already-initialized",
            Error::InvalidDate { .. } => "invalid-date",
            Error::Core(e) => e.kind(),
            Error::Io(_) => "io",
            Error::Json(_) => "json",
            Error::Config(_) => "config",
        }
    }
}

/// A specialized Result type for sprigrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
