// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User story input.
//!
//! Stories arrive as either a JSON array or JSON Lines (one object per line).
//! The whole input is parsed before anything else happens, and optional
//! fields are defaulted here so downstream code never re-checks them.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// A validated-shape user story, ready for issue synthesis.
///
/// `title` may still be empty and `sprint` may still be out of range; those
/// are reported by the issue synthesizer with the story's position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStory {
    pub title: String,
    pub description: String,
    pub assignee: Option<String>,
    /// Distinct labels in first-seen order.
    pub labels: Vec<String>,
    pub sprint: i64,
}

impl UserStory {
    /// Creates a story with only the required fields set.
    pub fn new(title: impl Into<String>, sprint: i64) -> Self {
        UserStory {
            title: title.into(),
            description: String::new(),
            assignee: None,
            labels: Vec::new(),
            sprint,
        }
    }
}

// Wire shape; every optional field tolerates both absence and null.
#[derive(Deserialize)]
struct RawStory {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    assignee: Option<String>,
    #[serde(default)]
    labels: Option<Vec<String>>,
    sprint: i64,
}

impl From<RawStory> for UserStory {
    fn from(raw: RawStory) -> Self {
        let mut labels: Vec<String> = Vec::new();
        for label in raw.labels.unwrap_or_default() {
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        UserStory {
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            assignee: raw.assignee.filter(|a| !a.trim().is_empty()),
            labels,
            sprint: raw.sprint,
        }
    }
}

/// Parses stories from text holding a JSON array or JSON Lines.
pub fn parse(content: &str) -> Result<Vec<UserStory>> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Err(Error::MalformedInput {
            line: None,
            reason: "input is empty".to_string(),
        });
    }

    if trimmed.starts_with('[') {
        let raw: Vec<RawStory> =
            serde_json::from_str(content).map_err(|e| Error::MalformedInput {
                line: Some(e.line()),
                reason: describe(&e),
            })?;
        return Ok(raw.into_iter().map(UserStory::from).collect());
    }

    let mut stories = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let raw: RawStory = serde_json::from_str(line).map_err(|e| Error::MalformedInput {
            line: Some(idx + 1),
            reason: describe(&e),
        })?;
        stories.push(raw.into());
    }
    Ok(stories)
}

// serde_json appends "at line L column C"; the line is reported separately.
fn describe(e: &serde_json::Error) -> String {
    let message = e.to_string();
    let position = format!(" at line {} column {}", e.line(), e.column());
    match message.strip_suffix(&position) {
        Some(stripped) => stripped.to_string(),
        None => message,
    }
}

/// Reads and parses a stories file.
pub fn load(path: &Path) -> Result<Vec<UserStory>> {
    let content = fs::read_to_string(path).map_err(|e| Error::MalformedInput {
        line: None,
        reason: format!("cannot read {}: {}", path.display(), e),
    })?;
    parse(&content)
}

#[cfg(test)]
#[path = "story_tests.rs"]
mod tests;
