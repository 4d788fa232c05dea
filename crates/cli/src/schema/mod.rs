// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for the stories file and stored records.
//!
//! These mirror the runtime types in `sg_core` but carry the doc comments
//! that end up in the generated JSON Schema, and keep schemars out of the
//! core crate.

// Allow unused fields - these types exist only for schema generation
#![allow(dead_code)]

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::Serialize;

/// One user story in a stories file.
///
/// A stories file is a JSON array of these, or one per line (JSON Lines).
#[derive(JsonSchema, Serialize)]
pub struct StoryJson {
    /// Short description of the work. Must not be blank.
    #[serde(default)]
    pub title: String,
    /// Longer description, becomes the issue body.
    #[serde(default)]
    pub description: String,
    /// Person the issue is assigned to. Blank means unassigned.
    #[serde(default)]
    pub assignee: Option<String>,
    /// Labels for the issue. Duplicates are dropped, keeping the first.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Sprint number, 1 or 2.
    pub sprint: i64,
}

/// Contents of a stories file.
#[derive(JsonSchema, Serialize)]
#[serde(transparent)]
pub struct StoriesJson(pub Vec<StoryJson>);

/// Lifecycle state of a stored record.
#[derive(JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Open,
}

/// A milestone record, stored as `milestones/<id>.json`.
#[derive(JsonSchema, Serialize)]
pub struct MilestoneJson {
    /// Milestone identifier, unique among milestones.
    pub id: u64,
    /// Sprint number this milestone stands for.
    pub sprint: u32,
    /// Display title, e.g. "Sprint 1".
    pub title: String,
    pub description: String,
    /// Last day of the sprint.
    pub due_on: NaiveDate,
    pub state: State,
    /// `owner/repo` the milestone was planned for.
    pub repository: String,
}

/// An issue record, stored as `issues/<id>.json`.
#[derive(JsonSchema, Serialize)]
pub struct IssueJson {
    /// Issue identifier, unique among issues.
    pub id: u64,
    pub title: String,
    /// Story description.
    pub body: String,
    /// Omitted when unassigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub labels: Vec<String>,
    /// Id of the milestone for the story's sprint.
    pub milestone_id: u64,
    pub state: State,
    /// `owner/repo` the issue was planned for.
    pub repository: String,
}
