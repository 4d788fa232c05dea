// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::colors;
use crate::error::Result;
use sg_core::{Issue, Milestone, PlanOutcome};

/// Shown in place of a missing assignee.
pub const UNASSIGNED: &str = "Unassigned";

/// Options controlling report rendering.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// When set, a generated-at line is printed above the stored data.
    pub generated_at: Option<DateTime<Utc>>,
    /// Colorize section headers.
    pub color: bool,
}

/// Render rows as a grid table.
///
/// ```text
/// +----+-----------+
/// | #  | Title     |
/// +====+===========+
/// | 1  | Add login |
/// +----+-----------+
/// ```
///
/// Newlines inside cells are flattened to spaces.
pub fn grid_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(String::as_str).map(flatten).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let rule = |fill: char| {
        let mut line = String::from("+");
        for w in &widths {
            line.extend(std::iter::repeat(fill).take(w + 2));
            line.push('+');
        }
        line
    };
    let row_line = |values: &[&str]| {
        let mut line = String::from("|");
        for (i, w) in widths.iter().enumerate() {
            let value = values.get(i).copied().unwrap_or("");
            let pad = w - value.chars().count();
            line.push(' ');
            line.push_str(value);
            line.extend(std::iter::repeat(' ').take(pad + 1));
            line.push('|');
        }
        line
    };

    let mut out = Vec::with_capacity(cells.len() * 2 + 3);
    out.push(rule('-'));
    out.push(row_line(headers));
    out.push(rule('='));
    for row in &cells {
        let values: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push(row_line(&values));
        out.push(rule('-'));
    }
    if cells.is_empty() {
        out.pop();
        out.push(rule('-'));
    }
    out.join("\n")
}

fn flatten(cell: &str) -> String {
    cell.split(['\n', '\r']).filter(|s| !s.is_empty()).collect::<Vec<_>>().join(" ")
}

fn section_header(title: &str, color: bool) -> String {
    let text = format!("=== {title} ===");
    if color {
        colors::header(&text)
    } else {
        text
    }
}

/// Display name of an issue's assignee.
pub fn assignee_name(issue: &Issue) -> &str {
    issue.assignee.as_deref().unwrap_or(UNASSIGNED)
}

/// Render the full sprint report.
///
/// `milestones` and `issues` are expected in ascending id order, as returned
/// by the store. An issue pointing at a milestone that is not present is an
/// error: the report never presents partial sprint data as complete.
pub fn format_report(
    milestones: &[Milestone],
    issues: &[Issue],
    options: &ReportOptions,
) -> Result<String> {
    for issue in issues {
        if !milestones.iter().any(|m| m.id == issue.milestone_id) {
            return Err(sg_core::Error::DanglingMilestone {
                issue: issue.id,
                milestone: issue.milestone_id,
            }
            .into());
        }
    }

    let mut out: Vec<String> = Vec::new();

    if let Some(at) = options.generated_at {
        out.push(format!(
            "Generated at: {}",
            at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        out.push(String::new());
    }

    out.push(section_header("MILESTONES", options.color));
    if milestones.is_empty() {
        out.push("No milestones found.".to_string());
    } else {
        let rows: Vec<Vec<String>> = milestones
            .iter()
            .map(|m| {
                let count = issues.iter().filter(|i| i.milestone_id == m.id).count();
                vec![
                    m.id.to_string(),
                    m.title.clone(),
                    m.description.clone(),
                    m.due_on.to_string(),
                    count.to_string(),
                ]
            })
            .collect();
        out.push(grid_table(&["#", "Title", "Description", "Due", "Issues"], &rows));
    }

    for milestone in milestones {
        out.push(String::new());
        out.push(section_header(
            &format!("{} (due {})", milestone.title, milestone.due_on),
            options.color,
        ));
        let rows: Vec<Vec<String>> = issues
            .iter()
            .filter(|i| i.milestone_id == milestone.id)
            .map(|i| {
                vec![
                    i.id.to_string(),
                    i.title.clone(),
                    assignee_name(i).to_string(),
                    i.labels.join(", "),
                ]
            })
            .collect();
        if rows.is_empty() {
            out.push("  No issues.".to_string());
        } else {
            out.push(grid_table(&["Issue #", "Title", "Assignee", "Labels"], &rows));
        }
    }

    out.push(String::new());
    out.push(section_header("ISSUES BY ASSIGNEE", options.color));
    if issues.is_empty() {
        out.push("No issues found.".to_string());
    } else {
        for (assignee, group) in group_by_assignee(issues) {
            out.push(String::new());
            out.push(format!("Assignee: {assignee}"));
            let rows: Vec<Vec<String>> = group
                .iter()
                .map(|i| {
                    let sprint = milestones
                        .iter()
                        .find(|m| m.id == i.milestone_id)
                        .map(|m| m.title.clone())
                        .unwrap_or_default();
                    vec![i.id.to_string(), i.title.clone(), sprint, i.labels.join(", ")]
                })
                .collect();
            out.push(grid_table(&["Issue #", "Title", "Sprint", "Labels"], &rows));
        }
    }

    let mut report = out.join("\n");
    report.push('\n');
    Ok(report)
}

/// Group issues by assignee, names sorted, with unassigned issues last.
///
/// Grouping is by displayed name, so an assignee literally called
/// "Unassigned" shares the unassigned group.
fn group_by_assignee(issues: &[Issue]) -> Vec<(&str, Vec<&Issue>)> {
    let mut named: BTreeMap<&str, Vec<&Issue>> = BTreeMap::new();
    for issue in issues {
        named.entry(assignee_name(issue)).or_default().push(issue);
    }
    let unassigned = named.remove(UNASSIGNED);
    let mut groups: Vec<(&str, Vec<&Issue>)> = named.into_iter().collect();
    if let Some(group) = unassigned {
        groups.push((UNASSIGNED, group));
    }
    groups
}

/// Render what a plan created: one line per record, then a summary table.
pub fn format_plan_summary(outcome: &PlanOutcome, store_root: &str) -> String {
    let mut out = Vec::new();
    for m in &outcome.milestones {
        out.push(format!(
            "Created milestone #{}: {} (due: {})",
            m.id, m.title, m.due_on
        ));
    }
    for i in &outcome.issues {
        out.push(format!("Created issue #{}: {}", i.id, i.title));
    }

    out.push(String::new());
    out.push("Sprint Planning Summary:".to_string());
    if outcome.issues.is_empty() {
        out.push("No issues planned.".to_string());
    } else {
        let rows: Vec<Vec<String>> = outcome
            .issues
            .iter()
            .map(|i| {
                let sprint = outcome
                    .milestone_for(i)
                    .map(|m| m.title.clone())
                    .unwrap_or_default();
                vec![
                    i.id.to_string(),
                    i.title.clone(),
                    assignee_name(i).to_string(),
                    sprint,
                ]
            })
            .collect();
        out.push(grid_table(&["Issue #", "Title", "Assignee", "Sprint"], &rows));
    }

    out.push(String::new());
    out.push(format!("Saved to '{}'", store_root));
    let mut text = out.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
