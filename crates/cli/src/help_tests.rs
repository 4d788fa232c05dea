// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for help text content.
//!
//! Colors depend on the environment, so assertions compare text with ANSI
//! escapes removed.

#![allow(clippy::unwrap_used)]

use super::*;

fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, c) => result.push(c),
        }
    }
    result
}

#[test]
fn commands_lists_every_subcommand() {
    let text = strip_ansi(&commands());
    for name in ["plan", "visualize", "init", "schema", "completion"] {
        assert!(
            text.lines().any(|l| l.trim_start().starts_with(name)),
            "missing {name} in:\n{text}"
        );
    }
}

#[test]
fn commands_groups_under_headers() {
    let text = strip_ansi(&commands());
    assert!(text.starts_with("Sprint Planning:"));
    assert!(text.contains("\nSetup:\n"));
}

#[test]
fn template_keeps_clap_placeholders() {
    let text = strip_ansi(&template());
    assert!(text.contains("{usage-heading} {usage}"));
    assert!(text.contains("{before-help}Options:\n{options}{after-help}"));
}

#[test]
fn quickstart_mentions_plan_and_visualize() {
    let text = strip_ansi(&quickstart());
    assert!(text.starts_with("Get started:"));
    assert!(text.contains("sprig plan <owner> <repo> stories.json"));
    assert!(text.contains("sprig visualize"));
}
