// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

#[test]
fn parse_json_array_applies_defaults() {
    let stories = parse(r#"[{"title":"Add login","sprint":1}]"#).unwrap();
    assert_eq!(stories, vec![UserStory::new("Add login", 1)]);
}

#[test]
fn parse_keeps_all_fields() {
    let input = r#"[{
        "title": "Add login",
        "description": "OAuth flow",
        "assignee": "alice",
        "labels": ["auth", "frontend"],
        "sprint": 2
    }]"#;
    let story = parse(input).unwrap().remove(0);
    assert_eq!(story.title, "Add login");
    assert_eq!(story.description, "OAuth flow");
    assert_eq!(story.assignee.as_deref(), Some("alice"));
    assert_eq!(story.labels, vec!["auth", "frontend"]);
    assert_eq!(story.sprint, 2);
}

#[test]
fn parse_preserves_input_order() {
    let input = r#"[
        {"title":"c","sprint":2},
        {"title":"a","sprint":1},
        {"title":"b","sprint":2}
    ]"#;
    let titles: Vec<_> = parse(input).unwrap().into_iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["c", "a", "b"]);
}

#[test]
fn parse_treats_null_as_absent() {
    let input = r#"[{"title":"x","description":null,"assignee":null,"labels":null,"sprint":1}]"#;
    assert_eq!(parse(input).unwrap(), vec![UserStory::new("x", 1)]);
}

#[test]
fn parse_drops_duplicate_labels_keeping_first_order() {
    let input = r#"[{"title":"x","labels":["b","a","b","a","c"],"sprint":1}]"#;
    let story = parse(input).unwrap().remove(0);
    assert_eq!(story.labels, vec!["b", "a", "c"]);
}

#[test]
fn parse_blank_assignee_is_unassigned() {
    let input = r#"[{"title":"x","assignee":"  ","sprint":1}]"#;
    assert_eq!(parse(input).unwrap()[0].assignee, None);
}

#[test]
fn parse_missing_title_is_left_for_synthesis() {
    let stories = parse(r#"[{"sprint":1}]"#).unwrap();
    assert_eq!(stories[0].title, "");
}

#[test]
fn parse_out_of_range_sprint_is_left_for_synthesis() {
    let stories = parse(r#"[{"title":"x","sprint":3}]"#).unwrap();
    assert_eq!(stories[0].sprint, 3);
}

#[test]
fn parse_empty_array_is_ok() {
    assert!(parse("[]").unwrap().is_empty());
}

#[test]
fn parse_json_lines() {
    let input = "{\"title\":\"a\",\"sprint\":1}\n\n{\"title\":\"b\",\"sprint\":2}\n";
    let stories = parse(input).unwrap();
    assert_eq!(stories.len(), 2);
    assert_eq!(stories[1], UserStory::new("b", 2));
}

#[test]
fn parse_json_lines_reports_offending_line() {
    let input = "{\"title\":\"a\",\"sprint\":1}\n{\"title\":\"b\"}\n";
    match parse(input).unwrap_err() {
        Error::MalformedInput { line, reason } => {
            assert_eq!(line, Some(2));
            assert!(reason.contains("sprint"), "reason: {reason}");
            assert!(!reason.contains("column"), "reason: {reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[parameterized(
    empty = { "" },
    whitespace = { "  \n\t" },
    truncated = { "[{\"title\":\"a\",\"sprint\":1}" },
    sprint_is_string = { "[{\"title\":\"a\",\"sprint\":\"1\"}]" },
    missing_sprint = { "[{\"title\":\"a\"}]" },
    not_json = { "title: a" },
    labels_not_list = { "[{\"title\":\"a\",\"labels\":\"x\",\"sprint\":1}]" },
)]
fn parse_rejects_malformed_input(input: &str) {
    let err = parse(input).unwrap_err();
    assert!(matches!(err, Error::MalformedInput { .. }), "got {err:?}");
    assert!(err.is_validation());
}

#[test]
fn load_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stories.json");
    std::fs::write(&path, r#"[{"title":"Add login","sprint":1}]"#).unwrap();

    let stories = load(&path).unwrap();
    assert_eq!(stories.len(), 1);
}

#[test]
fn load_missing_file_is_malformed_input() {
    let dir = TempDir::new().unwrap();
    let err = load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::MalformedInput { line: None, .. }));
    assert!(err.to_string().contains("nope.json"));
}
