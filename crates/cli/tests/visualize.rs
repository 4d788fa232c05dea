// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;
use similar_asserts::assert_eq;

fn planned() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_stories(&temp, "stories.json", TWO_STORIES);
    plan(&temp, "stories.json").success();
    temp
}

fn visualize(temp: &TempDir) -> String {
    let output = sprig()
        .arg("visualize")
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn shows_each_sprint_and_assignee() {
    let temp = planned();

    let report = visualize(&temp);

    assert!(report.starts_with("=== MILESTONES ===\n"));
    assert!(report.contains("| 1 | Sprint 1 | Sprint 1 tasks | 2025-03-10 | 1      |"));
    assert!(report.contains("=== Sprint 1 (due 2025-03-10) ==="));
    assert!(report.contains("=== Sprint 2 (due 2025-03-17) ==="));
    assert!(report.contains("| 1       | Add login | alice    | auth, ui |"));
    assert!(report.contains("=== ISSUES BY ASSIGNEE ==="));
    assert!(report.contains("Assignee: alice"));
    assert!(report.contains("Assignee: Unassigned"));
}

#[test]
fn output_is_stable_between_runs() {
    let temp = planned();
    assert_eq!(visualize(&temp), visualize(&temp));
}

#[test]
fn empty_store_succeeds() {
    let temp = TempDir::new().unwrap();

    sprig()
        .arg("visualize")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No milestones found."))
        .stdout(predicate::str::contains("No issues found."));

    assert!(!temp.path().join(STORE).exists());
}

#[test]
fn timestamp_flag_adds_generated_line() {
    let temp = planned();

    sprig()
        .args(["visualize", "--timestamp"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^Generated at: \d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z\n\n").unwrap());
}

#[test]
fn config_timestamp_applies_without_flag() {
    let temp = planned();
    std::fs::write(temp.path().join("sprig.toml"), "timestamp = true\n").unwrap();

    sprig()
        .arg("visualize")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Generated at: "));
}

#[test]
fn corrupt_record_fails() {
    let temp = planned();
    std::fs::write(temp.path().join(STORE).join("milestones/1.json"), "garbage").unwrap();

    sprig()
        .arg("visualize")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[corrupt-record]"))
        .stderr(predicate::str::contains("1.json"));
}

#[test]
fn broken_config_fails() {
    let temp = planned();
    std::fs::write(temp.path().join("sprig.toml"), "timestamp = \"yes\"\n").unwrap();

    sprig()
        .arg("visualize")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[config]"));
}
