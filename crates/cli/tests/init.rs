// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

#[test]
fn creates_config_and_store() {
    let temp = TempDir::new().unwrap();

    sprig()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized sprig"));

    assert!(temp.path().join("sprig.toml").exists());
    assert!(temp.path().join(STORE).join("milestones").is_dir());
}

#[test]
fn later_commands_use_configured_store() {
    let temp = TempDir::new().unwrap();
    sprig()
        .args(["-s", "sim", "init"])
        .current_dir(temp.path())
        .assert()
        .success();
    write_stories(&temp, "stories.json", TWO_STORIES);

    plan(&temp, "stories.json").success();

    assert!(temp.path().join("sim/issues/2.json").exists());
    assert!(!temp.path().join(STORE).exists());
}

#[test]
fn fails_if_already_initialized() {
    let temp = TempDir::new().unwrap();
    sprig().arg("init").current_dir(temp.path()).assert().success();

    sprig()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn schema_outputs_json() {
    let output = sprig().args(["schema", "stories"]).output().unwrap();
    assert!(output.status.success());

    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(schema["type"], "array");
}

#[test]
fn completion_mentions_commands() {
    sprig()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("visualize"));
}

#[test]
fn help_lists_commands() {
    sprig()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sprint Planning:"))
        .stdout(predicate::str::contains("plan"));
}
