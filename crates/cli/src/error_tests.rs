// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    invalid_date = { Error::InvalidDate { value: "03/03/2025".into() }, "03/03/2025" },
    config = { Error::Config("failed to parse config".into()), "failed to parse config" },
    already_initialized = { Error::AlreadyInitialized("sprig.toml".into()), "already initialized" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn core_errors_display_unchanged() {
    let core = sg_core::Error::InvalidSprint {
        index: 2,
        title: "Add logout".into(),
        sprint: 3,
    };
    let expected = core.to_string();
    let err: Error = core.into();
    assert_eq!(err.to_string(), expected);
}

#[parameterized(
    missing_title = { Error::Core(sg_core::Error::MissingTitle { index: 1 }), "missing-title" },
    locked = { Error::Core(sg_core::Error::StoreLocked("x".into())), "store-locked" },
    invalid_date = { Error::InvalidDate { value: "x".into() }, "invalid-date" },
    config = { Error::Config("x".into()), "config" },
)]
fn kind_is_stable(err: Error, kind: &str) {
    assert_eq!(err.kind(), kind);
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}
