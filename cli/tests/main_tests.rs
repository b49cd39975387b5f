//! # cleanarch CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behavior of the `cleanarch` binary: standard flags, unknown
//! commands and error reporting.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let project = setup_project();
    cleanarch_cmd(project.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("module")
                .and(predicate::str::contains("dependency"))
                .and(predicate::str::contains("configuration")),
        );
}

#[test]
fn test_version_flag() {
    let project = setup_project();
    cleanarch_cmd(project.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_command_fails() {
    let project = setup_project();
    cleanarch_cmd(project.path())
        .arg("scaffold")
        .assert()
        .failure();
}

#[test]
fn test_errors_are_reported_on_stderr() {
    let project = setup_project();
    cleanarch_cmd(project.path())
        .args(["dependency", "add", "--project", ":x", "--build", "missing.gradle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:").and(predicate::str::contains("missing.gradle")));
}

#[test]
fn test_invalid_project_config_fails() {
    let project = setup_project();
    std::fs::write(project.path().join(".cleanarch.toml"), "[project]\nunknown = 1\n").unwrap();
    cleanarch_cmd(project.path())
        .args(["module", "add", "api-rest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load cleanarch configuration"));
}
