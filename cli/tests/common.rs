//! # cleanarch CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each `.rs` file in `cli/tests/`
//! is compiled as a separate test crate; this one is pulled in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Settings script of a freshly generated clean-architecture project.
pub const SETTINGS: &str = "rootProject.name = 'cleanArchitecture'

include ':app-service'
include ':model'
include ':usecase'
project(':app-service').projectDir = file('./applications/app-service')
project(':model').projectDir = file('./domain/model')
project(':usecase').projectDir = file('./domain/usecase')";

/// Build script of the app-service module.
pub const BUILD: &str = "apply plugin: 'org.springframework.boot'

dependencies {
    implementation project(':model')
    implementation project(':usecase')
    implementation 'org.springframework.boot:spring-boot-starter'
}";

/// Creates an `assert_cmd::Command` for the compiled `cleanarch` binary.
///
/// The command runs inside `project` with the user's config directory redirected
/// there as well, so no configuration outside the test directory is picked up.
pub fn cleanarch_cmd(project: &Path) -> Command {
    let mut cmd =
        Command::cargo_bin("cleanarch").expect("Failed to find cleanarch binary for testing");
    cmd.current_dir(project)
        .env("HOME", project)
        .env("XDG_CONFIG_HOME", project.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Creates a project directory with `settings.gradle` and `build.gradle`.
///
/// A `.git` directory stops the configuration search at the project root.
pub fn setup_project() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp project dir");
    fs::create_dir_all(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join("settings.gradle"), SETTINGS).unwrap();
    fs::write(dir.path().join("build.gradle"), BUILD).unwrap();
    dir
}

/// Reads a file of the test project.
pub fn read(project: &Path, relative: &str) -> String {
    fs::read_to_string(project.join(relative)).expect("Failed to read project file")
}
