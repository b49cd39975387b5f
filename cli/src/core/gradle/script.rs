//! # Build Script Edits
//!
//! File: cli/src/core/gradle/script.rs
//!
//! ## Overview
//!
//! Adds and removes single lines inside the `dependencies { … }` and
//! `configurations { … }` blocks of a `build.gradle` file.
//!
//! - **Dependencies**: inserted as the first entry of the block. The block must
//!   already exist; a script without one is rejected rather than patched.
//! - **Configurations**: inserted as the first entry of the block, or, when the
//!   file has no such block yet, appended in a new block at the end.
//! - **Removal**: deletes the matching line only. An emptied block stays.
//!
//! Presence is decided by comparing trimmed lines, so a dependency indented with
//! spaces is recognised when the caller passes it unindented.
//!
use super::{append_block, contains_line, insert_after_block_opener, opens_block, remove_lines};
use crate::core::error::{Result, ScaffoldError};
use tracing::debug;

const DEPENDENCIES: &str = "dependencies";
const CONFIGURATIONS: &str = "configurations";

/// Adds `dependency` as the first line of the `dependencies` block.
///
/// # Errors
///
/// Returns `ScaffoldError::AnchorNotFound` when the script has no `dependencies {` block
/// and the dependency is not already present.
pub fn add_dependency(build: &str, dependency: &str) -> Result<String> {
    if contains_line(build, dependency) {
        debug!("Dependency '{}' already present, skipping", dependency.trim());
        return Ok(build.to_string());
    }
    let updated = insert_after_block_opener(build, DEPENDENCIES, dependency).ok_or_else(|| {
        ScaffoldError::AnchorNotFound {
            anchor: format!("{DEPENDENCIES} {{"),
        }
    })?;
    debug!("Added dependency '{}'", dependency.trim());
    Ok(updated)
}

/// Removes every line equal (after trimming) to `dependency`.
pub fn remove_dependency(build: &str, dependency: &str) -> String {
    remove_trimmed(build, dependency, "dependency")
}

/// Adds `configuration` to the `configurations` block, creating the block when missing.
///
/// A new block is appended after one blank line as:
///
/// ```text
/// configurations{
/// 	<configuration>
/// }
/// ```
pub fn add_configuration(build: &str, configuration: &str) -> String {
    if let Some(updated) = insert_configuration(build, configuration) {
        return updated;
    }
    debug!(
        "No configurations block found, appending one for '{}'",
        configuration.trim()
    );
    let block = [
        format!("{CONFIGURATIONS}{{"),
        format!("\t{}", configuration.trim()),
        "}".to_string(),
    ];
    append_block(build, &block)
}

fn insert_configuration(build: &str, configuration: &str) -> Option<String> {
    if !build.lines().any(|line| opens_block(line, CONFIGURATIONS)) {
        return None;
    }
    if contains_line(build, configuration) {
        debug!(
            "Configuration '{}' already present, skipping",
            configuration.trim()
        );
        return Some(build.to_string());
    }
    debug!("Added configuration '{}'", configuration.trim());
    insert_after_block_opener(build, CONFIGURATIONS, configuration)
}

/// Removes every line equal (after trimming) to `configuration`.
pub fn remove_configuration(build: &str, configuration: &str) -> String {
    remove_trimmed(build, configuration, "configuration")
}

fn remove_trimmed(build: &str, target: &str, kind: &str) -> String {
    let target = target.trim();
    let (updated, removed) = remove_lines(build, |line| line.trim() == target);
    debug!("Removed {} {} line(s) matching '{}'", removed, kind, target);
    updated
}

/// Renders an external artifact dependency: `implementation '<coordinates>'`.
pub fn build_implementation(coordinates: &str) -> String {
    format!("implementation '{coordinates}'")
}

/// Renders a project dependency: `implementation project('<module>')`.
///
/// `module` is used as given, so callers pass the Gradle path including its colon (`:model`).
pub fn build_implementation_from_project(module: &str) -> String {
    format!("implementation project('{module}')")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUILD: &str = "apply plugin: 'org.springframework.boot'\n\
dependencies {\n    \
implementation project(':model')\n    \
implementation project(':usecase')\n\
}\n";

    #[test]
    fn test_add_dependency_first_in_block() -> Result<()> {
        let result = add_dependency(BUILD, "implementation project(':my-module')")?;
        assert_eq!(
            result,
            "apply plugin: 'org.springframework.boot'\n\
dependencies {\n\
\timplementation project(':my-module')\n    \
implementation project(':model')\n    \
implementation project(':usecase')\n\
}\n"
        );
        Ok(())
    }

    #[test]
    fn test_add_dependency_present_with_other_indentation() -> Result<()> {
        let result = add_dependency(BUILD, "\timplementation project(':model')")?;
        assert_eq!(result, BUILD);
        Ok(())
    }

    #[test]
    fn test_add_dependency_without_block_fails() {
        let err = add_dependency("plugins {\n}\n", "implementation 'x:y:1'").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::AnchorNotFound { .. })
        ));
    }

    #[test]
    fn test_add_dependency_is_idempotent() -> Result<()> {
        let once = add_dependency(BUILD, "implementation 'a:b:1'")?;
        let twice = add_dependency(&once, "implementation 'a:b:1'")?;
        assert_eq!(once, twice);
        Ok(())
    }

    #[test]
    fn test_remove_dependency_keeps_block() {
        let result = remove_dependency(
            "dependencies {\n    implementation project(':model')\n}\n",
            "implementation project(':model')",
        );
        assert_eq!(result, "dependencies {\n}\n");
    }

    #[test]
    fn test_remove_dependency_absent_is_noop() {
        assert_eq!(remove_dependency(BUILD, "implementation 'nope'"), BUILD);
    }

    #[test]
    fn test_add_configuration_creates_block() {
        let result = add_configuration("dependencies {\n}", "compile.exclude group: \"x\"");
        assert_eq!(
            result,
            "dependencies {\n}\n\nconfigurations{\n\tcompile.exclude group: \"x\"\n}"
        );
    }

    #[test]
    fn test_add_configuration_collapses_trailing_newlines() {
        let result = add_configuration("dependencies {\n}\n\n", "a");
        assert_eq!(result, "dependencies {\n}\n\nconfigurations{\n\ta\n}");
    }

    #[test]
    fn test_add_configuration_block_keeps_crlf() {
        let result = add_configuration("dependencies {\r\n}\r\n", "a");
        assert_eq!(result, "dependencies {\r\n}\r\n\r\nconfigurations{\r\n\ta\r\n}");
        assert!(!result.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn test_add_configuration_into_existing_compact_block() {
        let text = "configurations{\n\ta\n}";
        assert_eq!(add_configuration(text, "b"), "configurations{\n\tb\n\ta\n}");
        assert_eq!(add_configuration(text, "a"), text);
    }

    #[test]
    fn test_remove_configuration() {
        let text = "configurations {\n    a\n    b\n}";
        assert_eq!(remove_configuration(text, "a"), "configurations {\n    b\n}");
    }

    #[test]
    fn test_build_implementation_helpers() {
        assert_eq!(build_implementation("module"), "implementation 'module'");
        assert_eq!(
            build_implementation_from_project(":module"),
            "implementation project(':module')"
        );
    }
}
