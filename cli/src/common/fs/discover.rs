//! # Gradle Script Discovery
//!
//! File: cli/src/common/fs/discover.rs
//!
//! ## Overview
//!
//! Finds every Gradle script (`*.gradle`, `*.gradle.kts`) below a project root.
//! Scaffold tasks use it to visit each module's build file, e.g. when bumping a
//! dependency version across the whole project with `replace_expression`.
//!
//! Hidden directories (`.git`, `.gradle`, `.idea`) and `build/` output folders are
//! not descended into. Results are sorted for stable output.
//!
use crate::core::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

const GRADLE_EXTENSIONS: [&str; 2] = [".gradle", ".gradle.kts"];

/// True for file names Gradle treats as build scripts.
pub fn is_gradle_file(name: &str) -> bool {
    GRADLE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name == "build"
}

/// Lists all Gradle scripts under `root`, sorted by path.
///
/// # Errors
///
/// Returns `ScaffoldError::FileSystem` when `root` is not an existing directory.
pub fn find_gradle_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        anyhow::bail!(ScaffoldError::FileSystem(format!(
            "Search root is not a directory: {:?}",
            root
        )));
    }

    let mut found = Vec::new();
    for entry_result in WalkDir::new(root).into_iter().filter_entry(|e| !is_skipped_dir(e)) {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                warn!("Failed to access entry under '{}': {}", root.display(), e);
                continue;
            }
        };
        if entry.file_type().is_file() && is_gradle_file(&entry.file_name().to_string_lossy()) {
            debug!("Found Gradle script: {}", entry.path().display());
            found.push(entry.into_path());
        }
    }
    found.sort();
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_is_gradle_file() {
        assert!(is_gradle_file("build.gradle"));
        assert!(is_gradle_file("settings.gradle.kts"));
        assert!(is_gradle_file("main.gradle"));
        assert!(!is_gradle_file("gradle.properties"));
        assert!(!is_gradle_file("Model.java"));
    }

    #[test]
    fn test_finds_only_gradle_scripts() -> Result<()> {
        let root = tempdir()?;
        touch(root.path(), "settings.gradle");
        touch(root.path(), "build.gradle");
        touch(root.path(), "main.gradle");
        touch(root.path(), "gradle.properties");
        touch(root.path(), "domain/model/build.gradle");
        touch(root.path(), "infrastructure/entry-points/api-rest/build.gradle.kts");
        touch(root.path(), "domain/model/src/main/java/Model.java");

        let found = find_gradle_files(root.path())?;
        let relative: Vec<String> = found
            .iter()
            .map(|p| {
                p.strip_prefix(root.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(
            relative,
            vec![
                "build.gradle",
                "domain/model/build.gradle",
                "infrastructure/entry-points/api-rest/build.gradle.kts",
                "main.gradle",
                "settings.gradle",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_skips_hidden_and_build_dirs() -> Result<()> {
        let root = tempdir()?;
        touch(root.path(), "build.gradle");
        touch(root.path(), ".gradle/caches/init.gradle");
        touch(root.path(), "build/tmp/generated.gradle");
        touch(root.path(), "applications/app-service/build/libs/copy.gradle");

        let found = find_gradle_files(root.path())?;
        assert_eq!(found, vec![root.path().join("build.gradle")]);
        Ok(())
    }

    #[test]
    fn test_missing_root_is_error() {
        let root = tempdir().unwrap();
        let err = find_gradle_files(&root.path().join("nope")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::FileSystem(_))
        ));
    }
}
