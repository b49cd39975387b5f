//! # cleanarch Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! The editor works on strings only; this module is the boundary that loads a
//! settings or build script from disk and stores the edited text back.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: creates a directory (and parents) when missing and
//!   rejects paths that exist as something other than a directory.
//! - **`read_file_to_string`**: `fs::read_to_string` with the failing path in the error.
//! - **`write_string_to_file`**: writes a file, creating its parent directory first.
//! - **`apply_edit`**: read, transform with a pure edit function, and write back only
//!   when the text actually changed. Idempotent edits therefore leave the file's
//!   modification time alone.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cleanarch::common::fs::io;
//! use cleanarch::core::gradle::script::add_dependency;
//! use std::path::Path;
//!
//! let changed = io::apply_edit(Path::new("build.gradle"), |text| {
//!     add_dependency(text, "implementation project(':model')")
//! })?;
//! println!("build.gradle updated: {changed}");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::core::error::{Result, ScaffoldError};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at `path`, creating it with its parents if needed.
///
/// # Errors
///
/// Returns `ScaffoldError::FileSystem` when the path exists but is not a directory,
/// or the underlying I/O error when creation fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ScaffoldError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes `content` to `path`, overwriting it. The parent directory is created first.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}

/// Applies `edit` to the content of `path` and saves the result if it differs.
///
/// Returns `true` when the file was rewritten.
pub fn apply_edit<F>(path: &Path, edit: F) -> Result<bool>
where
    F: FnOnce(&str) -> Result<String>,
{
    let original = read_file_to_string(path)?;
    let updated = edit(&original).with_context(|| format!("Failed to edit {:?}", path))?;
    if updated == original {
        debug!("No change needed for {:?}", path);
        return Ok(false);
    }
    write_string_to_file(path, &updated)?;
    Ok(true)
}
