//! # cleanarch Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the `cleanarch` CLI. Each one
//! defines its own Clap arguments struct and a `handle_*` function; file-editing
//! commands resolve their target file from the configuration unless one is given
//! on the command line, run a pure edit from the library, and write back only when
//! the text changed.
//!
//! ## Command Groups
//!
//! - `module`: add/remove module declarations in the settings script
//! - `dependency`: add/remove dependency lines in a build script
//! - `configuration`: add/remove configuration lines in a build script
//! - `replace`: regex replacements across one or more Gradle scripts
//! - `fill`: fill a `{{placeholder}}` path template
//! - `name`: derive module and class names from a name
//! - `files`: list the Gradle scripts of the project
//!

/// Configuration lines in build scripts.
pub mod configuration;
/// Dependency lines in build scripts.
pub mod dependency;
/// Listing Gradle scripts.
pub mod files;
/// Placeholder path filling.
pub mod fill;
/// Module declarations in the settings script. Includes subcommands `add` and `remove`.
pub mod module;
/// Name conversions.
pub mod name;
/// Regex replacements.
pub mod replace;

use std::path::Path;

use cleanarch::common::fs::io;
use cleanarch::core::error::Result;

/// Runs `edit` against `path` and reports the outcome on stdout.
pub(crate) fn edit_file<F>(path: &Path, edit: F) -> Result<()>
where
    F: FnOnce(&str) -> Result<String>,
{
    if io::apply_edit(path, edit)? {
        println!("Updated {}", path.display());
    } else {
        println!("{} already up to date", path.display());
    }
    Ok(())
}
