//! # cleanarch Replace Command
//!
//! File: cli/src/commands/replace.rs
//!
//! ## Overview
//!
//! Implements `cleanarch replace`: a regex fix-up over Gradle scripts. Without
//! `--group` the first match in each file is replaced by the literal replacement;
//! with `--group N` capture group N is rewritten in every match.
//!
//! Files are taken from `--file` (repeatable). Without it, every Gradle script
//! under the configured project root is visited.
//!
//! ```bash
//! # Bump a plugin version in every build script
//! cleanarch replace "id 'org.sonarqube' version '[^']+'" "id 'org.sonarqube' version '4.4.1.3373'"
//!
//! # Strip trailing slashes from Spring mappings in one source file
//! cleanarch replace '(Get|Post)Mapping\(".*(/)"\)' '' --group 2 --file ApiRest.java
//! ```
//!
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

use cleanarch::common::fs::discover::find_gradle_files;
use cleanarch::common::text::pattern::{replace_expression, replace_group};
use cleanarch::core::config;
use cleanarch::core::error::Result;

/// Arguments for `cleanarch replace`.
#[derive(Parser, Debug)]
pub struct ReplaceArgs {
    /// Regular expression to search for.
    pattern: String,

    /// Literal replacement text (`$1` is not expanded).
    replacement: String,

    /// Rewrite only this capture group, in every match.
    #[arg(long, short = 'g')]
    group: Option<usize>,

    /// File to edit. Can be given multiple times. Defaults to all Gradle scripts of the project.
    #[arg(long = "file", short = 'f', action = clap::ArgAction::Append)]
    files: Vec<PathBuf>,
}

fn target_files(args: &ReplaceArgs) -> Result<Vec<PathBuf>> {
    if !args.files.is_empty() {
        return Ok(args.files.clone());
    }
    let cfg = config::load_config().context("Failed to load cleanarch configuration")?;
    find_gradle_files(Path::new(&cfg.project.root))
}

/// Handles `cleanarch replace`.
pub fn handle_replace(args: ReplaceArgs) -> Result<()> {
    let files = target_files(&args)?;
    info!("Applying '{}' to {} file(s)", args.pattern, files.len());
    for path in &files {
        super::edit_file(path, |text| match args.group {
            Some(group) => replace_group(text, &args.pattern, &args.replacement, group),
            None => replace_expression(text, &args.pattern, &args.replacement),
        })?;
    }
    Ok(())
}
