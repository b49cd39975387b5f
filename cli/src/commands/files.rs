//! # cleanarch Files Command
//!
//! File: cli/src/commands/files.rs
//!
//! Implements `cleanarch files`: lists every Gradle script (`*.gradle`,
//! `*.gradle.kts`) below a directory, one path per line. Without an argument
//! the configured project root is searched.
//!
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use cleanarch::common::fs::discover::find_gradle_files;
use cleanarch::core::config;
use cleanarch::core::error::Result;

/// Arguments for `cleanarch files`.
#[derive(Parser, Debug)]
pub struct FilesArgs {
    /// Directory to search. Defaults to the configured project root.
    root: Option<PathBuf>,
}

/// Handles `cleanarch files`.
pub fn handle_files(args: FilesArgs) -> Result<()> {
    let root = match args.root {
        Some(root) => root,
        None => PathBuf::from(
            config::load_config()
                .context("Failed to load cleanarch configuration")?
                .project
                .root,
        ),
    };
    let files = find_gradle_files(&root)?;
    if files.is_empty() {
        println!("No Gradle scripts found under {}", root.display());
    }
    for file in files {
        println!("{}", file.display());
    }
    Ok(())
}
