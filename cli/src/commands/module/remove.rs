//! # cleanarch Module Remove Command
//!
//! File: cli/src/commands/module/remove.rs
//!
//! Implements `cleanarch module remove`: deletes every line of the settings
//! script containing the given fragment, which removes both declaration lines
//! of a module. The fragment is matched literally, so `api` also hits `api-rest`.
//!
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use cleanarch::core::config;
use cleanarch::core::error::Result;
use cleanarch::core::gradle::settings::remove_lines_includes;

/// Arguments for `cleanarch module remove`.
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Text identifying the module's lines, usually its name.
    fragment: String,

    /// Settings script to edit. Defaults to the configured settings file.
    #[arg(long, short = 's')]
    settings: Option<PathBuf>,
}

/// Handles `cleanarch module remove`.
pub fn handle_remove(args: RemoveArgs) -> Result<()> {
    if args.fragment.trim().is_empty() {
        anyhow::bail!("Refusing to remove lines for an empty fragment");
    }
    let settings_path = match args.settings {
        Some(path) => path,
        None => config::load_config()
            .context("Failed to load cleanarch configuration")?
            .settings_path(),
    };
    info!(
        "Removing lines containing '{}' from {}",
        args.fragment,
        settings_path.display()
    );
    crate::commands::edit_file(&settings_path, |text| {
        Ok(remove_lines_includes(text, &args.fragment))
    })
}
