//! # cleanarch Module Add Command
//!
//! File: cli/src/commands/module/add.rs
//!
//! ## Overview
//!
//! Implements `cleanarch module add`: appends the `include` and `projectDir`
//! lines for one module to the settings script.
//!
//! The module name is converted to its dash form first (`ApiRest` → `api-rest`),
//! matching the directory names the scaffold generates. The base directory is
//! taken from `--base`, or from the configured entry points / driven adapters
//! directory depending on `--driven-adapter`.
//!
use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use cleanarch::common::text::case::to_dash_name;
use cleanarch::common::text::format::format_task_options;
use cleanarch::core::config;
use cleanarch::core::error::Result;
use cleanarch::core::gradle::settings::{add_module, parse_dialect, ModuleDialect};

/// Arguments for `cleanarch module add`.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Module name. Camel-case names are converted to dash form.
    name: String,

    /// Directory the module lives in, relative to the project root.
    /// Defaults to the configured entry points directory.
    #[arg(long, short = 'b', conflicts_with = "driven_adapter")]
    base: Option<String>,

    /// Place the module under the configured driven adapters directory.
    #[arg(long)]
    driven_adapter: bool,

    /// Settings script syntax. Defaults to the configured dialect.
    #[arg(long, value_parser = parse_dialect_arg)]
    dialect: Option<ModuleDialect>,

    /// Settings script to edit. Defaults to the configured settings file.
    #[arg(long, short = 's')]
    settings: Option<PathBuf>,
}

fn parse_dialect_arg(s: &str) -> Result<ModuleDialect> {
    parse_dialect(s).map_err(|_| {
        anyhow!(
            "Unknown dialect '{}'. Expected one of {}",
            s,
            format_task_options([ModuleDialect::Groovy, ModuleDialect::Kotlin])
        )
    })
}

/// Handles `cleanarch module add`.
pub fn handle_add(args: AddArgs) -> Result<()> {
    let cfg = config::load_config().context("Failed to load cleanarch configuration")?;

    let module = to_dash_name(&args.name);
    let base = match (&args.base, args.driven_adapter) {
        (Some(base), _) => base.clone(),
        (None, true) => cfg.modules.driven_adapters.clone(),
        (None, false) => cfg.modules.entry_points.clone(),
    };
    let settings_path = args.settings.clone().unwrap_or_else(|| cfg.settings_path());
    let dialect = args.dialect.unwrap_or_else(|| match &args.settings {
        Some(path) => ModuleDialect::from_path(path),
        None => cfg.dialect(),
    });

    info!(
        "Adding module '{}' under '{}' to {} ({} dialect)",
        module,
        base,
        settings_path.display(),
        dialect
    );
    crate::commands::edit_file(&settings_path, |text| {
        Ok(add_module(text, dialect, &module, &base))
    })
}
