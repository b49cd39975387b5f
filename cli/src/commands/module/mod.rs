//! # cleanarch Module Command Group
//!
//! File: cli/src/commands/module/mod.rs
//!
//! ## Overview
//!
//! Entry point and router for `cleanarch module`. Subcommands edit the module
//! declarations (`include` + `projectDir` lines) of the settings script.
//!
//! ## Examples
//!
//! ```bash
//! # Declare an entry point under the configured entry points directory
//! cleanarch module add ApiRest
//!
//! # Declare a driven adapter in a Kotlin settings script
//! cleanarch module add redis --driven-adapter --settings settings.gradle.kts
//!
//! # Drop every line mentioning api-rest
//! cleanarch module remove api-rest
//! ```
//!
use clap::{Parser, Subcommand};

use cleanarch::core::error::Result;

/// Contains the handler and arguments for `cleanarch module add`.
mod add;
/// Contains the handler and arguments for `cleanarch module remove`.
mod remove;

/// Arguments for the `cleanarch module` command group.
#[derive(Parser, Debug)]
pub struct ModuleArgs {
    #[command(subcommand)]
    command: ModuleCommand,
}

#[derive(Subcommand, Debug)]
enum ModuleCommand {
    /// Declares a module in the settings script.
    Add(add::AddArgs),
    /// Removes every settings line mentioning a module name fragment.
    #[command(alias = "rm")]
    Remove(remove::RemoveArgs),
}

/// Dispatches `cleanarch module <subcommand>` to its handler.
pub fn handle_module(args: ModuleArgs) -> Result<()> {
    match args.command {
        ModuleCommand::Add(args) => add::handle_add(args),
        ModuleCommand::Remove(args) => remove::handle_remove(args),
    }
}
