//! # cleanarch Configuration Command
//!
//! File: cli/src/commands/configuration.rs
//!
//! Implements `cleanarch configuration add|remove`, editing the
//! `configurations { … }` block of a build script. Adding to a script without
//! such a block appends a new one at the end of the file.
//!
//! ```bash
//! cleanarch configuration add 'compile.exclude group: "org.springframework.boot", module: "spring-boot-starter-tomcat"'
//! ```
//!
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use cleanarch::core::config;
use cleanarch::core::error::Result;
use cleanarch::core::gradle::script::{add_configuration, remove_configuration};

/// Arguments for the `cleanarch configuration` command group.
#[derive(Parser, Debug)]
pub struct ConfigurationArgs {
    #[command(subcommand)]
    command: ConfigurationCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigurationCommand {
    /// Inserts a line into the `configurations` block, creating the block if needed.
    Add(ConfigurationLine),
    /// Removes a line from the `configurations` block.
    #[command(alias = "rm")]
    Remove(ConfigurationLine),
}

#[derive(Args, Debug)]
struct ConfigurationLine {
    /// Configuration line, e.g. `compile.exclude group: "x", module: "y"`.
    line: String,

    /// Build script to edit. Defaults to the configured build file.
    #[arg(long, short = 'b')]
    build: Option<PathBuf>,
}

/// Dispatches `cleanarch configuration <subcommand>`.
pub fn handle_configuration(args: ConfigurationArgs) -> Result<()> {
    let (target, adding) = match args.command {
        ConfigurationCommand::Add(target) => (target, true),
        ConfigurationCommand::Remove(target) => (target, false),
    };
    let path = match target.build {
        Some(path) => path,
        None => config::load_config()
            .context("Failed to load cleanarch configuration")?
            .build_path(),
    };
    let line = target.line;
    if adding {
        info!("Adding configuration '{}' to {}", line, path.display());
        super::edit_file(&path, |text| Ok(add_configuration(text, &line)))
    } else {
        info!("Removing configuration '{}' from {}", line, path.display());
        super::edit_file(&path, |text| Ok(remove_configuration(text, &line)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_add_with_build() {
        let args = ConfigurationArgs::try_parse_from([
            "configuration",
            "add",
            "compile.exclude group: \"x\"",
            "-b",
            "build.gradle",
        ])
        .unwrap();
        match args.command {
            ConfigurationCommand::Add(line) => {
                assert_eq!(line.line, "compile.exclude group: \"x\"");
                assert_eq!(line.build, Some(PathBuf::from("build.gradle")));
            }
            other => panic!("Expected add, got {:?}", other),
        }
    }
}
