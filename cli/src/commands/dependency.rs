//! # cleanarch Dependency Command
//!
//! File: cli/src/commands/dependency.rs
//!
//! ## Overview
//!
//! Implements `cleanarch dependency add|remove`, editing the `dependencies { … }`
//! block of a build script. The line can be given literally or built from
//! `--project :module` / `--artifact group:name:version`.
//!
//! ## Examples
//!
//! ```bash
//! cleanarch dependency add --project :usecase
//! cleanarch dependency add "testImplementation 'org.mockito:mockito-core'" --build domain/usecase/build.gradle
//! cleanarch dependency remove --artifact org.reactivecommons.utils:object-mapper:0.1.0
//! ```
//!
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use cleanarch::core::config;
use cleanarch::core::error::Result;
use cleanarch::core::gradle::script::{
    add_dependency, build_implementation, build_implementation_from_project, remove_dependency,
};

/// Arguments for the `cleanarch dependency` command group.
#[derive(Parser, Debug)]
pub struct DependencyArgs {
    #[command(subcommand)]
    command: DependencyCommand,
}

#[derive(Subcommand, Debug)]
enum DependencyCommand {
    /// Inserts a dependency as the first entry of the `dependencies` block.
    Add(DependencyLine),
    /// Removes a dependency line.
    #[command(alias = "rm")]
    Remove(DependencyLine),
}

/// The dependency to edit and the build script to edit it in.
#[derive(Args, Debug)]
struct DependencyLine {
    /// Full dependency line, e.g. `implementation 'group:name:1.0'`.
    #[arg(
        required_unless_present_any = ["project", "artifact"],
        conflicts_with_all = ["project", "artifact"]
    )]
    line: Option<String>,

    /// Project dependency, e.g. `:model`. Rendered as `implementation project(':model')`.
    #[arg(long, conflicts_with = "artifact")]
    project: Option<String>,

    /// Artifact coordinates. Rendered as `implementation '<coordinates>'`.
    #[arg(long)]
    artifact: Option<String>,

    /// Build script to edit. Defaults to the configured build file.
    #[arg(long, short = 'b')]
    build: Option<PathBuf>,
}

impl DependencyLine {
    fn render(&self) -> Result<String> {
        match (&self.line, &self.project, &self.artifact) {
            (Some(line), _, _) => Ok(line.clone()),
            (None, Some(project), _) => Ok(build_implementation_from_project(project)),
            (None, None, Some(artifact)) => Ok(build_implementation(artifact)),
            (None, None, None) => anyhow::bail!("No dependency given"),
        }
    }

    fn build_path(&self) -> Result<PathBuf> {
        match &self.build {
            Some(path) => Ok(path.clone()),
            None => Ok(config::load_config()
                .context("Failed to load cleanarch configuration")?
                .build_path()),
        }
    }
}

/// Dispatches `cleanarch dependency <subcommand>`.
pub fn handle_dependency(args: DependencyArgs) -> Result<()> {
    match args.command {
        DependencyCommand::Add(target) => {
            let line = target.render()?;
            let path = target.build_path()?;
            info!("Adding dependency '{}' to {}", line, path.display());
            super::edit_file(&path, |text| add_dependency(text, &line))
        }
        DependencyCommand::Remove(target) => {
            let line = target.render()?;
            let path = target.build_path()?;
            info!("Removing dependency '{}' from {}", line, path.display());
            super::edit_file(&path, |text| Ok(remove_dependency(text, &line)))
        }
    }
}
