//! # cleanarch Fill Command
//!
//! File: cli/src/commands/fill.rs
//!
//! ## Overview
//!
//! Implements `cleanarch fill`: joins the given path segments with `/`, fills
//! every `{{placeholder}}` from `--var KEY=VALUE` pairs and prints the result.
//! `--dir` prints the directory part instead, which is what a scaffold needs
//! to create before writing the file.
//!
//! ```bash
//! cleanarch fill 'default/driven-adapters/{{name}}' 'src/main/{{className}}' \
//!     --var name=redis --var className=Redis.java
//! # default/driven-adapters/redis/src/main/Redis.java
//! ```
//!
use anyhow::anyhow;
use clap::Parser;
use std::collections::HashMap;
use tracing::debug;

use cleanarch::common::fs::paths::{extract_dir, join_path};
use cleanarch::core::error::Result;
use cleanarch::core::templating::{fill_path, placeholders};

/// Arguments for `cleanarch fill`.
#[derive(Parser, Debug)]
pub struct FillArgs {
    /// Path template segments, joined with `/`.
    #[arg(required = true)]
    segments: Vec<String>,

    /// Placeholder value. Can be specified multiple times.
    /// Example: `--var name=redis --var className=Redis.java`
    #[arg(long = "var", value_parser = parse_key_val, action = clap::ArgAction::Append)]
    var: Vec<(String, String)>,

    /// Print only the directory part of the filled path.
    #[arg(long)]
    dir: bool,
}

/// Parses a `KEY=VALUE` pair given to `--var`.
fn parse_key_val(s: &str) -> Result<(String, String)> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| {
            anyhow!(
                "Invalid variable format: '{}'. Expected format: KEY=VALUE",
                s
            )
        })
}

/// Fills the template described by `args`, honouring `--dir`.
fn render(args: &FillArgs) -> Result<String> {
    let template = join_path(&args.segments);
    debug!(
        "Template '{}' expects {:?}",
        template,
        placeholders(&template)
    );
    let params: HashMap<String, String> = args.var.iter().cloned().collect();
    let filled = fill_path(&template, &params)?;
    if args.dir {
        Ok(extract_dir(&filled).unwrap_or(".").to_string())
    } else {
        Ok(filled)
    }
}

/// Handles `cleanarch fill`.
pub fn handle_fill(args: FillArgs) -> Result<()> {
    println!("{}", render(&args)?);
    Ok(())
}
