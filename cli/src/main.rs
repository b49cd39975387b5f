//! # cleanarch Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `cleanarch` CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`module`, `dependency`, ...) is a variant of `Commands`
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent reporting
//!
//! ## Examples
//!
//! ```bash
//! # Register a new entry point module in settings.gradle
//! cleanarch module add api-rest
//!
//! # Add a project dependency to the configured build script, with logging
//! cleanarch -v dependency add --project :model
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "cleanarch",
    about = "Scaffold helpers for clean-architecture Gradle projects",
    long_about = "Edit settings and build scripts of a clean-architecture Gradle project.\n\
                  Every edit is idempotent: running it twice changes the file once.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "m")]
    Module(commands::module::ModuleArgs),
    #[command(alias = "d")]
    Dependency(commands::dependency::DependencyArgs),
    #[command(alias = "c")]
    Configuration(commands::configuration::ConfigurationArgs),
    Replace(commands::replace::ReplaceArgs),
    Fill(commands::fill::FillArgs),
    Name(commands::name::NameArgs),
    Files(commands::files::FilesArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Module(args) => commands::module::handle_module(args),
        Commands::Dependency(args) => commands::dependency::handle_dependency(args),
        Commands::Configuration(args) => commands::configuration::handle_configuration(args),
        Commands::Replace(args) => commands::replace::handle_replace(args),
        Commands::Fill(args) => commands::fill::handle_fill(args),
        Commands::Name(args) => commands::name::handle_name(args),
        Commands::Files(args) => commands::files::handle_files(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
