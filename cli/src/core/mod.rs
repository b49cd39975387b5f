//! # cleanarch Core
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! The editing logic and the infrastructure it relies on.
//!
//! ## Architecture
//!
//! - `gradle`: idempotent edits of settings and build scripts (the text block editor)
//! - `templating`: `{{placeholder}}` filling for scaffold paths
//! - `config`: configuration loading, merging, and validation
//! - `error`: error types and the crate-wide `Result`
//!
//! Everything in `gradle` and `templating` is a pure function over strings; only
//! `config` touches the filesystem.
//!
pub mod config;
pub mod error;
pub mod gradle;
pub mod templating;

/// Version of the scaffold tooling, as published in `Cargo.toml`.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_matches_manifest() {
        assert_eq!(super::version(), env!("CARGO_PKG_VERSION"));
        assert!(!super::version().is_empty());
    }
}
