//! # cleanarch Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout cleanarch. Every fallible
//! operation returns `Result<T>` (an alias for `anyhow::Result<T>`). The
//! distinguished failures are raised as `ScaffoldError` values so callers can
//! tell them apart by downcasting.
//!
//! ## Architecture
//!
//! - `ScaffoldError`: A custom error enum using `thiserror` for specific failures
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error kinds cover:
//! - Placeholder filling (`ParamNotFound`)
//! - Build script editing (`AnchorNotFound`)
//! - Regex helpers (`InvalidPattern`, `InvalidGroup`)
//! - Configuration and filesystem problems
//!
//! Edits that find the target state already present are not errors: they
//! return the input unchanged.
//!
//! ## Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use cleanarch::core::error::ScaffoldError;
//! use cleanarch::core::templating::fill_path;
//!
//! let params: HashMap<String, String> = HashMap::new();
//! let err = fill_path("adapters/{{name}}", &params).unwrap_err();
//! match err.downcast_ref::<ScaffoldError>() {
//!     Some(ScaffoldError::ParamNotFound { key }) => assert_eq!(key, "name"),
//!     other => panic!("unexpected error: {:?}", other),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for cleanarch.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Parameter '{key}' not found")]
    ParamNotFound { key: String },

    #[error("Anchor '{anchor}' not found in text")]
    AnchorNotFound { anchor: String },

    #[error("Invalid regular expression: {source}")]
    InvalidPattern {
        #[from]
        source: regex::Error,
    },

    #[error("Capture group {group} does not exist; pattern has {groups} group(s)")]
    InvalidGroup { group: usize, groups: usize },

    #[error("Unknown settings dialect '{0}'. Expected 'groovy' or 'kotlin'.")]
    UnknownDialect(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
