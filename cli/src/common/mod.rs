//! # cleanarch Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared helpers that are not specific to any one settings or build edit.
//!
//! - **`fs`**: reading and writing scripts, finding Gradle files, `/`-separated path helpers.
//! - **`text`**: case conversion, option list formatting, regex replacement.
//!

/// Filesystem helpers (I/O, discovery, template paths).
pub mod fs;
/// String helpers (case, formatting, regex replacement).
pub mod text;
