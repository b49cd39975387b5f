//! # cleanarch Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Everything that touches the disk or deals in file paths lives here, keeping the
//! editor in `core::gradle` free of I/O.
//!
//! - **`discover`**: recursive search for Gradle scripts (`find_gradle_files`).
//! - **`io`**: reading, writing and in-place editing of text files (`apply_edit`).
//! - **`paths`**: `/`-separated template path helpers (`join_path`, `extract_dir`).
//!

/// Gradle script discovery.
pub mod discover;
/// Text file I/O and in-place edits.
pub mod io;
/// Template path string helpers.
pub mod paths;
