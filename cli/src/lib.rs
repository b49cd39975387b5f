//! # cleanarch
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! Helpers for scaffolding clean-architecture Gradle projects. The centre of the
//! crate is a small, idempotent line editor for Gradle scripts:
//!
//! - `core::gradle::settings`: add and remove module declarations in `settings.gradle[.kts]`
//! - `core::gradle::script`: add and remove dependency and configuration lines in `build.gradle`
//! - `core::templating`: fill `{{placeholder}}` paths
//! - `common::text` / `common::fs`: string, regex and path helpers
//!
//! Every edit takes the full file text and returns the full new text. Reapplying an
//! edit to its own output changes nothing.
//!
//! ```rust
//! use cleanarch::core::gradle::settings::{add_module, remove_lines_includes, ModuleDialect};
//!
//! let settings = "rootProject.name = 'cleanArchitecture'";
//! let added = add_module(settings, ModuleDialect::Groovy, "api-rest", "infrastructure/entry-points");
//! assert_eq!(
//!     added,
//!     "rootProject.name = 'cleanArchitecture'\n\n\
//!      include ':api-rest'\n\
//!      project(':api-rest').projectDir = file('./infrastructure/entry-points/api-rest')"
//! );
//! assert_eq!(remove_lines_includes(&added, "api-rest"), settings);
//! ```
//!
pub mod common;
pub mod core;
