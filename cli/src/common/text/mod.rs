//! # cleanarch Text Utilities (`common::text`)
//!
//! File: cli/src/common/text/mod.rs
//!
//! ## Overview
//!
//! Small string helpers shared by the editor and the commands.
//!
//! - **`case`**: `capitalize`, `decapitalize` and `to_dash_name` for turning class
//!   names into module names.
//! - **`format`**: rendering option lists for task help text (`[A|B|C]`).
//! - **`pattern`**: regex replacement helpers (`replace_expression`, `replace_group`).
//!

/// Case conversions (`capitalize`, `decapitalize`, `to_dash_name`).
pub mod case;
/// Display formatting for option lists.
pub mod format;
/// Regex-based replacement helpers.
pub mod pattern;
