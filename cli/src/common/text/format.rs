//! # Option List Formatting
//!
//! File: cli/src/common/text/format.rs
//!
use std::fmt::Display;

/// Renders `options` as `[A|B|C]` for task help text.
///
/// A single option renders as `[A]`; no options render as `[]`.
///
/// ```rust
/// use cleanarch::common::text::format::format_task_options;
/// assert_eq!(format_task_options(["A", "BC", "D"]), "[A|BC|D]");
/// assert_eq!(format_task_options(["A"]), "[A]");
/// ```
pub fn format_task_options<I>(options: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let joined = options
        .into_iter()
        .map(|option| option.to_string())
        .collect::<Vec<_>>()
        .join("|");
    format!("[{joined}]")
}
