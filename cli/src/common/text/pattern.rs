//! # Regex Replacement Helpers
//!
//! File: cli/src/common/text/pattern.rs
//!
//! ## Overview
//!
//! Two primitives for fix-ups the line editor cannot express:
//!
//! - `replace_expression`: swap the first match for a literal replacement.
//! - `replace_group`: rewrite one capture group in every match, leaving the rest of
//!   the match alone. This is how embedded literals (e.g. the trailing `/` of a
//!   Spring `@GetMapping("/path/")`) are rewritten without disturbing the syntax
//!   around them.
//!
//! Replacements are inserted verbatim; `$1`-style references are not expanded.
//!
use crate::core::error::{Result, ScaffoldError};
use regex::Regex;
use tracing::debug;

fn compile(pattern: &str) -> Result<Regex> {
    Ok(Regex::new(pattern).map_err(ScaffoldError::from)?)
}

/// Replaces the first match of `pattern` in `text` with `replacement`.
///
/// Returns `text` unchanged when nothing matches.
///
/// ```rust
/// use cleanarch::common::text::pattern::replace_expression;
/// let out = replace_expression("version '1.0'", r"\d+\.\d+", "2.0")?;
/// assert_eq!(out, "version '2.0'");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn replace_expression(text: &str, pattern: &str, replacement: &str) -> Result<String> {
    let re = compile(pattern)?;
    let Some(found) = re.find(text) else {
        debug!("Pattern '{}' did not match, text unchanged", pattern);
        return Ok(text.to_string());
    };
    let mut out = String::with_capacity(text.len() + replacement.len());
    out.push_str(&text[..found.start()]);
    out.push_str(replacement);
    out.push_str(&text[found.end()..]);
    Ok(out)
}

/// Replaces capture group `group` of every match of `pattern` with `replacement`.
///
/// Matches in which the group did not participate are left untouched.
///
/// # Errors
///
/// `ScaffoldError::InvalidPattern` for a pattern that does not compile and
/// `ScaffoldError::InvalidGroup` when `group` exceeds the pattern's group count.
pub fn replace_group(text: &str, pattern: &str, replacement: &str, group: usize) -> Result<String> {
    let re = compile(pattern)?;
    let groups = re.captures_len() - 1;
    if group > groups {
        anyhow::bail!(ScaffoldError::InvalidGroup { group, groups });
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut replaced = 0;
    for caps in re.captures_iter(text) {
        if let Some(span) = caps.get(group) {
            out.push_str(&text[last..span.start()]);
            out.push_str(replacement);
            last = span.end();
            replaced += 1;
        }
    }
    out.push_str(&text[last..]);
    debug!(
        "Replaced group {} in {} match(es) of '{}'",
        group, replaced, pattern
    );
    Ok(out)
}
