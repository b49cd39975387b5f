//! # cleanarch Placeholder Filling
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Scaffold templates name their target files with `{{placeholder}}` markers,
//! e.g. `default/driven-adapters/{{name}}/src/main/{{className}}`. This module
//! resolves those markers against a map of parameters.
//!
//! ## Architecture
//!
//! - A single precompiled pattern finds every `{{key}}` marker (inner whitespace allowed).
//! - Each key is looked up in the parameter map and rendered through `Display`.
//! - A key without a value aborts the whole fill with `ScaffoldError::ParamNotFound`;
//!   nothing is ever left half-filled.
//! - Text that does not match the marker syntax (a lone `{`, `{{}}`, `{name}`) is copied through.
//!
//! ## Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use cleanarch::core::templating::fill_path;
//!
//! let mut params = HashMap::new();
//! params.insert("name".to_string(), "redis");
//! params.insert("className".to_string(), "Redis.java");
//!
//! let path = fill_path("default/driven-adapters/{{name}}/src/main/{{className}}", &params)?;
//! assert_eq!(path, "default/driven-adapters/redis/src/main/Redis.java");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::core::error::{Result, ScaffoldError};
use regex::Regex;
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::LazyLock;
use tracing::debug;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([\w.\-]+)\s*\}\}").expect("placeholder pattern is valid")
});

/// Replaces every `{{key}}` marker in `template` with the matching value from `params`.
///
/// # Errors
///
/// Returns `ScaffoldError::ParamNotFound` naming the first marker whose key has
/// no entry in `params`.
pub fn fill_path<V: Display>(template: &str, params: &HashMap<String, V>) -> Result<String> {
    let mut filled = String::with_capacity(template.len());
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(template) {
        let marker = caps.get(0).expect("group 0 is always present");
        let key = &caps[1];
        let value = params.get(key).ok_or_else(|| ScaffoldError::ParamNotFound {
            key: key.to_string(),
        })?;
        filled.push_str(&template[last..marker.start()]);
        filled.push_str(&value.to_string());
        last = marker.end();
    }
    filled.push_str(&template[last..]);
    debug!("Filled path template '{}' -> '{}'", template, filled);
    Ok(filled)
}

/// Lists the distinct placeholder keys of `template` in order of first appearance.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(template) {
        let key = &caps[1];
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }
    keys
}
