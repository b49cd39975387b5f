//! # Settings File Edits
//!
//! File: cli/src/core/gradle/settings.rs
//!
//! ## Overview
//!
//! A module is declared in `settings.gradle` by two lines:
//!
//! ```text
//! include ':api-rest'
//! project(':api-rest').projectDir = file('./infrastructure/entry-points/api-rest')
//! ```
//!
//! The Kotlin DSL (`settings.gradle.kts`) uses the same pair with call syntax and
//! double quotes. `add_module` appends the pair once; `remove_lines_includes`
//! deletes every line mentioning a module name fragment.
//!
use super::{append_block, content, lines_with_endings, remove_lines};
use crate::core::error::{Result, ScaffoldError};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Syntax flavour of the settings file.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModuleDialect {
    /// `settings.gradle`: `include ':name'`.
    #[default]
    Groovy,
    /// `settings.gradle.kts`: `include(":name")`.
    Kotlin,
}

impl ModuleDialect {
    /// Picks the dialect from a settings file name: `.kts` means Kotlin.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("kts") => ModuleDialect::Kotlin,
            _ => ModuleDialect::Groovy,
        }
    }

    /// The `include` line for `module`.
    pub fn include_line(self, module: &str) -> String {
        match self {
            ModuleDialect::Groovy => format!("include ':{module}'"),
            ModuleDialect::Kotlin => format!("include(\":{module}\")"),
        }
    }

    /// The `projectDir` line placing `module` under `base_dir`.
    pub fn project_dir_line(self, module: &str, base_dir: &str) -> String {
        let base = base_dir.trim_matches('/');
        let dir = if base.is_empty() {
            format!("./{module}")
        } else {
            format!("./{base}/{module}")
        };
        match self {
            ModuleDialect::Groovy => format!("project(':{module}').projectDir = file('{dir}')"),
            ModuleDialect::Kotlin => {
                format!("project(\":{module}\").projectDir = file(\"{dir}\")")
            }
        }
    }
}

impl FromStr for ModuleDialect {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "groovy" | "java" | "gradle" => Ok(ModuleDialect::Groovy),
            "kotlin" | "kts" => Ok(ModuleDialect::Kotlin),
            other => Err(ScaffoldError::UnknownDialect(other.to_string())),
        }
    }
}

impl fmt::Display for ModuleDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleDialect::Groovy => write!(f, "groovy"),
            ModuleDialect::Kotlin => write!(f, "kotlin"),
        }
    }
}

/// Appends the declaration of `module` (located under `base_dir`) to `settings`.
///
/// Nothing changes when the `include` token for exactly this module already
/// appears anywhere in the text, even next to a comment or another statement.
/// The closing quote in the token keeps `:mod` from matching `:model`.
/// The new pair is separated from the previous content by one blank line.
pub fn add_module(settings: &str, dialect: ModuleDialect, module: &str, base_dir: &str) -> String {
    let include = dialect.include_line(module);
    if settings.contains(&include) {
        debug!("Module '{}' already included, skipping", module);
        return settings.to_string();
    }
    let block = [include, dialect.project_dir_line(module, base_dir)];
    debug!("Adding module '{}' ({} dialect)", module, dialect);
    append_block(settings, &block)
}

/// Deletes every line of `settings` containing `fragment`.
///
/// When the deleted lines close the file, the blank separator line in front of
/// them goes too and the original absence of a final newline is restored, so
/// removing a module undoes `add_module`.
pub fn remove_lines_includes(settings: &str, fragment: &str) -> String {
    if fragment.is_empty() {
        return settings.to_string();
    }
    let (mut updated, removed) = remove_lines(settings, |line| line.contains(fragment));
    debug!("Removed {} line(s) containing '{}'", removed, fragment);
    if removed == 0 {
        return updated;
    }

    let tail_removed = lines_with_endings(settings)
        .last()
        .is_some_and(|line| content(line).contains(fragment));
    if tail_removed {
        trim_dangling_separator(&mut updated, settings.ends_with('\n'));
    }
    updated
}

fn trim_dangling_separator(text: &mut String, keep_final_newline: bool) {
    let blank_tail = lines_with_endings(text)
        .last()
        .filter(|line| content(line).trim().is_empty())
        .map(|line| line.len());
    if let Some(blank_len) = blank_tail {
        let len = text.len() - blank_len;
        text.truncate(len);
    }
    if !keep_final_newline {
        let len = text
            .strip_suffix("\r\n")
            .or_else(|| text.strip_suffix('\n'))
            .map_or(text.len(), str::len);
        text.truncate(len);
    }
}

/// Parses a dialect name, naming the accepted values on failure.
pub fn parse_dialect(value: &str) -> Result<ModuleDialect> {
    Ok(value.parse::<ModuleDialect>()?)
}
