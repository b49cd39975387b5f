//! # cleanarch Gradle Text Editor
//!
//! File: cli/src/core/gradle/mod.rs
//!
//! ## Overview
//!
//! Idempotent line-oriented edits of Gradle settings and build scripts. No parser
//! is involved: each edit finds an anchor line, tests whether the target line is
//! already present, and inserts or deletes relative to the anchor.
//!
//! ## Architecture
//!
//! - `settings`: module declarations (`include` + `projectDir` pairs) in `settings.gradle[.kts]`.
//! - `script`: dependency and configuration lines in `build.gradle[.kts]`.
//! - This file: the shared line primitives both use.
//!
//! Lines are handled with their terminators attached, so every line the edit does
//! not touch comes out byte-identical (CRLF included). Inserted lines are indented
//! with a single tab regardless of the surrounding indentation.
//!
//! ## Examples
//!
//! ```rust
//! use cleanarch::core::gradle::script::add_dependency;
//!
//! let build = "dependencies {\n    implementation project(':model')\n}\n";
//! let updated = add_dependency(build, "implementation project(':usecase')")?;
//! assert_eq!(
//!     updated,
//!     "dependencies {\n\timplementation project(':usecase')\n    implementation project(':model')\n}\n"
//! );
//! // Applying it again changes nothing.
//! assert_eq!(add_dependency(&updated, "implementation project(':usecase')")?, updated);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
pub mod script;
pub mod settings;

/// Splits `text` into lines that keep their `\n` / `\r\n` terminators.
pub(crate) fn lines_with_endings(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Returns the line content without its terminator.
pub(crate) fn content(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// The terminator used after `line`, defaulting to `\n` when the line has none.
pub(crate) fn ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// True when some line, trimmed, equals `target` trimmed.
pub(crate) fn contains_line(text: &str, target: &str) -> bool {
    let target = target.trim();
    text.lines().any(|line| line.trim() == target)
}

/// True when `line` opens the block `name`, e.g. `dependencies {` or `configurations{`.
pub(crate) fn opens_block(line: &str, name: &str) -> bool {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .strip_prefix(name)
        .is_some_and(|rest| rest.starts_with('{'))
}

/// Inserts `\t<new_line>` directly after the first line opening `block`.
///
/// Returns `None` when no such line exists.
pub(crate) fn insert_after_block_opener(text: &str, block: &str, new_line: &str) -> Option<String> {
    let lines = lines_with_endings(text);
    let index = lines.iter().position(|line| opens_block(line, block))?;
    let anchor = lines[index];
    let newline = ending(anchor);

    let mut out = String::with_capacity(text.len() + new_line.len() + 2);
    for line in &lines[..=index] {
        out.push_str(line);
    }
    if anchor.ends_with('\n') {
        out.push('\t');
        out.push_str(new_line.trim());
        out.push_str(newline);
    } else {
        // Anchor is the unterminated last line.
        out.push_str(newline);
        out.push('\t');
        out.push_str(new_line.trim());
    }
    for line in &lines[index + 1..] {
        out.push_str(line);
    }
    Some(out)
}

/// Removes every line for which `matches` returns true, leaving all other lines untouched.
///
/// Returns the new text and the number of lines removed.
pub(crate) fn remove_lines(text: &str, matches: impl Fn(&str) -> bool) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut removed = 0;
    for line in lines_with_endings(text) {
        if matches(content(line)) {
            removed += 1;
        } else {
            out.push_str(line);
        }
    }
    (out, removed)
}

/// Appends `block` (joined by the text's line terminator) after the existing
/// content, separated by exactly one blank line.
///
/// Trailing line breaks of `text` are collapsed first. Empty text gets no separator.
pub(crate) fn append_block(text: &str, block: &[String]) -> String {
    let newline = if text.contains("\r\n") { "\r\n" } else { "\n" };
    let block = block.join(newline);
    let body = text.trim_end_matches(['\r', '\n']);
    if body.trim().is_empty() {
        return block;
    }
    format!("{body}{newline}{newline}{block}")
}
