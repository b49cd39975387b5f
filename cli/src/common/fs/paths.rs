//! # Template Path Helpers
//!
//! File: cli/src/common/fs/paths.rs
//!
//! ## Overview
//!
//! Scaffold templates describe target files as `/`-separated strings regardless of
//! the host platform (`default/driven-adapters/{{name}}/src/main/...`). These
//! helpers work on those strings directly instead of `std::path::Path`, so the
//! separator stays `/` on every platform.
//!

/// Joins `segments` with `/`.
///
/// No normalization happens: empty segments and trailing slashes are kept.
///
/// ```rust
/// use cleanarch::common::fs::paths::join_path;
/// assert_eq!(join_path(["a", "b", "c", "d"]), "a/b/c/d");
/// ```
pub fn join_path<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            joined.push('/');
        }
        joined.push_str(segment.as_ref());
    }
    joined
}

/// Returns the directory part of `file_path`: everything before the last `/`.
///
/// `None` when the path has no separator.
pub fn extract_dir(file_path: &str) -> Option<&str> {
    file_path.rfind('/').map(|index| &file_path[..index])
}
