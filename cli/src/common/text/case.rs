//! # Case Conversions
//!
//! File: cli/src/common/text/case.rs
//!
//! Only the first character is touched by `capitalize` / `decapitalize`; the rest
//! of the string is kept as-is, so `DECAPITALIZE` becomes `dECAPITALIZE`.
//!

/// Upper-cases the first character of `s`.
///
/// ```rust
/// use cleanarch::common::text::case::capitalize;
/// assert_eq!(capitalize("capitalizeTest"), "CapitalizeTest");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the first character of `s`.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts a camel-case name into a dash-separated lower-case name.
///
/// A hyphen goes before every upper-case letter except a leading one:
/// `MyCamelCase` and `myCamelCase` both become `my-camel-case`.
pub fn to_dash_name(name: &str) -> String {
    let mut dashed = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            dashed.push('-');
        }
        dashed.extend(c.to_lowercase());
    }
    dashed
}
