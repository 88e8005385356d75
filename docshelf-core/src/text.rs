//! Case-insensitive string matching used by string filter operations.
//!
//! Both sides are lowercased with Unicode case mapping before comparing, so
//! `"ÉTÉ"` starts with `"été"`.

/// Returns `true` if `haystack` starts with `prefix`, ignoring case.
pub fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
    haystack
        .to_lowercase()
        .starts_with(&prefix.to_lowercase())
}

/// Returns `true` if `haystack` contains `needle`, ignoring case.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_lowercase()
        .contains(&needle.to_lowercase())
}

/// Returns `true` if both strings are equal, ignoring case.
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}
