//! Label key normalization.

/// Canonicalize a label value for grouping.
///
/// Collapses whitespace runs to one space, trims the ends and rewrites en
/// and em dashes to `-`. Idempotent.
pub fn normalize_key(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(['\u{2013}', '\u{2014}'], "-")
}
