//! Order-export line and report row models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Item quantity. Non-negative by construction.
pub type Quantity = u64;

/// Total quantity per normalized key.
///
/// A `BTreeMap` keeps serialized output stable; ordering carries no meaning.
pub type AggregateMap = BTreeMap<String, Quantity>;

/// A single line of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// Position of the line in the source (0-indexed).
    pub index: usize,
    /// Line content with non-breaking spaces replaced by regular spaces.
    pub text: String,
}

impl RawLine {
    pub fn new(index: usize, text: impl AsRef<str>) -> Self {
        Self {
            index,
            text: text.as_ref().replace('\u{00a0}', " "),
        }
    }
}

/// Characters that end a line. `\r\n` counts as one break.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

/// Split a text blob into indexed lines, stripping line endings.
///
/// Besides `\n` and `\r\n` this breaks on a lone `\r`, form feeds, the
/// vertical tab, the ASCII separators and the Unicode line/paragraph
/// separators. A trailing break does not produce an empty last line.
pub fn split_lines(text: &str) -> Vec<RawLine> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let (line, next) = match rest.char_indices().find(|(_, c)| LINE_BREAKS.contains(c)) {
            Some((pos, c)) => {
                let width = if rest[pos..].starts_with("\r\n") { 2 } else { c.len_utf8() };
                (&rest[..pos], &rest[pos + width..])
            }
            None => (rest, ""),
        };
        lines.push(RawLine::new(lines.len(), line));
        rest = next;
    }

    lines
}

/// A recognized label line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMatch {
    /// Index of the label line.
    pub line_index: usize,
    /// Text after the label colon, trimmed. May be empty.
    pub value: String,
}

/// A raw label value paired with its resolved quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEntry {
    /// Label value exactly as captured (not normalized).
    pub label: String,
    /// Resolved quantity.
    pub quantity: Quantity,
}

impl LabelEntry {
    pub fn new(label: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            label: label.into(),
            quantity,
        }
    }
}

/// One aggregated, categorized row of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Normalized key.
    pub label: String,
    /// Total quantity for the key.
    pub quantity: Quantity,
    /// Assigned category.
    pub category: Category,
    /// Position of the first size token in the size order, or the order
    /// length when the key has no size token.
    pub size_rank: usize,
}
