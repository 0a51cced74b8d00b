//! Label extraction module.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, LabelParser};

use crate::models::{split_lines, LabelEntry, RawLine};

/// Trait for label entry extractors.
pub trait LabelExtractor {
    /// Extract one entry per label line.
    fn extract_lines(&self, lines: &[RawLine]) -> Vec<LabelEntry>;

    /// Extract entries from a plain text blob.
    fn extract_from_text(&self, text: &str) -> Vec<LabelEntry> {
        self.extract_lines(&split_lines(text))
    }
}
