//! Label parser tying detection, quantity resolution and aggregation together.

use std::time::Instant;

use tracing::{debug, trace};

use crate::models::config::ExtractionConfig;
use crate::models::{split_lines, AggregateMap, LabelEntry, LabelMatch, Quantity, RawLine};
use crate::report::aggregate;

use super::rules::{
    detect_labels, find_quantity_near, Vocabulary, DEFAULT_QUANTITY, DEFAULT_QUANTITY_RADIUS,
};
use super::LabelExtractor;

/// Result of one extraction pass.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Entries in label line order, labels as written.
    pub entries: Vec<LabelEntry>,
    /// Total quantity per normalized key.
    pub aggregate: AggregateMap,
    /// Number of lines scanned.
    pub line_count: usize,
    /// Number of label lines found.
    pub label_count: usize,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl ExtractionResult {
    /// Sum of all entry quantities, saturating at `Quantity::MAX`.
    pub fn total_quantity(&self) -> Quantity {
        self.entries
            .iter()
            .fold(0, |total: Quantity, e| total.saturating_add(e.quantity))
    }
}

/// Label parser with a configurable quantity search.
#[derive(Debug, Clone)]
pub struct LabelParser {
    vocabulary: Vocabulary,
    /// Lines searched above and below a label for its quantity.
    quantity_radius: usize,
    /// Quantity used when the search finds nothing.
    default_quantity: Quantity,
}

impl LabelParser {
    /// Create a parser with the standard vocabulary and default settings.
    pub fn new() -> Self {
        Self {
            vocabulary: Vocabulary::standard(),
            quantity_radius: DEFAULT_QUANTITY_RADIUS,
            default_quantity: DEFAULT_QUANTITY,
        }
    }

    /// Create a parser from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_quantity_radius(config.quantity_radius)
            .with_default_quantity(config.default_quantity)
    }

    /// Set the quantity search radius.
    pub fn with_quantity_radius(mut self, radius: usize) -> Self {
        self.quantity_radius = radius;
        self
    }

    /// Set the fallback quantity.
    pub fn with_default_quantity(mut self, quantity: Quantity) -> Self {
        self.default_quantity = quantity;
        self
    }

    /// Replace the vocabulary.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn quantity_radius(&self) -> usize {
        self.quantity_radius
    }

    /// Find label lines.
    pub fn detect(&self, lines: &[RawLine]) -> Vec<LabelMatch> {
        detect_labels(&self.vocabulary, lines)
    }

    /// Resolve the quantity for the label at `index`.
    pub fn resolve_quantity(&self, lines: &[RawLine], index: usize) -> Quantity {
        find_quantity_near(&self.vocabulary, lines, index, self.quantity_radius)
            .unwrap_or(self.default_quantity)
    }

    /// Extract, aggregate and time one document.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        let lines = split_lines(text);
        let entries = self.extract_lines(&lines);
        let aggregate = aggregate(&entries);

        let mut warnings = Vec::new();
        if entries.is_empty() && !lines.is_empty() {
            warnings.push("no style/size label lines found".to_string());
        }

        debug!(
            "Extracted {} entries ({} unique keys) from {} lines",
            entries.len(),
            aggregate.len(),
            lines.len()
        );

        let label_count = entries.len();
        ExtractionResult {
            entries,
            aggregate,
            line_count: lines.len(),
            label_count,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for LabelParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelExtractor for LabelParser {
    fn extract_lines(&self, lines: &[RawLine]) -> Vec<LabelEntry> {
        self.detect(lines)
            .into_iter()
            .map(|m| {
                let quantity = self.resolve_quantity(lines, m.line_index);
                trace!("{:?} -> quantity {}", m.value, quantity);
                LabelEntry::new(m.value, quantity)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_order_export() {
        let text = "\
            Order #1001\n\
            Quantity: 2\n\
            Style: Hooded Sweatshirt - L\n\
            \n\
            Order #1002\n\
            Style:  Hooded   Sweatshirt - L\n\
            Quantity: 3\n\
            \n\
            Order #1003\n\
            Size/Style: Unisex\u{00a0}T-Shirt \u{2013} M\n";

        let result = LabelParser::new().parse(text);

        assert_eq!(
            result.entries,
            vec![
                LabelEntry::new("Hooded Sweatshirt - L", 2),
                LabelEntry::new("Hooded   Sweatshirt - L", 2),
                LabelEntry::new("Unisex T-Shirt \u{2013} M", 3),
            ]
        );
        assert_eq!(result.aggregate.get("Hooded Sweatshirt - L"), Some(&4));
        assert_eq!(result.aggregate.get("Unisex T-Shirt - M"), Some(&3));
        assert_eq!(result.total_quantity(), 7);
        assert_eq!(result.label_count, 3);
        assert_eq!(result.line_count, 10);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_directional_precedence() {
        let lines = split_lines("Qty: 7\nx\ny\nStyle: Tee - M\nQty: 2");
        assert_eq!(LabelParser::new().resolve_quantity(&lines, 3), 7);
    }

    #[test]
    fn test_default_quantity() {
        let lines = split_lines("a\nb\nStyle: Hooded Sweatshirt - L\nc\nd");
        let parser = LabelParser::new();
        assert_eq!(parser.resolve_quantity(&lines, 2), 1);

        let parser = parser.with_default_quantity(0);
        assert_eq!(parser.resolve_quantity(&lines, 2), 0);
    }

    #[test]
    fn test_radius_from_config() {
        let config = ExtractionConfig {
            quantity_radius: 1,
            default_quantity: 1,
        };
        let parser = LabelParser::from_config(&config);
        let lines = split_lines("Qty: 5\nx\nStyle: Tee");

        assert_eq!(parser.quantity_radius(), 1);
        assert_eq!(parser.resolve_quantity(&lines, 2), 1);
    }

    #[test]
    fn test_empty_input_is_valid() {
        let result = LabelParser::new().parse("");
        assert!(result.entries.is_empty());
        assert!(result.aggregate.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.line_count, 0);
        assert_eq!(result.label_count, 0);
    }

    #[test]
    fn test_no_labels_warns() {
        let result = LabelParser::new().parse("Thank you for your order\nQty: 2");
        assert!(result.entries.is_empty());
        assert_eq!(result.line_count, 2);
        assert_eq!(result.label_count, 0);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_carriage_return_and_form_feed_exports() {
        let parser = LabelParser::new();

        let result = parser.parse("Qty: 2\rStyle: Tee - M\rQty: 3\rStyle: Tee - L\r");
        assert_eq!(
            result.entries,
            vec![LabelEntry::new("Tee - M", 2), LabelEntry::new("Tee - L", 3)]
        );

        let result = parser.parse("Qty: 2\nStyle: Tee - M\u{0c}Style: Tee - L\nQty: 3\n");
        assert_eq!(
            result.entries,
            vec![LabelEntry::new("Tee - M", 2), LabelEntry::new("Tee - L", 2)]
        );
    }

    #[test]
    fn test_max_quantities_on_one_key() {
        let text = "Qty: 18446744073709551615\nStyle: Tee - M\nOrder\n\
                    Qty: 18446744073709551615\nStyle: Tee - M\n";
        let result = LabelParser::new().parse(text);

        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.aggregate["Tee - M"], Quantity::MAX);
        assert_eq!(result.total_quantity(), Quantity::MAX);
    }

    #[test]
    fn test_extract_from_text_trait_default() {
        let parser = LabelParser::new();
        let entries = parser.extract_from_text("Size: XL\nQty 4");
        assert_eq!(entries, vec![LabelEntry::new("XL", 4)]);
    }
}
