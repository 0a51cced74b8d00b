//! Label line detection.

use tracing::trace;

use super::patterns::Vocabulary;
use crate::models::{LabelMatch, RawLine};

/// Match a single line against the label prefixes.
///
/// Returns the trimmed value after the colon, which may be empty.
pub fn match_label<'a>(vocabulary: &Vocabulary, text: &'a str) -> Option<&'a str> {
    vocabulary
        .label_line
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|value| value.as_str().trim())
}

/// Find every label line in `lines`, in line order.
pub fn detect_labels(vocabulary: &Vocabulary, lines: &[RawLine]) -> Vec<LabelMatch> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(position, line)| {
            let value = match_label(vocabulary, &line.text)?;
            trace!("label at line {}: {:?}", line.index, value);
            Some(LabelMatch {
                line_index: position,
                value: value.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::split_lines;

    fn label(text: &str) -> Option<&str> {
        match_label(&Vocabulary::standard(), text)
    }

    #[test]
    fn test_all_prefixes() {
        assert_eq!(label("Size/Style: Tee - M"), Some("Tee - M"));
        assert_eq!(label("Shirt Size/Style: Tee - L"), Some("Tee - L"));
        assert_eq!(label("Shirt Size: XL"), Some("XL"));
        assert_eq!(label("Product Size - Style: Hoodie - S"), Some("Hoodie - S"));
        assert_eq!(label("Product Size-Style: Hoodie - S"), Some("Hoodie - S"));
        assert_eq!(label("Product Size: 3T"), Some("3T"));
        assert_eq!(label("Style: Sweatshirt - L"), Some("Sweatshirt - L"));
        assert_eq!(label("Size: M"), Some("M"));
    }

    #[test]
    fn test_case_and_leading_whitespace_ignored() {
        assert_eq!(label("   sTyLe:Unisex XL"), Some("Unisex XL"));
        assert_eq!(label("\tSIZE :  2XL  "), Some("2XL"));
    }

    #[test]
    fn test_longer_prefix_is_not_swallowed() {
        // "Size/Style" must not be read as "Size" with value "/Style: ..."
        assert_eq!(label("Size/Style: Tote"), Some("Tote"));
        assert_eq!(label("Product Size - Style: Apron"), Some("Apron"));
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(label("Style:"), Some(""));
        assert_eq!(label("Style:    "), Some(""));
    }

    #[test]
    fn test_non_label_lines() {
        assert_eq!(label("Quantity: 2"), None);
        assert_eq!(label("Color: Black"), None);
        assert_eq!(label("My Style: cool"), None);
        assert_eq!(label("Style - Hoodie"), None);
    }

    #[test]
    fn test_detect_labels_reports_positions() {
        let lines = split_lines("Order 1\nStyle: Tee - M\nQty: 2\nSize: L");
        let matches = detect_labels(&Vocabulary::standard(), &lines);

        assert_eq!(
            matches,
            vec![
                LabelMatch { line_index: 1, value: "Tee - M".to_string() },
                LabelMatch { line_index: 3, value: "L".to_string() },
            ]
        );
    }
}
