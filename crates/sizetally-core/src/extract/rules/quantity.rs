//! Proximity-based quantity resolution.

use super::patterns::Vocabulary;
use crate::models::{Quantity, RawLine};

/// Radius used when none is configured.
pub const DEFAULT_QUANTITY_RADIUS: usize = 5;

/// Quantity used when no quantity line is found.
pub const DEFAULT_QUANTITY: Quantity = 1;

/// Parse an explicit quantity declaration from one line.
///
/// Integers that do not fit a [`Quantity`] are treated as no match.
pub fn parse_quantity(vocabulary: &Vocabulary, text: &str) -> Option<Quantity> {
    let caps = vocabulary.quantity.captures(text)?;
    caps[1].parse().ok()
}

/// Search up to `radius` lines around `index` for a quantity.
///
/// Lines above are scanned first, nearest first; lines below are only
/// scanned when nothing was found above, no matter how close they are.
/// Offsets outside `lines` are skipped.
pub fn find_quantity_near(
    vocabulary: &Vocabulary,
    lines: &[RawLine],
    index: usize,
    radius: usize,
) -> Option<Quantity> {
    let above = (1..=radius)
        .map_while(|offset| index.checked_sub(offset))
        .filter_map(|j| lines.get(j))
        .find_map(|line| parse_quantity(vocabulary, &line.text));

    above.or_else(|| {
        (1..=radius)
            .map_while(|offset| index.checked_add(offset))
            .map_while(|j| lines.get(j))
            .find_map(|line| parse_quantity(vocabulary, &line.text))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::split_lines;

    fn resolve(text: &str, index: usize, radius: usize) -> Option<Quantity> {
        let lines = split_lines(text);
        find_quantity_near(&Vocabulary::standard(), &lines, index, radius)
    }

    #[test]
    fn test_above_beats_below() {
        let text = "Qty: 7\nfiller\nfiller\nStyle: Tee - M\nQty: 2";
        assert_eq!(resolve(text, 3, 5), Some(7));
    }

    #[test]
    fn test_far_above_beats_adjacent_below() {
        let text = "Quantity: 9\na\nb\nc\nd\nStyle: Tee\nQuantity: 1";
        assert_eq!(resolve(text, 5, 5), Some(9));
    }

    #[test]
    fn test_nearest_above_wins() {
        let text = "Qty: 4\nQty: 6\nStyle: Tee";
        assert_eq!(resolve(text, 2, 5), Some(6));
    }

    #[test]
    fn test_falls_back_to_below() {
        let text = "header\nStyle: Tee\nsomething\nQuantity x 3";
        assert_eq!(resolve(text, 1, 5), Some(3));
    }

    #[test]
    fn test_radius_is_respected() {
        let text = "Qty: 8\n1\n2\n3\n4\n5\nStyle: Tee";
        assert_eq!(resolve(text, 6, 5), None);
        assert_eq!(resolve(text, 6, 6), Some(8));
    }

    #[test]
    fn test_label_line_itself_is_not_scanned() {
        assert_eq!(resolve("Style: Tee Qty 4", 0, 5), None);
    }

    #[test]
    fn test_malformed_quantity_falls_through() {
        let text = "Qty: none\nStyle: Tee\nQty: 99999999999999999999999\nQty: 2";
        assert_eq!(resolve(text, 1, 5), Some(2));
    }

    #[test]
    fn test_index_past_end() {
        let text = "Qty: 3\nStyle: Tee";
        assert_eq!(resolve(text, 4, 5), Some(3));
        assert_eq!(resolve(text, 9, 5), None);
        assert_eq!(resolve("", 0, 5), None);
        assert_eq!(resolve(text, usize::MAX, 5), None);
    }

    #[test]
    fn test_zero_radius() {
        assert_eq!(resolve("Qty: 2\nStyle: Tee", 1, 0), None);
    }
}
