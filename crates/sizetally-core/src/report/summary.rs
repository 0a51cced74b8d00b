//! Cross-cutting category totals.

use serde::{Deserialize, Serialize};

use crate::extract::rules::{categorize, is_hoodie, is_sweatshirt_nonhoodie, Vocabulary};
use crate::models::{AggregateMap, Category, Quantity};

/// Named counters computed over an aggregate.
///
/// Hoodie and sweatshirt totals use the same predicates as their
/// categories. Apron and tote totals are substring overlays and may
/// double count a key that is also in a ranked bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub unique_combos: usize,
    pub total_items: Quantity,
    pub sweatshirts: Quantity,
    pub hoodies: Quantity,
    pub adult_tees: Quantity,
    pub vnecks: Quantity,
    pub long_sleeves: Quantity,
    pub youth: Quantity,
    pub toddler: Quantity,
    pub onesie: Quantity,
    pub apron: Quantity,
    pub tote: Quantity,
}

impl CategorySummary {
    /// Compute every counter over `aggregate`.
    pub fn from_aggregate(vocabulary: &Vocabulary, aggregate: &AggregateMap) -> Self {
        let mut summary = Self {
            unique_combos: aggregate.len(),
            ..Self::default()
        };

        for (key, &quantity) in aggregate {
            let add = |counter: &mut Quantity| *counter = counter.saturating_add(quantity);
            add(&mut summary.total_items);

            if is_sweatshirt_nonhoodie(key) {
                add(&mut summary.sweatshirts);
            }
            if is_hoodie(vocabulary, key) {
                add(&mut summary.hoodies);
            }

            match categorize(vocabulary, key) {
                Category::LongSleeve => add(&mut summary.long_sleeves),
                Category::AdultTee => add(&mut summary.adult_tees),
                Category::YouthTee | Category::Youth => add(&mut summary.youth),
                Category::ToddlerTee | Category::Toddler => add(&mut summary.toddler),
                Category::Onesie => add(&mut summary.onesie),
                Category::VNeck => add(&mut summary.vnecks),
                Category::Sweatshirt | Category::Hoodie | Category::Other => {}
            }

            let lower = key.to_lowercase();
            if lower.contains("apron") {
                add(&mut summary.apron);
            }
            if lower.contains("tote") {
                add(&mut summary.tote);
            }
        }

        summary
    }

    /// Labelled category counters in display order.
    pub fn category_totals(&self) -> [(&'static str, Quantity); 10] {
        [
            (Category::Sweatshirt.name(), self.sweatshirts),
            (Category::Hoodie.name(), self.hoodies),
            (Category::AdultTee.name(), self.adult_tees),
            (Category::VNeck.name(), self.vnecks),
            (Category::LongSleeve.name(), self.long_sleeves),
            ("Youth (all)", self.youth),
            ("Toddler (all)", self.toddler),
            (Category::Onesie.name(), self.onesie),
            ("Apron", self.apron),
            ("Tote Bag", self.tote),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn summarize(items: &[(&str, Quantity)]) -> CategorySummary {
        let aggregate: AggregateMap = items.iter().map(|(k, q)| (k.to_string(), *q)).collect();
        CategorySummary::from_aggregate(&Vocabulary::standard(), &aggregate)
    }

    #[test]
    fn test_empty_aggregate() {
        assert_eq!(summarize(&[]), CategorySummary::default());
    }

    #[test]
    fn test_counts_every_bucket() {
        let summary = summarize(&[
            ("Sweatshirt - M", 1),
            ("Hooded Sweatshirt - S", 2),
            ("Unisex T-Shirt - L", 3),
            ("Unisex V-Neck - M", 4),
            ("Long Sleeve Tee - XL", 5),
            ("Youth T-Shirt - M", 6),
            ("Youth Beanie", 7),
            ("Toddler 3T", 8),
            ("Baby Bodysuit", 9),
            ("Canvas Tote Bag", 10),
            ("Kitchen Apron", 11),
        ]);

        assert_eq!(
            summary,
            CategorySummary {
                unique_combos: 11,
                total_items: 66,
                sweatshirts: 1,
                hoodies: 2,
                adult_tees: 3,
                vnecks: 4,
                long_sleeves: 5,
                youth: 13,
                toddler: 8,
                onesie: 9,
                apron: 11,
                tote: 10,
            }
        );
    }

    #[test]
    fn test_apron_overlays_ranked_bucket() {
        let summary = summarize(&[("Apron Tee - M", 2)]);
        assert_eq!(summary.adult_tees, 2);
        assert_eq!(summary.apron, 2);
        assert_eq!(summary.total_items, 2);
    }

    #[test]
    fn test_hoodie_total_ignores_rank() {
        // Ranked as long sleeve, still counted as a hoodie.
        let summary = summarize(&[("Long Sleeve Hoodie - L", 3)]);
        assert_eq!(summary.long_sleeves, 3);
        assert_eq!(summary.hoodies, 3);
        assert_eq!(summary.sweatshirts, 0);
    }

    #[test]
    fn test_totals_saturate() {
        let summary = summarize(&[("Tee - M", Quantity::MAX), ("Tee - L", Quantity::MAX)]);
        assert_eq!(summary.total_items, Quantity::MAX);
        assert_eq!(summary.adult_tees, Quantity::MAX);
    }

    #[test]
    fn test_category_totals_labels() {
        let totals = summarize(&[("Canvas Tote Bag", 2)]).category_totals();
        assert_eq!(totals.len(), 10);
        assert_eq!(totals[9], ("Tote Bag", 2));
    }
}
