//! Rule-ordered product categorization.
//!
//! Rules are evaluated top to bottom and the first match decides the
//! category. Later rules assume earlier ones did not match, so the table
//! order is part of the semantics.

use super::patterns::{contains_any, Vocabulary};
use crate::models::Category;

/// A single categorization rule.
pub struct CategoryRule {
    /// Short rule name, used in logs and tests.
    pub name: &'static str,
    /// Category assigned when the rule matches.
    pub category: Category,
    /// Predicate over the lowercased key.
    pub matches: fn(&Vocabulary, &str) -> bool,
}

/// Categorization rules in precedence order. The last rule always matches.
pub static CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        name: "sweatshirt",
        category: Category::Sweatshirt,
        matches: |_, n| is_sweatshirt_nonhoodie_lower(n),
    },
    CategoryRule {
        name: "long-sleeve",
        category: Category::LongSleeve,
        matches: |v, n| contains_any(n, v.long_sleeve_markers),
    },
    CategoryRule {
        name: "hoodie",
        category: Category::Hoodie,
        matches: is_hoodie_lower,
    },
    CategoryRule {
        name: "v-neck",
        category: Category::VNeck,
        matches: |v, n| contains_any(n, v.vneck_markers),
    },
    CategoryRule {
        name: "adult-tee",
        category: Category::AdultTee,
        matches: |v, n| v.short_sleeve.is_match(n) && !is_youth_or_toddler(v, n),
    },
    CategoryRule {
        name: "unisex-sized",
        category: Category::AdultTee,
        matches: |v, n| {
            n.contains("unisex")
                && !contains_any(n, &["hoodie", "hooded", "sweatshirt"])
                && !contains_any(n, v.vneck_markers)
                && !is_youth_or_toddler(v, n)
                && v.size_token.is_match(n)
        },
    },
    CategoryRule {
        name: "youth-tee",
        category: Category::YouthTee,
        matches: |v, n| v.short_sleeve.is_match(n) && n.contains("youth"),
    },
    CategoryRule {
        name: "youth",
        category: Category::Youth,
        matches: |_, n| n.contains("youth"),
    },
    CategoryRule {
        name: "toddler-tee",
        category: Category::ToddlerTee,
        matches: |v, n| v.toddler_size.is_match(n) && v.toddler_top_hint.is_match(n),
    },
    CategoryRule {
        name: "toddler",
        category: Category::Toddler,
        matches: |v, n| v.toddler_size.is_match(n) || n.contains("toddler"),
    },
    CategoryRule {
        name: "onesie",
        category: Category::Onesie,
        matches: |v, n| contains_any(n, v.onesie_markers),
    },
    CategoryRule {
        name: "other",
        category: Category::Other,
        matches: |_, _| true,
    },
];

fn is_youth_or_toddler(vocabulary: &Vocabulary, lower: &str) -> bool {
    lower.contains("youth") || lower.contains("toddler") || vocabulary.toddler_size.is_match(lower)
}

fn is_sweatshirt_nonhoodie_lower(lower: &str) -> bool {
    lower.contains("sweatshirt") && !lower.contains("hooded") && !lower.contains("hoodie")
}

fn is_hoodie_lower(vocabulary: &Vocabulary, lower: &str) -> bool {
    contains_any(lower, vocabulary.hoodie_markers) || vocabulary.hoodie_word.is_match(lower)
}

/// Whether a key names a hoodie. Case-insensitive.
pub fn is_hoodie(vocabulary: &Vocabulary, key: &str) -> bool {
    is_hoodie_lower(vocabulary, &key.to_lowercase())
}

/// Whether a key names a sweatshirt that is not a hoodie. Case-insensitive.
///
/// Never true together with [`is_hoodie`].
pub fn is_sweatshirt_nonhoodie(key: &str) -> bool {
    is_sweatshirt_nonhoodie_lower(&key.to_lowercase())
}

/// First rule matching `key`. Total: the catch-all rule always matches.
pub fn matching_rule(vocabulary: &Vocabulary, key: &str) -> &'static CategoryRule {
    let lower = key.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| (rule.matches)(vocabulary, &lower))
        .unwrap_or(&CATEGORY_RULES[CATEGORY_RULES.len() - 1])
}

/// Assign a category to a normalized key.
pub fn categorize(vocabulary: &Vocabulary, key: &str) -> Category {
    matching_rule(vocabulary, key).category
}
