//! Property tests for normalization, aggregation and categorization.

use proptest::prelude::*;

use sizetally_core::extract::rules::{is_hoodie, is_sweatshirt_nonhoodie};
use sizetally_core::{aggregate, categorize, normalize_key, LabelEntry, Vocabulary};

fn label_text() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "Hooded", "Sweatshirt", "Hoodie", "Unisex", "Youth", "Toddler", "Tee", "T-Shirt",
        "Long", "Sleeve", "V-Neck", "Onesie", "Tote", "Apron", "2T", "3T", "XS", "S", "M",
        "L", "XL", "2XL", "-", "\u{2013}", "\u{2014}",
    ]);
    let sep = prop::sample::select(vec![" ", "  ", "\t", " \u{00a0}"]);
    prop::collection::vec((words, sep), 0..8).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(w, s)| format!("{}{}", w, s))
            .collect::<String>()
    })
}

fn entries() -> impl Strategy<Value = Vec<LabelEntry>> {
    prop::collection::vec(
        (label_text(), 0u64..1000).prop_map(|(label, quantity)| LabelEntry::new(label, quantity)),
        0..40,
    )
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in any::<String>()) {
        let once = normalize_key(&text);
        prop_assert_eq!(normalize_key(&once), once);
    }

    #[test]
    fn normalize_is_idempotent_on_labels(text in label_text()) {
        let once = normalize_key(&text);
        prop_assert_eq!(normalize_key(&once), once);
    }

    #[test]
    fn aggregation_ignores_order(entries in entries(), seed in any::<u64>()) {
        let mut shuffled = entries.clone();
        // Deterministic permutation driven by the seed.
        let len = shuffled.len();
        if len > 1 {
            for i in 0..len {
                let j = ((seed.wrapping_mul(i as u64 + 1)) % len as u64) as usize;
                shuffled.swap(i, j);
            }
        }
        prop_assert_eq!(aggregate(&entries), aggregate(&shuffled));
    }

    #[test]
    fn aggregation_preserves_sum(entries in entries()) {
        let expected: u64 = entries.iter().map(|e| e.quantity).sum();
        let actual: u64 = aggregate(&entries).values().sum();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn hoodie_and_sweatshirt_are_exclusive(text in label_text()) {
        let vocabulary = Vocabulary::standard();
        let key = normalize_key(&text);
        prop_assert!(!(is_hoodie(&vocabulary, &key) && is_sweatshirt_nonhoodie(&key)));
    }

    #[test]
    fn categorize_is_total(text in any::<String>()) {
        let rank = categorize(&Vocabulary::standard(), &text).rank();
        prop_assert!(rank <= 11);
    }
}
