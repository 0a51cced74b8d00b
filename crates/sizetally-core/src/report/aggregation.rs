//! Quantity aggregation per normalized key.

use crate::extract::rules::normalize_key;
use crate::models::{AggregateMap, LabelEntry, Quantity};

/// Sum entry quantities per normalized key.
///
/// The result does not depend on entry order. Sums saturate at
/// `Quantity::MAX`.
pub fn aggregate<'a>(entries: impl IntoIterator<Item = &'a LabelEntry>) -> AggregateMap {
    let mut map = AggregateMap::new();
    for entry in entries {
        add_to(&mut map, normalize_key(&entry.label), entry.quantity);
    }
    map
}

/// Add every bucket of `other` into `target`.
pub fn merge_into(target: &mut AggregateMap, other: &AggregateMap) {
    for (key, &quantity) in other {
        add_to(target, key.clone(), quantity);
    }
}

fn add_to(map: &mut AggregateMap, key: String, quantity: Quantity) {
    let total = map.entry(key).or_insert(0);
    *total = total.saturating_add(quantity);
}
