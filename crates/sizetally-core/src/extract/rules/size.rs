//! Size ranking within a category.

use super::patterns::Vocabulary;

/// Position of the first standalone size token of `key` in the size order.
///
/// Keys without a size token rank after every sized key.
pub fn size_rank(vocabulary: &Vocabulary, key: &str) -> usize {
    let unsized_rank = vocabulary.size_order.len();
    let lower = key.to_lowercase();

    vocabulary
        .size_token
        .captures(&lower)
        .and_then(|caps| {
            let token = caps.get(1)?.as_str();
            vocabulary.size_order.iter().position(|s| *s == token)
        })
        .unwrap_or(unsized_rank)
}
