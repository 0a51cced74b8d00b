//! Rule-based label, quantity and category extractors.

pub mod category;
pub mod label;
pub mod normalize;
pub mod patterns;
pub mod quantity;
pub mod size;

pub use category::{
    categorize, is_hoodie, is_sweatshirt_nonhoodie, matching_rule, CategoryRule, CATEGORY_RULES,
};
pub use label::{detect_labels, match_label};
pub use normalize::normalize_key;
pub use patterns::Vocabulary;
pub use quantity::{find_quantity_near, parse_quantity, DEFAULT_QUANTITY, DEFAULT_QUANTITY_RADIUS};
pub use size::size_rank;
