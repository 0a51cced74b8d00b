//! Regex patterns and marker tables for order-export label extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Label prefixes, longest alternatives before their textual prefixes.
pub const LABEL_PREFIXES: &[&str] = &[
    r"Size/Style",
    r"Shirt Size/Style",
    r"Shirt Size",
    r"Product Size\s*-\s*Style",
    r"Product Size",
    r"Style",
    r"Size",
];

/// Markers that identify a hoodie by substring.
pub const HOODIE_MARKERS: &[&str] = &["hooded sweatshirt", "unisex hoodie"];

/// Spellings of "long sleeve".
pub const LONG_SLEEVE_MARKERS: &[&str] = &["long sleeve", "long-sleeve", "longsleeve"];

/// Spellings of "v-neck".
pub const VNECK_MARKERS: &[&str] = &["v-neck", "v neck", "vneck"];

/// Onesie/bodysuit markers.
pub const ONESIE_MARKERS: &[&str] = &["onesie", "baby bodysuit", "bodysuit"];

/// Standalone size tokens, smallest first.
pub const SIZE_ORDER: &[&str] = &["xs", "s", "m", "l", "xl", "2xl", "3xl", "4xl", "5xl", "6xl"];

lazy_static! {
    pub static ref LABEL_LINE: Regex = Regex::new(&format!(
        r"(?i)^\s*(?:{})\s*:\s*(.*)$",
        LABEL_PREFIXES.join("|")
    ))
    .unwrap();

    pub static ref QUANTITY: Regex = Regex::new(
        r"(?i)(?:qty|quantity)\s*[:x]*\s*([0-9]+)"
    ).unwrap();

    // Applied to lowercased text from here on.
    pub static ref SHORT_SLEEVE: Regex = Regex::new(
        r"shortsleeve|short\s*-?\s*sleeve|t\s*-?\s*shirt|tshirt|\btee\b"
    ).unwrap();

    pub static ref TODDLER_SIZE: Regex = Regex::new(
        r"\b[2-5]t\b"
    ).unwrap();

    pub static ref SIZE_TOKEN: Regex = Regex::new(
        r"\b(xs|s|m|l|xl|[2-6]xl)\b"
    ).unwrap();

    pub static ref HOODIE_WORD: Regex = Regex::new(
        r"\bhoodie\b"
    ).unwrap();

    pub static ref TODDLER_TOP_HINT: Regex = Regex::new(
        r"short|tee|shirt"
    ).unwrap();
}

/// Immutable pattern and marker tables used by every engine stage.
///
/// Owned by the parser and passed to categorization and reporting, so
/// alternative vocabularies never touch shared state.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Label line matcher; group 1 captures the value.
    pub label_line: Regex,
    /// Explicit quantity declaration; group 1 captures the integer.
    pub quantity: Regex,
    /// Short sleeve / tee spellings.
    pub short_sleeve: Regex,
    /// Toddler size token (2T-5T).
    pub toddler_size: Regex,
    /// Standalone size token; group 1 captures the token.
    pub size_token: Regex,
    /// Whole word "hoodie".
    pub hoodie_word: Regex,
    /// Words marking a toddler top.
    pub toddler_top_hint: Regex,
    pub hoodie_markers: &'static [&'static str],
    pub long_sleeve_markers: &'static [&'static str],
    pub vneck_markers: &'static [&'static str],
    pub onesie_markers: &'static [&'static str],
    /// Size tokens in ascending order.
    pub size_order: &'static [&'static str],
}

impl Vocabulary {
    /// The fixed label and product vocabulary.
    pub fn standard() -> Self {
        Self {
            label_line: LABEL_LINE.clone(),
            quantity: QUANTITY.clone(),
            short_sleeve: SHORT_SLEEVE.clone(),
            toddler_size: TODDLER_SIZE.clone(),
            size_token: SIZE_TOKEN.clone(),
            hoodie_word: HOODIE_WORD.clone(),
            toddler_top_hint: TODDLER_TOP_HINT.clone(),
            hoodie_markers: HOODIE_MARKERS,
            long_sleeve_markers: LONG_SLEEVE_MARKERS,
            vneck_markers: VNECK_MARKERS,
            onesie_markers: ONESIE_MARKERS,
            size_order: SIZE_ORDER,
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

/// Whether `text` contains any of `markers`. Expects lowercased input.
pub(crate) fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| text.contains(m))
}
