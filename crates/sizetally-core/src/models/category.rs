//! Product categories assigned to normalized label keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Garment/product bucket for a normalized key.
///
/// The discriminant is the category rank used as the primary sort key of a
/// report. Rank 9 is intentionally unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Category {
    /// Sweatshirt that is neither hooded nor a hoodie.
    Sweatshirt = 0,
    /// Long sleeve shirt.
    LongSleeve = 1,
    /// Hoodie or hooded sweatshirt.
    Hoodie = 2,
    /// Adult/unisex short sleeve or tee.
    AdultTee = 3,
    /// Youth short sleeve or tee.
    YouthTee = 4,
    /// Any other youth product.
    Youth = 5,
    /// Toddler (2T-5T) short sleeve.
    ToddlerTee = 6,
    /// Any other toddler product.
    Toddler = 7,
    /// Onesie or baby bodysuit.
    Onesie = 8,
    /// V-neck.
    VNeck = 10,
    /// Everything else.
    Other = 11,
}

impl Category {
    /// All categories in rank order.
    pub const ALL: [Category; 11] = [
        Category::Sweatshirt,
        Category::LongSleeve,
        Category::Hoodie,
        Category::AdultTee,
        Category::YouthTee,
        Category::Youth,
        Category::ToddlerTee,
        Category::Toddler,
        Category::Onesie,
        Category::VNeck,
        Category::Other,
    ];

    /// Numeric rank in `[0, 11]`.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Look up a category by its rank.
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.rank() == rank)
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Sweatshirt => "Sweatshirts (non-hoodie)",
            Category::LongSleeve => "Long Sleeve",
            Category::Hoodie => "Hoodies",
            Category::AdultTee => "Adult Short Sleeve / Tees",
            Category::YouthTee => "Youth Short Sleeve / Tees",
            Category::Youth => "Youth (other)",
            Category::ToddlerTee => "Toddler Short Sleeve",
            Category::Toddler => "Toddler (other)",
            Category::Onesie => "Onesie / Baby Bodysuit",
            Category::VNeck => "V-Neck",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
