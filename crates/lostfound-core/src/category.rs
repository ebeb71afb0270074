//! Item categories and keyword tables
//!
//! Three fixed tables classify titles by keyword substring match. Table order
//! is significant: the first entry with a matching keyword wins, so a title
//! such as "laptop bag" lands in Electronics, not Accessories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LostFoundError;

/// Item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Accessories,
    Clothing,
    Books,
    Keys,
    Documents,
    Sports,
    Food,
    Tools,
    Other,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Electronics,
        Category::Accessories,
        Category::Clothing,
        Category::Books,
        Category::Keys,
        Category::Documents,
        Category::Sports,
        Category::Food,
        Category::Tools,
        Category::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Accessories => "Accessories",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::Keys => "Keys",
            Category::Documents => "Documents",
            Category::Sports => "Sports",
            Category::Food => "Food",
            Category::Tools => "Tools",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Category {
    type Err = LostFoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LostFoundError::invalid_value("category", s))
    }
}

/// Ordered mapping from category to keywords
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    entries: &'static [(Category, &'static [&'static str])],
}

impl KeywordTable {
    pub const fn new(entries: &'static [(Category, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// Entries in check order
    pub fn entries(&self) -> &'static [(Category, &'static [&'static str])] {
        self.entries
    }

    /// Keywords for a category, empty when the table has no entry for it
    pub fn keywords(&self, category: Category) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }

    /// First category with a keyword contained in the lowercased text, else Other
    pub fn classify(&self, text: &str) -> Category {
        let lower = text.to_lowercase();
        self.entries
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }
}

/// Buckets used by the duplicate scorer's category factor
pub static DUPLICATE_BUCKETS: KeywordTable = KeywordTable::new(&[
    (
        Category::Electronics,
        &["phone", "laptop", "charger", "earphone", "headphone", "tablet", "computer"],
    ),
    (
        Category::Accessories,
        &["bag", "wallet", "watch", "jewelry", "ring", "necklace", "bracelet"],
    ),
    (
        Category::Clothing,
        &["shirt", "pants", "jacket", "coat", "dress", "shoes", "hat", "cap"],
    ),
    (
        Category::Books,
        &["book", "notebook", "textbook", "diary", "journal"],
    ),
    (Category::Keys, &["key", "keys", "keychain"]),
    (
        Category::Documents,
        &["id", "card", "license", "passport", "certificate", "document"],
    ),
]);

/// Categories offered by auto-tagging (Other carries no keywords)
pub static TAGGING_CATEGORIES: KeywordTable = KeywordTable::new(&[
    (
        Category::Electronics,
        &[
            "phone", "laptop", "charger", "earphone", "headphone", "tablet", "computer", "camera",
            "speaker",
        ],
    ),
    (
        Category::Accessories,
        &[
            "bag", "wallet", "watch", "jewelry", "ring", "necklace", "bracelet", "sunglasses",
            "belt",
        ],
    ),
    (
        Category::Clothing,
        &[
            "shirt", "pants", "jacket", "coat", "dress", "shoes", "hat", "cap", "sweater", "hoodie",
        ],
    ),
    (
        Category::Books,
        &["book", "notebook", "textbook", "diary", "journal", "magazine", "novel"],
    ),
    (Category::Keys, &["key", "keys", "keychain", "keyring"]),
    (
        Category::Documents,
        &["id", "card", "license", "passport", "certificate", "document", "paper"],
    ),
    (
        Category::Sports,
        &["ball", "racket", "bat", "helmet", "gloves", "equipment", "gear"],
    ),
    (
        Category::Food,
        &["lunch", "snack", "bottle", "container", "thermos"],
    ),
    (
        Category::Tools,
        &["tool", "screwdriver", "hammer", "wrench", "pliers"],
    ),
    (Category::Other, &[]),
]);

/// Coarse buckets used by the executive summary
pub static SUMMARY_BUCKETS: KeywordTable = KeywordTable::new(&[
    (Category::Electronics, &["phone", "laptop", "charger"]),
    (Category::Accessories, &["bag", "wallet", "watch"]),
    (Category::Books, &["book", "notebook"]),
    (Category::Keys, &["key"]),
    (Category::Documents, &["id", "card"]),
]);
