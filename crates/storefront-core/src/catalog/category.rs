//! Product categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StorefrontError;

/// The fixed set of categories the store sells in.
///
/// Identifiers are matched case-sensitively; display names are for humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Card sleeves.
    Sleeves,
    /// Deck boxes.
    DeckBoxes,
    /// Card binders and portfolios.
    Binders,
    /// Playmats.
    Playmats,
    /// Everything else.
    Accessories,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 5] = [
        Category::Sleeves,
        Category::DeckBoxes,
        Category::Binders,
        Category::Playmats,
        Category::Accessories,
    ];

    /// Get the identifier (e.g., "deckboxes").
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sleeves => "sleeves",
            Category::DeckBoxes => "deckboxes",
            Category::Binders => "binders",
            Category::Playmats => "playmats",
            Category::Accessories => "accessories",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Sleeves => "Card Sleeves",
            Category::DeckBoxes => "Deck Boxes",
            Category::Binders => "Binders",
            Category::Playmats => "Playmats",
            Category::Accessories => "Accessories",
        }
    }
}

impl FromStr for Category {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| StorefrontError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
