//! Item categories.

use serde::{Deserialize, Serialize};

/// The closed set of item categories the day-advance rules know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Normal,
    Brie,
    Legendary,
    BackstagePass,
}

impl Category {
    /// Classify an item by name.
    ///
    /// Substring match, first hit wins: "Sulfuras", then "Aged Brie", then
    /// "Backstage passes". Anything else is [`Category::Normal`].
    pub fn classify(name: &str) -> Self {
        if name.contains("Sulfuras") {
            Category::Legendary
        } else if name.contains("Aged Brie") {
            Category::Brie
        } else if name.contains("Backstage passes") {
            Category::BackstagePass
        } else {
            Category::Normal
        }
    }

    pub fn is_legendary(self) -> bool {
        self == Category::Legendary
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::Brie => "brie",
            Category::Legendary => "legendary",
            Category::BackstagePass => "backstage_pass",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
