use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::rules;

/// Upper quality bound for every category except [`Category::Legendary`].
pub const MAX_QUALITY: i32 = 50;

/// Lower quality bound for every category except [`Category::Legendary`].
pub const MIN_QUALITY: i32 = 0;

/// The fixed quality of a legendary item.
pub const LEGENDARY_QUALITY: i32 = 80;

/// A sellable item.
///
/// The category is derived from the name once, in [`Item::new`], and neither
/// can change afterwards. `sell_in` goes negative once the item has expired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemSnapshot", into = "ItemSnapshot")]
pub struct Item {
    name: String,
    pub sell_in: i32,
    pub quality: i32,
    category: Category,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = Category::classify(&name);
        Self {
            name,
            sell_in,
            quality,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_expired(&self) -> bool {
        rules::is_expired(self.sell_in)
    }

    /// Copy out the plain `(name, sell_in, quality)` state.
    pub fn snapshot(&self) -> ItemSnapshot {
        ItemSnapshot {
            name: self.name.clone(),
            sell_in: self.sell_in,
            quality: self.quality,
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Plain item state, as serialized and as inspected by [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl ItemSnapshot {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn category(&self) -> Category {
        Category::classify(&self.name)
    }
}

impl From<ItemSnapshot> for Item {
    fn from(value: ItemSnapshot) -> Self {
        Item::new(value.name, value.sell_in, value.quality)
    }
}

impl From<Item> for ItemSnapshot {
    fn from(value: Item) -> Self {
        Self {
            name: value.name,
            sell_in: value.sell_in,
            quality: value.quality,
        }
    }
}

impl From<&Item> for ItemSnapshot {
    fn from(value: &Item) -> Self {
        value.snapshot()
    }
}
