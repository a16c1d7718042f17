//! Advisory checks on item state.
//!
//! Callers run these after construction or after a day-advance and decide
//! for themselves what a failure means. The update rules never consult them.

use thiserror::Error;

use gildedrose_core::{DomainError, DomainResult};

use crate::item::{ItemSnapshot, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};

/// A single failed check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("sell_in {0} is negative")]
    NegativeSellIn(i32),

    #[error("quality {quality} outside 0..=50")]
    QualityOutOfRange { quality: i32 },

    #[error("legendary quality must be 80, got {quality}")]
    LegendaryQuality { quality: i32 },
}

pub fn has_valid_name(item: &ItemSnapshot) -> bool {
    !item.name.is_empty()
}

pub fn sell_in_within_limits(item: &ItemSnapshot) -> bool {
    item.sell_in >= 0
}

/// `0..=50` for ordinary items, exactly 80 for legendary ones.
pub fn quality_within_limits(item: &ItemSnapshot) -> bool {
    if item.category().is_legendary() {
        item.quality == LEGENDARY_QUALITY
    } else {
        (MIN_QUALITY..=MAX_QUALITY).contains(&item.quality)
    }
}

/// Every check the item fails, in a stable order.
pub fn violations(item: &ItemSnapshot) -> Vec<Violation> {
    let mut out = Vec::new();
    if !has_valid_name(item) {
        out.push(Violation::EmptyName);
    }
    if !sell_in_within_limits(item) {
        out.push(Violation::NegativeSellIn(item.sell_in));
    }
    if !quality_within_limits(item) {
        let quality = item.quality;
        out.push(if item.category().is_legendary() {
            Violation::LegendaryQuality { quality }
        } else {
            Violation::QualityOutOfRange { quality }
        });
    }
    out
}

/// Fail with the first violation, if any.
pub fn validate(item: &ItemSnapshot) -> DomainResult<()> {
    match violations(item).into_iter().next() {
        Some(v) => Err(DomainError::validation(v.to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::shop::Shop;

    #[test]
    fn name_must_be_non_empty() {
        let mut shop = Shop::new(vec![Item::new("", 0, 0), Item::new("H", 0, 0)]);
        shop.update_quality();
        assert!(!has_valid_name(&shop.items()[0].snapshot()));
        assert!(has_valid_name(&shop.items()[1].snapshot()));
    }

    #[test]
    fn sell_in_must_not_be_negative() {
        assert!(sell_in_within_limits(&ItemSnapshot::new("zero", 0, 0)));
        assert!(sell_in_within_limits(&ItemSnapshot::new("positive", 500, 0)));
        assert!(!sell_in_within_limits(&ItemSnapshot::new("negative", -1, 0)));
    }

    #[test]
    fn quality_bounds() {
        assert!(quality_within_limits(&ItemSnapshot::new("lowerLimit", 0, 0)));
        assert!(!quality_within_limits(&ItemSnapshot::new("negative", 0, -1)));
        assert!(quality_within_limits(&ItemSnapshot::new("upperLimit", 0, 50)));
        assert!(!quality_within_limits(&ItemSnapshot::new("positive", 0, 51)));
    }

    #[test]
    fn legendary_quality_is_fixed_at_eighty() {
        let sulfuras = "Sulfuras, Hand of Ragnaros";
        assert!(quality_within_limits(&ItemSnapshot::new(sulfuras, 0, 80)));
        assert!(!quality_within_limits(&ItemSnapshot::new(sulfuras, 0, 50)));
    }

    #[test]
    fn violations_lists_every_failure() {
        let item = ItemSnapshot::new("", -2, 51);
        assert_eq!(
            violations(&item),
            vec![
                Violation::EmptyName,
                Violation::NegativeSellIn(-2),
                Violation::QualityOutOfRange { quality: 51 },
            ]
        );
    }

    #[test]
    fn validate_reports_first_failure() {
        assert_eq!(validate(&ItemSnapshot::new("Aged Brie", 2, 0)), Ok(()));

        let err = validate(&ItemSnapshot::new("Sulfuras, Hand of Ragnaros", 3, 79)).unwrap_err();
        match err {
            DomainError::Validation(msg) => {
                assert_eq!(msg, "legendary quality must be 80, got 79");
            }
            _ => panic!("Expected Validation error for legendary quality"),
        }
    }
}
