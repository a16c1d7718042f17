//! Daily update rules.
//!
//! Expiry is judged on the `sell_in` value *before* the day's decrement: an
//! item entering the day with `sell_in <= 0` gets the expired deltas.

use crate::category::Category;
use crate::item::{Item, MAX_QUALITY, MIN_QUALITY};

/// Compute `(sell_in', quality')` for one simulated day.
///
/// Total over all `i32` inputs. Values already outside `[0, 50]` are not
/// pulled back in, only increases below the cap and decreases above the
/// floor are applied.
pub fn next_state(category: Category, sell_in: i32, quality: i32) -> (i32, i32) {
    let expired = is_expired(sell_in);
    let quality = match category {
        Category::Legendary => return (sell_in, quality),
        Category::Brie => raise(quality, if expired { 2 } else { 1 }),
        Category::BackstagePass => {
            if expired {
                0
            } else if sell_in <= 5 {
                raise(quality, 3)
            } else if sell_in <= 10 {
                raise(quality, 2)
            } else {
                raise(quality, 1)
            }
        }
        Category::Normal => lower(quality, if expired { 2 } else { 1 }),
    };

    (sell_in.saturating_sub(1), quality)
}

/// An item entering the day with no days left to sell is expired.
pub fn is_expired(sell_in: i32) -> bool {
    sell_in <= 0
}

/// Advance a single item by one day, in place.
pub fn advance_item(item: &mut Item) {
    let (sell_in, quality) = next_state(item.category(), item.sell_in, item.quality);
    item.sell_in = sell_in;
    item.quality = quality;
}

fn raise(quality: i32, delta: i32) -> i32 {
    if quality < MAX_QUALITY {
        (quality + delta).min(MAX_QUALITY)
    } else {
        quality
    }
}

fn lower(quality: i32, delta: i32) -> i32 {
    if quality > MIN_QUALITY {
        (quality - delta).max(MIN_QUALITY)
    } else {
        quality
    }
}
