//! Batch day-advance over a collection of items.
//!
//! Items are independent: each one is read and written on its own, so the
//! order of processing never affects the result.

use crate::item::Item;
use crate::rules::advance_item;

/// Advance every item in the collection by one day.
pub fn advance_one_day(items: &mut [Item]) {
    tracing::debug!(items = items.len(), "advancing inventory one day");
    items.iter_mut().for_each(advance_item);
}

/// Advance every item by `days` days, one day at a time.
pub fn advance_days(items: &mut [Item], days: u32) {
    for _ in 0..days {
        advance_one_day(items);
    }
}

/// Parallel variant of [`advance_one_day`]. Produces identical results.
#[cfg(feature = "parallel")]
pub fn advance_one_day_par(items: &mut [Item]) {
    use rayon::prelude::*;

    tracing::debug!(items = items.len(), "advancing inventory one day (parallel)");
    items.par_iter_mut().for_each(advance_item);
}

/// An owned inventory plus the number of days simulated so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Shop {
    items: Vec<Item>,
    day: u32,
}

impl Shop {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items, day: 0 }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Days simulated since construction.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Advance the whole inventory by one day.
    pub fn update_quality(&mut self) {
        advance_one_day(&mut self.items);
        self.day += 1;
    }

    /// [`Shop::update_quality`] using [`advance_one_day_par`].
    #[cfg(feature = "parallel")]
    pub fn update_quality_par(&mut self) {
        advance_one_day_par(&mut self.items);
        self.day += 1;
    }
}
