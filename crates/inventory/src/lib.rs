//! Inventory domain module.
//!
//! This crate contains the daily update rules for sellable items, implemented
//! purely as deterministic domain logic (no IO, no storage). The surrounding
//! shop driver builds items, calls [`shop::advance_one_day`] once per
//! simulated day and reads `sell_in` / `quality` back.

pub mod category;
pub mod item;
pub mod rules;
pub mod shop;
pub mod validation;

pub use category::Category;
pub use item::{Item, ItemSnapshot, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use rules::{advance_item, is_expired, next_state};
pub use shop::{Shop, advance_days, advance_one_day};
pub use validation::{Violation, validate, violations};

#[cfg(feature = "parallel")]
pub use shop::advance_one_day_par;
