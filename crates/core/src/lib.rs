//! `gildedrose-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory
//! crate and the shop driver (no IO, no logging setup).

pub mod error;

pub use error::{DomainError, DomainResult};
