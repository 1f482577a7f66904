//! Inventory domain module.
//!
//! An ordered, typed container of catalog products with lookup, filtering and
//! stock aggregation, plus whole-file save/load through the product line codec.

pub mod container;
pub mod filters;
pub mod persistence;

pub use container::Inventory;
pub use persistence::LoadOutcome;
