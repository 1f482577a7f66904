//! Read-only statistics over an inventory.

pub mod statistics;

pub use statistics::{
    MostExpensive, StatisticsSnapshot, category_counts, most_expensive, snapshot,
};
