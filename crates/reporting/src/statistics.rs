//! Inventory statistics.
//!
//! Pure functions of the current inventory state: category breakdown, the most
//! expensive product, and stock totals. Nothing here mutates its input.

use std::collections::BTreeMap;

use serde::Serialize;

use ishop_core::ProductId;
use ishop_inventory::Inventory;
use ishop_products::StockItem;

/// The highest-priced product at snapshot time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MostExpensive {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
}

/// Summary of an inventory for reporting.
///
/// `category_counts` iterates in ascending category name order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsSnapshot {
    pub category_counts: BTreeMap<String, usize>,
    pub most_expensive: Option<MostExpensive>,
    /// Live products owned by the inventory.
    pub total_products: usize,
    /// Sum of price × stock.
    pub total_value: f64,
    /// Sum of stock.
    pub total_quantity: i64,
}

impl StatisticsSnapshot {
    pub fn is_empty(&self) -> bool {
        self.total_products == 0
    }
}

/// Product count per category.
pub fn category_counts<T: StockItem>(inventory: &Inventory<T>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for product in inventory {
        *counts.entry(product.category().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Highest-priced product; ties go to the first one in container order.
pub fn most_expensive<T: StockItem>(inventory: &Inventory<T>) -> Option<&T> {
    inventory.iter().fold(None, |best: Option<&T>, product| match best {
        Some(current) if product.price() <= current.price() => Some(current),
        _ => Some(product),
    })
}

pub fn snapshot<T: StockItem>(inventory: &Inventory<T>) -> StatisticsSnapshot {
    StatisticsSnapshot {
        category_counts: category_counts(inventory),
        most_expensive: most_expensive(inventory).map(|p| MostExpensive {
            product_id: p.id().clone(),
            name: p.name().to_string(),
            price: p.price(),
        }),
        total_products: inventory.live_count(),
        total_value: inventory.total_value(),
        total_quantity: inventory.total_stock(),
    }
}
