//! Ready-made predicates for [`Inventory::filter`](crate::Inventory::filter).

use ishop_products::StockItem;

/// Products whose category equals `category` exactly.
pub fn by_category<T: StockItem>(category: impl Into<String>) -> impl Fn(&T) -> bool {
    let category = category.into();
    move |p: &T| p.category() == category
}

/// Products priced within `[min, max]`, both ends inclusive.
pub fn price_between<T: StockItem>(min: f64, max: f64) -> impl Fn(&T) -> bool {
    move |p: &T| p.price() >= min && p.price() <= max
}

/// Products with stock strictly below `threshold`.
pub fn low_stock<T: StockItem>(threshold: i64) -> impl Fn(&T) -> bool {
    move |p: &T| p.stock() < threshold
}
