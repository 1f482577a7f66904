//! Incremental order entry against the live catalog.

use ishop_core::{DomainError, DomainResult};
use ishop_inventory::Inventory;
use ishop_sales::{Order, OrderBook};

/// An order being filled in by the operator.
///
/// Each successful `add_item` reserves stock on the live inventory entry right
/// away. The order is recorded in the book on `finalize`, or when the builder is
/// dropped, so reserved stock is never left without an order behind it.
pub struct OrderBuilder<'a> {
    inventory: &'a mut Inventory,
    book: &'a mut OrderBook,
    order: Order,
    recorded: bool,
}

impl<'a> OrderBuilder<'a> {
    pub(crate) fn new(inventory: &'a mut Inventory, book: &'a mut OrderBook, order: Order) -> Self {
        Self {
            inventory,
            book,
            order,
            recorded: false,
        }
    }

    /// The order as filled in so far.
    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Add `quantity` units of the product with `product_id`.
    pub fn add_item(&mut self, product_id: &str, quantity: i64) -> DomainResult<()> {
        let product = self
            .inventory
            .find_mut(product_id)
            .ok_or_else(|| DomainError::not_found(product_id))?;
        self.order.add_item(product, quantity)
    }

    /// Record the order in the book and return it.
    pub fn finalize(mut self) -> Order {
        self.record();
        self.order.clone()
    }

    fn record(&mut self) {
        if !self.recorded {
            self.book.append(self.order.clone());
            self.recorded = true;
        }
    }
}

impl Drop for OrderBuilder<'_> {
    fn drop(&mut self) {
        self.record();
    }
}
