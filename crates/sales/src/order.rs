//! Orders, their line items, and the order id sequence.

use chrono::{DateTime, SubsecRound, Utc};
use serde::Serialize;

use ishop_core::{DomainError, DomainResult, Entity, OrderId, ProductId, ValueObject};
use ishop_products::StockItem;

/// Order line: product reference, quantity, unit price captured at add time.
///
/// The product is referenced by id and resolved through the inventory when
/// needed, so removing a product never leaves a dangling line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    product_id: ProductId,
    quantity: i64,
    unit_price: f64,
}

impl ValueObject for OrderItem {}

impl OrderItem {
    pub(crate) fn new(product_id: ProductId, quantity: i64, unit_price: f64) -> Self {
        Self {
            product_id,
            quantity,
            unit_price,
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Customer order.
///
/// `total_amount` is maintained incrementally as items are added. Orders rebuilt
/// from disk keep their stored total even if some items could not be re-linked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: OrderId,
    customer_name: String,
    items: Vec<OrderItem>,
    total_amount: f64,
    order_date: DateTime<Utc>,
}

impl Order {
    /// Start an empty order. The date is kept to whole seconds.
    pub fn new(id: OrderId, customer_name: impl Into<String>, order_date: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            items: Vec::new(),
            total_amount: 0.0,
            order_date: order_date.trunc_subsecs(0),
        }
    }

    pub(crate) fn restore(
        id: OrderId,
        customer_name: String,
        total_amount: f64,
        order_date: DateTime<Utc>,
        items: Vec<OrderItem>,
    ) -> Self {
        Self {
            id,
            customer_name,
            items,
            total_amount,
            order_date,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    /// Reserve `quantity` units of `product` and append a line at its current price.
    ///
    /// On error neither the order nor the product is changed.
    pub fn add_item<P: StockItem>(&mut self, product: &mut P, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::invalid_argument("quantity must be positive"));
        }
        if product.stock() < quantity {
            return Err(DomainError::insufficient_stock(
                product.name(),
                quantity,
                product.stock(),
            ));
        }

        product.update_stock(-quantity)?;
        let item = OrderItem::new(product.id().clone(), quantity, product.price());
        self.total_amount += item.line_total();
        self.items.push(item);
        Ok(())
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Monotonic order id allocator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OrderSequence {
    last: u32,
}

impl OrderSequence {
    /// Ids handed out by a fresh sequence start right after this value.
    pub const START: u32 = 1000;

    pub fn new() -> Self {
        Self { last: Self::START }
    }

    /// Allocate the next id. Fails once the id space is used up rather than
    /// wrapping onto ids that may already exist.
    pub fn next_id(&mut self) -> DomainResult<OrderId> {
        let next = self.last.checked_add(1).ok_or_else(|| {
            DomainError::invalid_argument(format!("order ids exhausted after {}", self.last))
        })?;
        self.last = next;
        Ok(OrderId::new(next))
    }

    /// Make sure future ids are greater than `id`. Never moves backwards.
    pub fn observe(&mut self, id: OrderId) {
        self.last = self.last.max(id.value());
    }

    pub fn last(&self) -> u32 {
        self.last
    }
}

impl Default for OrderSequence {
    fn default() -> Self {
        Self::new()
    }
}
