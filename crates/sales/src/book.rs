//! The order book and its flat-file persistence.

use std::path::Path;

use chrono::{DateTime, Utc};

use ishop_core::{DomainResult, OrderId};
use ishop_inventory::persistence::{non_empty_lines, read_source, write_lines};
use ishop_inventory::{Inventory, LoadOutcome};
use ishop_products::StockItem;

use crate::order::{Order, OrderSequence};

/// Every order placed in the session, in insertion order, plus the id sequence.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
    sequence: OrderSequence,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new, empty order with the next id. It is not recorded until appended.
    pub fn create_order(&mut self, customer_name: impl Into<String>) -> DomainResult<Order> {
        self.create_order_at(customer_name, Utc::now())
    }

    pub fn create_order_at(
        &mut self,
        customer_name: impl Into<String>,
        order_date: DateTime<Utc>,
    ) -> DomainResult<Order> {
        Ok(Order::new(self.sequence.next_id()?, customer_name, order_date))
    }

    pub fn append(&mut self, order: Order) {
        self.sequence.observe(order.id());
        self.orders.push(order);
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn find(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id() == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn sequence(&self) -> &OrderSequence {
        &self.sequence
    }

    /// Overwrite `path` with one encoded line per order.
    pub fn save_all(&self, path: impl AsRef<Path>) -> DomainResult<()> {
        let path = path.as_ref();
        let written = write_lines(path, self.orders.iter().map(Order::to_line))?;
        tracing::debug!("saved {written} orders to {}", path.display());
        Ok(())
    }

    /// Replace all orders with those decoded from `path`, re-linking items via `inventory`.
    ///
    /// A missing file is a no-op. The id sequence is advanced past the highest
    /// loaded id so new orders never collide with stored ones.
    pub fn load_all<T: StockItem>(
        &mut self,
        path: impl AsRef<Path>,
        inventory: &Inventory<T>,
    ) -> DomainResult<LoadOutcome> {
        let path = path.as_ref();
        let Some(content) = read_source(path)? else {
            tracing::debug!("{} not found; orders left unchanged", path.display());
            return Ok(LoadOutcome::Missing);
        };

        let mut loaded = Vec::new();
        let mut skipped = 0;
        for line in non_empty_lines(&content) {
            match line.and_then(|line| Order::from_line(line, inventory)) {
                Some(order) => loaded.push(order),
                None => skipped += 1,
            }
        }

        for order in &loaded {
            self.sequence.observe(order.id());
        }
        let records = loaded.len();
        self.orders = loaded;
        tracing::debug!(
            "loaded {records} orders from {} ({skipped} skipped), next id after {}",
            path.display(),
            self.sequence.last()
        );
        Ok(LoadOutcome::Loaded { records, skipped })
    }
}
