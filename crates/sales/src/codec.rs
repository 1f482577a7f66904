//! Order line encoding.
//!
//! ```text
//! orderId,customerName,totalAmount,orderDateEpoch,itemCount[,productId,quantity,unitPrice]*
//! ```
//!
//! Decoding re-links every item to a live inventory entry. Items whose product is
//! gone are dropped, and the stored total is kept as written.

use chrono::DateTime;

use ishop_core::{OrderId, ProductId, parse_field, split_fields};
use ishop_inventory::Inventory;
use ishop_products::StockItem;

use crate::order::{Order, OrderItem};

const HEADER_FIELDS: usize = 5;
const ITEM_FIELDS: usize = 3;

impl OrderItem {
    pub fn to_line(&self) -> String {
        format!("{},{},{}", self.product_id(), self.quantity(), self.unit_price())
    }
}

impl Order {
    pub fn to_line(&self) -> String {
        let mut line = format!(
            "{},{},{},{},{}",
            self.id(),
            self.customer_name(),
            self.total_amount(),
            self.order_date().timestamp(),
            self.item_count()
        );
        for item in self.items() {
            line.push(',');
            line.push_str(&item.to_line());
        }
        line
    }

    /// Rebuild an order, resolving item product ids through `inventory`.
    ///
    /// Returns `None` for short or malformed header fields. Item groups that are
    /// incomplete, malformed, or reference an unknown product are dropped.
    pub fn from_line<T: StockItem>(line: &str, inventory: &Inventory<T>) -> Option<Self> {
        let fields = split_fields(line);
        if fields.len() < HEADER_FIELDS {
            return None;
        }

        let id: OrderId = fields[0].parse().ok()?;
        let customer_name = fields[1].to_string();
        let total_amount: f64 = parse_field(fields[2])?;
        let order_date = DateTime::from_timestamp(parse_field(fields[3])?, 0)?;
        let item_count: usize = parse_field(fields[4])?;

        let mut items = Vec::new();
        for group in fields[HEADER_FIELDS..].chunks_exact(ITEM_FIELDS).take(item_count) {
            let product_id = ProductId::new(group[0]);
            if inventory.find(product_id.as_str()).is_none() {
                tracing::debug!("order {id}: dropped item for unknown product {product_id}");
                continue;
            }
            match (parse_field::<i64>(group[1]), parse_field::<f64>(group[2])) {
                (Some(quantity), Some(unit_price)) if quantity > 0 => {
                    items.push(OrderItem::new(product_id, quantity, unit_price));
                }
                _ => tracing::debug!("order {id}: dropped malformed item group"),
            }
        }

        Some(Order::restore(id, customer_name, total_amount, order_date, items))
    }
}
