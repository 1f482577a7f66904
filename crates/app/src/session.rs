//! The session facade: one catalog, one order book, and their files.
//!
//! Text bound for a saved line is validated here; the line layout has no escaping.

use serde::{Deserialize, Serialize};

use ishop_core::{DELIMITER, DomainError, DomainResult, is_encodable};
use ishop_inventory::{Inventory, LoadOutcome, filters};
use ishop_products::{Product, ProductDetails};
use ishop_reporting::{StatisticsSnapshot, snapshot};
use ishop_sales::{Order, OrderBook};

use crate::builder::OrderBuilder;
use crate::config::SessionConfig;

/// Input for [`Session::add_product`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub details: ProductDetails,
}

impl NewProduct {
    fn text_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str(), self.name.as_str()];
        match &self.details {
            ProductDetails::Clothing(c) => {
                fields.extend([c.size.as_str(), c.color.as_str(), c.material.as_str()])
            }
            ProductDetails::Stationery(s) => fields.extend([s.brand.as_str(), s.item_type.as_str()]),
            ProductDetails::Accessory(a) => fields.push(a.accessory_type.as_str()),
        }
        fields
    }
}

/// Result of a discount preview. The catalog price is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscountQuote {
    pub original: f64,
    pub discounted: f64,
    pub requested_percent: f64,
}

/// What `load_all` found for each file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub products: LoadOutcome,
    pub orders: LoadOutcome,
}

/// One shop session: the catalog, the order book, and where both are stored.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    inventory: Inventory,
    orders: OrderBook,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            inventory: Inventory::new(config.inventory_name.clone()),
            orders: OrderBook::new(),
            config,
        }
    }

    /// Create a session and load whatever state its files hold.
    pub fn open(config: SessionConfig) -> DomainResult<Self> {
        let mut session = Self::new(config);
        session.load_all()?;
        Ok(session)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Add a product to the catalog.
    ///
    /// Ids must be unique within the session, and no text field may contain the
    /// field delimiter or a line break, since either would make the saved
    /// catalog ambiguous.
    pub fn add_product(&mut self, draft: NewProduct) -> DomainResult<&Product> {
        if self.inventory.find(&draft.id).is_some() {
            return Err(DomainError::invalid_argument(format!(
                "product id already exists: {}",
                draft.id
            )));
        }
        if !draft.text_fields().iter().all(|f| is_encodable(f)) {
            return Err(DomainError::invalid_argument(format!(
                "product fields cannot contain '{DELIMITER}' or line breaks"
            )));
        }

        let product = Product::new(draft.id, draft.name, draft.price, draft.stock, draft.details)?;
        tracing::debug!("adding {} {}", product.category(), product.id());
        Ok(self.inventory.add(product))
    }

    pub fn remove_product(&mut self, id: &str) -> bool {
        self.inventory.remove(id)
    }

    pub fn find_product(&self, id: &str) -> Option<&Product> {
        self.inventory.find(id)
    }

    pub fn list_products(&self) -> &[Product] {
        self.inventory.products()
    }

    pub fn filter_products<F>(&self, predicate: F) -> Vec<&Product>
    where
        F: Fn(&Product) -> bool,
    {
        self.inventory.filter(predicate)
    }

    pub fn products_in_category(&self, category: &str) -> Vec<&Product> {
        self.inventory.filter(filters::by_category::<Product>(category))
    }

    pub fn products_priced_between(&self, min: f64, max: f64) -> Vec<&Product> {
        self.inventory.filter(filters::price_between::<Product>(min, max))
    }

    /// Products below the configured low-stock threshold.
    pub fn low_stock_products(&self) -> Vec<&Product> {
        self.inventory
            .filter(filters::low_stock::<Product>(self.config.low_stock_threshold))
    }

    pub fn set_price(&mut self, id: &str, new_price: f64) -> DomainResult<()> {
        self.product_mut(id)?.set_price(new_price)
    }

    /// Restock (positive `delta`) or write off (negative `delta`) units.
    pub fn adjust_stock(&mut self, id: &str, delta: i64) -> DomainResult<()> {
        self.product_mut(id)?.update_stock(delta)
    }

    pub fn discount_preview(&self, id: &str, discount_percent: f64) -> DomainResult<DiscountQuote> {
        let product = self
            .inventory
            .find(id)
            .ok_or_else(|| DomainError::not_found(id))?;
        Ok(DiscountQuote {
            original: product.price(),
            discounted: product.calculate_discounted_price(discount_percent)?,
            requested_percent: discount_percent,
        })
    }

    /// Start an order for `customer_name`. It is recorded once the builder is
    /// finalized or dropped.
    ///
    /// The name is rejected up front if it could not be saved and read back.
    pub fn create_order(
        &mut self,
        customer_name: impl Into<String>,
    ) -> DomainResult<OrderBuilder<'_>> {
        let customer_name = customer_name.into();
        if !is_encodable(&customer_name) {
            return Err(DomainError::invalid_argument(format!(
                "customer name cannot contain '{DELIMITER}' or line breaks"
            )));
        }

        let order = self.orders.create_order(customer_name)?;
        Ok(OrderBuilder::new(&mut self.inventory, &mut self.orders, order))
    }

    pub fn orders(&self) -> &[Order] {
        self.orders.orders()
    }

    pub fn order_book(&self) -> &OrderBook {
        &self.orders
    }

    /// Write the catalog, then the orders, to their configured files.
    pub fn save_all(&self) -> DomainResult<()> {
        self.inventory.save_to_file(&self.config.products_path)?;
        self.orders.save_all(&self.config.orders_path)?;
        tracing::info!(
            products = self.inventory.len(),
            orders = self.orders.len(),
            "session saved"
        );
        Ok(())
    }

    /// Load the catalog, then the orders, re-linking order items to the freshly
    /// loaded products.
    pub fn load_all(&mut self) -> DomainResult<LoadSummary> {
        let products = self.inventory.load_from_file(&self.config.products_path)?;
        let orders = self
            .orders
            .load_all(&self.config.orders_path, &self.inventory)?;
        tracing::info!(
            products = self.inventory.len(),
            orders = self.orders.len(),
            "session loaded"
        );
        Ok(LoadSummary { products, orders })
    }

    pub fn report(&self) -> StatisticsSnapshot {
        snapshot(&self.inventory)
    }

    fn product_mut(&mut self, id: &str) -> DomainResult<&mut Product> {
        self.inventory
            .find_mut(id)
            .ok_or_else(|| DomainError::not_found(id))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
