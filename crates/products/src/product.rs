//! The catalog product and its variants.

use serde::{Deserialize, Serialize};

use ishop_core::{DomainError, DomainResult, Entity, ProductId};

/// Product variant discriminant; doubles as the category name and the line tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProductKind {
    Clothing,
    Stationery,
    Accessory,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Clothing => "Clothing",
            ProductKind::Stationery => "Stationery",
            ProductKind::Accessory => "Accessory",
        }
    }

    /// Resolve a persisted type tag. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Clothing" => Some(ProductKind::Clothing),
            "Stationery" => Some(ProductKind::Stationery),
            "Accessory" => Some(ProductKind::Accessory),
            _ => None,
        }
    }
}

impl core::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clothing {
    pub size: String,
    pub color: String,
    pub material: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stationery {
    pub brand: String,
    pub item_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessory {
    pub is_electronic: bool,
    pub accessory_type: String,
}

/// Variant-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductDetails {
    Clothing(Clothing),
    Stationery(Stationery),
    Accessory(Accessory),
}

impl ProductDetails {
    pub fn kind(&self) -> ProductKind {
        match self {
            ProductDetails::Clothing(_) => ProductKind::Clothing,
            ProductDetails::Stationery(_) => ProductKind::Stationery,
            ProductDetails::Accessory(_) => ProductKind::Accessory,
        }
    }
}

/// Anything the inventory container can hold and aggregate over.
pub trait StockItem: Entity<Id = ProductId> {
    fn name(&self) -> &str;

    fn category(&self) -> &str;

    fn price(&self) -> f64;

    fn stock(&self) -> i64;

    /// Apply a signed stock delta, refusing to go below zero.
    fn update_stock(&mut self, delta: i64) -> DomainResult<()>;
}

/// Catalog entity.
///
/// Invariants: `price >= 0` and `stock >= 0` hold after every successful call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    stock: i64,
    details: ProductDetails,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        stock: i64,
        details: ProductDetails,
    ) -> DomainResult<Self> {
        let price = validate_price(price)?;
        if stock < 0 {
            return Err(DomainError::invalid_argument(format!(
                "initial stock cannot be negative: {stock}"
            )));
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
            details,
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ProductKind {
        self.details.kind()
    }

    /// Category is fixed per variant.
    pub fn category(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn details(&self) -> &ProductDetails {
        &self.details
    }

    /// Price after a percentage discount.
    ///
    /// Non-electronic accessories get five extra points of discount; the range
    /// check applies to the adjusted value, so 96% on such an item is rejected.
    pub fn calculate_discounted_price(&self, discount_percent: f64) -> DomainResult<f64> {
        let effective = match &self.details {
            ProductDetails::Accessory(a) if !a.is_electronic => discount_percent + 5.0,
            _ => discount_percent,
        };
        apply_discount(self.price, effective)
    }

    pub fn set_price(&mut self, new_price: f64) -> DomainResult<()> {
        self.price = validate_price(new_price)?;
        Ok(())
    }

    /// Add `delta` to the stock level. Fails without mutating if the result would be negative.
    pub fn update_stock(&mut self, delta: i64) -> DomainResult<()> {
        match self.stock.checked_add(delta) {
            Some(new_stock) if new_stock >= 0 => {
                self.stock = new_stock;
                Ok(())
            }
            _ => Err(DomainError::insufficient_stock(
                self.name.clone(),
                delta.saturating_neg(),
                self.stock,
            )),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl StockItem for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        self.kind().as_str()
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn stock(&self) -> i64 {
        self.stock
    }

    fn update_stock(&mut self, delta: i64) -> DomainResult<()> {
        Product::update_stock(self, delta)
    }
}

fn validate_price(price: f64) -> DomainResult<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::InvalidPrice(price));
    }
    Ok(price)
}

fn apply_discount(price: f64, discount_percent: f64) -> DomainResult<f64> {
    if !(0.0..=100.0).contains(&discount_percent) {
        return Err(DomainError::InvalidDiscount(discount_percent));
    }
    Ok(price * (1.0 - discount_percent / 100.0))
}
