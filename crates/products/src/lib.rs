//! Products domain module.
//!
//! The catalog entity with its three variants, the stock/price invariants, and the
//! flat line encoding used to persist it. Pure domain logic (no IO).

pub mod codec;
pub mod product;

pub use product::{
    Accessory, Clothing, Product, ProductDetails, ProductKind, Stationery, StockItem,
};
