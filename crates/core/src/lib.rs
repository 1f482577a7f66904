//! Shared building blocks for the catalog, order and reporting crates.
//!
//! This crate contains **pure domain** primitives (no file or console concerns).

pub mod error;
pub mod id;
pub mod line;
pub mod traits;

pub use error::{DomainError, DomainResult, FileOperation};
pub use id::{OrderId, ProductId};
pub use line::{DELIMITER, LineRecord, is_encodable, parse_field, split_fields};
pub use traits::{Entity, ValueObject};
