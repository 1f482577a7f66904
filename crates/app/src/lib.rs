//! Session facade used by interactive front-ends.
//!
//! Owns one inventory and one order book, knows where they are persisted, and
//! exposes the catalog, ordering, persistence and reporting operations a menu
//! or prompt loop needs. Errors are returned as-is for the front-end to report.

pub mod builder;
pub mod config;
pub mod session;

pub use builder::OrderBuilder;
pub use config::{ConfigError, SessionConfig};
pub use session::{DiscountQuote, LoadSummary, NewProduct, Session};
