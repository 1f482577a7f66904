//! Sales orders domain module.
//!
//! Customer orders with stock reservation against live inventory entries, the
//! order id sequence, and the order book with its flat-file persistence.

pub mod book;
pub mod codec;
pub mod order;

pub use book::OrderBook;
pub use order::{Order, OrderItem, OrderSequence};
