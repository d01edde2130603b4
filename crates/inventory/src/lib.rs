//! Inventory ledger: the single source of truth for stock quantities.
//!
//! Pure domain logic, no IO. Serialization of ledger state (load full
//! state, persist full state) lives in the store crate.

pub mod stock;

pub use stock::{StockBook, StockLevel, StockSnapshot};
