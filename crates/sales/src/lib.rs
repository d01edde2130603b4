//! Sales ledger: orders booked against refined stock.

pub mod order;

pub use order::{OrderStatus, SalesOrder, StockDecision};
