//! `oildesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by every ledger
//! module (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod grade;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use grade::{Grade, Pool};
pub use id::{SalesOrderId, ShipmentId};
