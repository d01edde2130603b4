//! Purchase ledger: crude oil shipments and their arrival lifecycle.

pub mod shipment;

pub use shipment::{CrudeArrival, Shipment, ShipmentStatus};
