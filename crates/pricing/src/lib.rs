//! Market price feed and sale price quotation.
//!
//! The oracle is a pure function of a day-of-year counter and is the one
//! pluggable seam: swapping in a live feed changes nothing downstream.

pub mod oracle;
pub mod quote;

pub use oracle::{PriceOracle, PricePair, SimulatedFeed};
pub use quote::{PricingEngine, Quote, Tariff};
