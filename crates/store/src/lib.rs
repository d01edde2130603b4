//! Persistence seam for the trading desk.
//!
//! The contract is "load full state, mutate in memory, persist full state":
//! three record sets (shipments, orders, stock levels) round-trip through
//! whichever backing the store provides. The desk depends only on the
//! [`DeskStore`] trait, so tests run against [`MemoryStore`] with no IO.

pub mod csv_store;
pub mod memory;
pub mod state;

use thiserror::Error;

pub use csv_store::CsvStore;
pub use memory::MemoryStore;
pub use state::DeskState;

/// Store-level error: infrastructure failures plus corrupt durable state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv failure: {0}")]
    Csv(#[from] csv::Error),

    /// The durable record set violates a domain invariant (e.g. negative
    /// stock at rest). Surfaced to the caller, never silently repaired.
    #[error("corrupt state: {0}")]
    Corrupt(String),
}

/// Loads and persists the full desk record set.
pub trait DeskStore: Send + Sync {
    /// Load the durable record set, or the empty state if none exists yet.
    fn load(&self) -> Result<DeskState, StoreError>;

    /// Persist the full record set after a mutation.
    fn persist(&self, state: &DeskState) -> Result<(), StoreError>;
}
