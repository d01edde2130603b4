//! Trading desk facade: the call interface the UI layer consumes.
//!
//! All inputs are plain scalars and strings; all outputs are plain records.
//! Every mutating operation runs as one critical section over the full desk
//! state and persists the updated record set through the injected store.

pub mod desk;

pub use desk::{Desk, DeskError, NewOrder, NewShipment, Overview};
