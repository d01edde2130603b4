//! In-memory store for tests and ephemeral runs.

use std::sync::Mutex;

use crate::{DeskState, DeskStore, StoreError};

/// Keeps the record set in a mutex; load clones, persist replaces.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<DeskState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with pre-existing state (e.g. opening balances).
    pub fn with_state(state: DeskState) -> Self {
        Self {
            inner: Mutex::new(state),
        }
    }
}

impl DeskStore for MemoryStore {
    fn load(&self) -> Result<DeskState, StoreError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| StoreError::Corrupt("store lock poisoned".to_string()))?;
        Ok(inner.clone())
    }

    fn persist(&self, state: &DeskState) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| StoreError::Corrupt("store lock poisoned".to_string()))?;
        *inner = state.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oildesk_core::{Grade, Pool};

    #[test]
    fn persist_then_load_round_trips() {
        let store = MemoryStore::new();
        let mut state = DeskState::empty();
        state.stock.credit(Grade::Palm, Pool::Crude, 12.0).unwrap();

        store.persist(&state).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn fresh_store_loads_empty_state() {
        let loaded = MemoryStore::new().load().unwrap();
        assert_eq!(loaded, DeskState::empty());
    }
}
