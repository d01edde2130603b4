//! CSV-file store: three files in one data directory.
//!
//! Three record sets, one file each (purchases, sales, inventory). Missing
//! files bootstrap to the empty state, with the stock book holding every
//! (grade, pool) pair at zero.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use oildesk_inventory::{StockBook, StockLevel};
use oildesk_purchasing::Shipment;
use oildesk_sales::SalesOrder;

use crate::{DeskState, DeskStore, StoreError};

const PURCHASES_FILE: &str = "purchases.csv";
const SALES_FILE: &str = "sales.csv";
const INVENTORY_FILE: &str = "inventory.csv";

/// Stores the record set as `purchases.csv`, `sales.csv` and
/// `inventory.csv` under one directory.
#[derive(Debug, Clone)]
pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn read_rows<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&path)?;
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }
        Ok(rows)
    }

    fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), StoreError> {
        let mut writer = csv::Writer::from_path(path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl DeskStore for CsvStore {
    fn load(&self) -> Result<DeskState, StoreError> {
        let shipments: Vec<Shipment> = self.read_rows(PURCHASES_FILE)?;
        let orders: Vec<SalesOrder> = self.read_rows(SALES_FILE)?;
        let levels: Vec<StockLevel> = self.read_rows(INVENTORY_FILE)?;

        let stock = StockBook::from_levels(levels)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        tracing::info!(
            shipments = shipments.len(),
            orders = orders.len(),
            dir = %self.dir.display(),
            "loaded desk state"
        );

        Ok(DeskState {
            shipments,
            orders,
            stock,
        })
    }

    fn persist(&self, state: &DeskState) -> Result<(), StoreError> {
        Self::write_rows(&self.dir.join(PURCHASES_FILE), &state.shipments)?;
        Self::write_rows(&self.dir.join(SALES_FILE), &state.orders)?;
        let levels: Vec<StockLevel> = state.stock.snapshot().levels().to_vec();
        Self::write_rows(&self.dir.join(INVENTORY_FILE), &levels)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use oildesk_core::{Grade, Pool};
    use oildesk_pricing::Quote;
    use oildesk_sales::StockDecision;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 20).unwrap()
    }

    fn sample_state() -> DeskState {
        let mut state = DeskState::empty();
        state.shipments.push(
            Shipment::log(Grade::Palm, 30.0, 76000.0, "Global Oil Traders", test_date()).unwrap(),
        );
        state.orders.push(
            SalesOrder::book(
                "National Retailers",
                "Mumbai Warehouse",
                120.0,
                Grade::CrudeDegummed,
                8.0,
                test_date(),
                Quote {
                    total: 764_312,
                    per_litre: 87.9,
                },
                StockDecision::Backlogged,
            )
            .unwrap(),
        );
        state.stock.credit(Grade::Palm, Pool::Crude, 30.0).unwrap();
        state
            .stock
            .credit(Grade::CrudeSunflower, Pool::Refined, 4.5)
            .unwrap();
        state
    }

    #[test]
    fn missing_files_bootstrap_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::open(dir.path()).unwrap();
        let state = store.load().unwrap();
        assert_eq!(state, DeskState::empty());
        assert_eq!(
            state.stock.snapshot().levels().len(),
            Grade::ALL.len() * 2
        );
    }

    #[test]
    fn persist_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::open(dir.path()).unwrap();
        let state = sample_state();

        store.persist(&state).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn reopening_the_directory_sees_persisted_state() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = CsvStore::open(dir.path()).unwrap();
            store.persist(&sample_state()).unwrap();
        }
        let reopened = CsvStore::open(dir.path()).unwrap();
        let loaded = reopened.load().unwrap();
        assert_eq!(loaded.shipments.len(), 1);
        assert_eq!(loaded.orders.len(), 1);
        assert_eq!(loaded.stock.available(Grade::Palm, Pool::Crude), 30.0);
    }

    #[test]
    fn negative_stock_on_disk_is_a_corrupt_state_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::open(dir.path()).unwrap();
        CsvStore::write_rows(
            &dir.path().join(INVENTORY_FILE),
            &[StockLevel {
                grade: Grade::Palm,
                pool: Pool::Crude,
                quantity_mt: -2.0,
            }],
        )
        .unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }
}
