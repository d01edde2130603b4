//! Stock book: one non-negative quantity per (grade, pool) pair.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use oildesk_core::{DomainError, DomainResult, Grade, Pool};

/// One ledger row: current quantity for a (grade, pool) pair, in MT.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockLevel {
    pub grade: Grade,
    pub pool: Pool,
    pub quantity_mt: f64,
}

/// Read-only view of all current quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSnapshot {
    levels: Vec<StockLevel>,
}

impl StockSnapshot {
    pub fn levels(&self) -> &[StockLevel] {
        &self.levels
    }

    /// Quantity for one (grade, pool) pair.
    pub fn available(&self, grade: Grade, pool: Pool) -> f64 {
        self.levels
            .iter()
            .find(|l| l.grade == grade && l.pool == pool)
            .map(|l| l.quantity_mt)
            .unwrap_or(0.0)
    }

    /// Total quantity across all grades in one pool.
    pub fn pool_total(&self, pool: Pool) -> f64 {
        self.levels
            .iter()
            .filter(|l| l.pool == pool)
            .map(|l| l.quantity_mt)
            .sum()
    }

    /// Crude + Refined total for one grade.
    pub fn grade_total(&self, grade: Grade) -> f64 {
        self.levels
            .iter()
            .filter(|l| l.grade == grade)
            .map(|l| l.quantity_mt)
            .sum()
    }
}

/// Mutable stock ledger. Exactly one quantity per (grade, pool) pair exists
/// from construction; no operation can drive a quantity negative.
///
/// `StockBook` itself is not thread-safe; the desk serializes all mutations
/// behind one lock so check-then-debit sequences stay atomic.
#[derive(Debug, Clone, PartialEq)]
pub struct StockBook {
    levels: BTreeMap<(Grade, Pool), f64>,
}

impl StockBook {
    /// Empty book: every (grade, pool) pair present at zero.
    pub fn new() -> Self {
        let mut levels = BTreeMap::new();
        for grade in Grade::ALL {
            levels.insert((grade, Pool::Crude), 0.0);
            levels.insert((grade, Pool::Refined), 0.0);
        }
        Self { levels }
    }

    /// Rehydrate from persisted rows.
    ///
    /// Missing pairs default to zero; duplicate pairs are rejected. A
    /// negative quantity at rest is a data-integrity fault and is surfaced,
    /// never silently corrected.
    pub fn from_levels(rows: impl IntoIterator<Item = StockLevel>) -> DomainResult<Self> {
        let mut book = Self::new();
        let mut seen: Vec<(Grade, Pool)> = Vec::new();
        for row in rows {
            let key = (row.grade, row.pool);
            if seen.contains(&key) {
                return Err(DomainError::invariant(format!(
                    "duplicate stock row for {} / {}",
                    row.grade, row.pool
                )));
            }
            seen.push(key);
            book.levels.insert(key, row.quantity_mt);
        }
        book.audit()?;
        Ok(book)
    }

    /// Current quantity for a (grade, pool) pair.
    pub fn available(&self, grade: Grade, pool: Pool) -> f64 {
        self.levels.get(&(grade, pool)).copied().unwrap_or(0.0)
    }

    /// Add `amount` MT to a pool. Negative amounts are rejected.
    pub fn credit(&mut self, grade: Grade, pool: Pool, amount: f64) -> DomainResult<()> {
        if amount < 0.0 {
            return Err(DomainError::invalid_amount(format!(
                "cannot credit {amount} MT"
            )));
        }
        *self.levels.entry((grade, pool)).or_insert(0.0) += amount;
        Ok(())
    }

    /// Remove `amount` MT from a pool. Fails without mutating if the pool
    /// holds less than `amount` (no partial debit).
    pub fn debit(&mut self, grade: Grade, pool: Pool, amount: f64) -> DomainResult<()> {
        if amount < 0.0 {
            return Err(DomainError::invalid_amount(format!(
                "cannot debit {amount} MT"
            )));
        }
        let held = self.available(grade, pool);
        if amount > held {
            return Err(DomainError::insufficient_stock(format!(
                "{held:.2} MT of {grade} in {pool}, requested {amount:.2} MT"
            )));
        }
        self.levels.insert((grade, pool), held - amount);
        Ok(())
    }

    /// Convert `amount` MT of a grade from Crude to Refined, 1:1.
    ///
    /// All-or-nothing: if the crude debit would fail, nothing changes.
    /// Total mass per grade is conserved.
    pub fn refine(&mut self, grade: Grade, amount: f64) -> DomainResult<()> {
        self.debit(grade, Pool::Crude, amount)?;
        // Credit cannot fail once the debit accepted the amount.
        self.credit(grade, Pool::Refined, amount)
    }

    /// Read-only snapshot of all quantities, in key order.
    pub fn snapshot(&self) -> StockSnapshot {
        StockSnapshot {
            levels: self
                .levels
                .iter()
                .map(|(&(grade, pool), &quantity_mt)| StockLevel {
                    grade,
                    pool,
                    quantity_mt,
                })
                .collect(),
        }
    }

    /// At-rest integrity check: no quantity may be negative.
    pub fn audit(&self) -> DomainResult<()> {
        for (&(grade, pool), &qty) in &self.levels {
            if qty < 0.0 {
                return Err(DomainError::invariant(format!(
                    "negative stock at rest: {qty} MT of {grade} in {pool}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for StockBook {
    fn default() -> Self {
        Self::new()
    }
}
