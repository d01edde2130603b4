//! Sales order entity and its status state machine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use oildesk_core::{DomainError, DomainResult, Entity, Grade, SalesOrderId};
use oildesk_pricing::Quote;

/// Order lifecycle.
///
/// Under Process is the backlog state: the order was accepted without
/// sufficient refined stock and no deduction was made. Dispatched and
/// Fulfilled are informational; they carry no ledger side effects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Under Process")]
    UnderProcess,
    Confirmed,
    Dispatched,
    Fulfilled,
}

impl OrderStatus {
    fn rank(self) -> u8 {
        match self {
            OrderStatus::UnderProcess => 0,
            OrderStatus::Confirmed => 1,
            OrderStatus::Dispatched => 2,
            OrderStatus::Fulfilled => 3,
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OrderStatus::UnderProcess => f.write_str("Under Process"),
            OrderStatus::Confirmed => f.write_str("Confirmed"),
            OrderStatus::Dispatched => f.write_str("Dispatched"),
            OrderStatus::Fulfilled => f.write_str("Fulfilled"),
        }
    }
}

/// Stock availability at booking time, decided by the caller while holding
/// the inventory lock.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StockDecision {
    /// Refined stock covers the order; the caller debits it immediately.
    InStock,
    /// Not enough refined stock; the order is accepted as a backlog entry.
    Backlogged,
}

/// A booked sales order. The sale price is fixed at booking and never
/// re-quoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    id: SalesOrderId,
    vendor: String,
    destination: String,
    distance_km: f64,
    grade: Grade,
    quantity_mt: f64,
    sale_price: i64,
    price_per_litre: f64,
    order_date: NaiveDate,
    status: OrderStatus,
}

impl SalesOrder {
    /// Book a new order with the quote computed at this instant.
    ///
    /// Initial status follows the stock decision: Confirmed when stock was
    /// available (the caller debits it in the same critical section),
    /// Under Process otherwise.
    #[allow(clippy::too_many_arguments)]
    pub fn book(
        vendor: impl Into<String>,
        destination: impl Into<String>,
        distance_km: f64,
        grade: Grade,
        quantity_mt: f64,
        order_date: NaiveDate,
        quote: Quote,
        decision: StockDecision,
    ) -> DomainResult<Self> {
        let vendor = vendor.into();
        let destination = destination.into();
        if vendor.trim().is_empty() {
            return Err(DomainError::validation("vendor cannot be empty"));
        }
        if destination.trim().is_empty() {
            return Err(DomainError::validation("destination cannot be empty"));
        }
        if quantity_mt <= 0.0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if distance_km <= 0.0 {
            return Err(DomainError::validation("distance must be positive"));
        }

        Ok(Self {
            id: SalesOrderId::new(),
            vendor,
            destination,
            distance_km,
            grade,
            quantity_mt,
            sale_price: quote.total,
            price_per_litre: quote.per_litre,
            order_date,
            status: match decision {
                StockDecision::InStock => OrderStatus::Confirmed,
                StockDecision::Backlogged => OrderStatus::UnderProcess,
            },
        })
    }

    /// Move the order to a new status. Plain write, no ledger side effects.
    ///
    /// Legal moves run forward along Confirmed -> Dispatched -> Fulfilled.
    /// Backlogged (Under Process) orders never advance through this path;
    /// stock was never deducted for them, so they must be re-booked once
    /// refined stock exists.
    pub fn update_status(&mut self, new_status: OrderStatus) -> DomainResult<()> {
        if new_status == self.status {
            return Ok(());
        }
        if self.status == OrderStatus::UnderProcess {
            return Err(DomainError::conflict(format!(
                "order {} is backlogged; re-book it once refined stock is available",
                self.id
            )));
        }
        if new_status.rank() < self.status.rank() {
            return Err(DomainError::conflict(format!(
                "order {} cannot move backward from {} to {}",
                self.id, self.status, new_status
            )));
        }
        self.status = new_status;
        Ok(())
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn quantity_mt(&self) -> f64 {
        self.quantity_mt
    }

    /// Total sale price fixed at booking, in whole currency units.
    pub fn sale_price(&self) -> i64 {
        self.sale_price
    }

    pub fn price_per_litre(&self) -> f64 {
        self.price_per_litre
    }

    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Not yet dispatched: Under Process or Confirmed.
    pub fn is_pending(&self) -> bool {
        matches!(self.status, OrderStatus::UnderProcess | OrderStatus::Confirmed)
    }
}

impl Entity for SalesOrder {
    type Id = SalesOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 2).unwrap()
    }

    fn test_quote() -> Quote {
        Quote {
            total: 955_390,
            per_litre: 87.9,
        }
    }

    fn booked(decision: StockDecision) -> SalesOrder {
        SalesOrder::book(
            "National Retailers",
            "Mumbai Warehouse",
            100.0,
            Grade::CrudeDegummed,
            10.0,
            test_date(),
            test_quote(),
            decision,
        )
        .unwrap()
    }

    #[test]
    fn booking_fixes_price_and_status() {
        let order = booked(StockDecision::InStock);
        assert_eq!(order.status(), OrderStatus::Confirmed);
        assert_eq!(order.sale_price(), 955_390);
        assert_eq!(order.price_per_litre(), 87.9);
        assert!(order.is_pending());

        let backlog = booked(StockDecision::Backlogged);
        assert_eq!(backlog.status(), OrderStatus::UnderProcess);
    }

    #[test]
    fn booking_validates_inputs() {
        let blank_vendor = SalesOrder::book(
            "",
            "Mumbai",
            100.0,
            Grade::Palm,
            10.0,
            test_date(),
            test_quote(),
            StockDecision::InStock,
        );
        assert!(matches!(blank_vendor, Err(DomainError::Validation(_))));

        let no_distance = SalesOrder::book(
            "Vendor",
            "Mumbai",
            0.0,
            Grade::Palm,
            10.0,
            test_date(),
            test_quote(),
            StockDecision::InStock,
        );
        assert!(matches!(no_distance, Err(DomainError::Validation(_))));
    }

    #[test]
    fn confirmed_orders_advance_forward_only() {
        let mut order = booked(StockDecision::InStock);
        order.update_status(OrderStatus::Dispatched).unwrap();
        order.update_status(OrderStatus::Fulfilled).unwrap();
        assert!(!order.is_pending());

        let err = order.update_status(OrderStatus::Dispatched).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn same_status_write_is_a_no_op() {
        let mut order = booked(StockDecision::InStock);
        order.update_status(OrderStatus::Confirmed).unwrap();
        assert_eq!(order.status(), OrderStatus::Confirmed);
    }

    #[test]
    fn backlogged_orders_cannot_be_advanced_in_place() {
        let mut order = booked(StockDecision::Backlogged);
        let err = order.update_status(OrderStatus::Confirmed).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(order.status(), OrderStatus::UnderProcess);
    }
}
