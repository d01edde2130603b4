//! The desk service: pricing + ledgers behind one lock.

use std::sync::{Mutex, MutexGuard};

use chrono::{Datelike, NaiveDate, Utc};
use thiserror::Error;

use oildesk_core::{DomainError, Entity, Grade, Pool, SalesOrderId, ShipmentId};
use oildesk_inventory::StockSnapshot;
use oildesk_pricing::{PricePair, PricingEngine, Quote};
use oildesk_purchasing::{Shipment, ShipmentStatus};
use oildesk_sales::{OrderStatus, SalesOrder, StockDecision};
use oildesk_store::{DeskState, DeskStore, StoreError};

/// Desk-level error: domain failures plus persistence failures.
#[derive(Debug, Error)]
pub enum DeskError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("desk state lock poisoned")]
    LockPoisoned,
}

/// Input for logging a purchase.
#[derive(Debug, Clone)]
pub struct NewShipment {
    pub grade: Grade,
    pub quantity_mt: f64,
    pub price_per_mt: f64,
    pub supplier: String,
    pub purchase_date: NaiveDate,
}

/// Input for booking a sales order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub vendor: String,
    pub destination: String,
    pub distance_km: f64,
    pub grade: Grade,
    pub quantity_mt: f64,
    pub order_date: NaiveDate,
}

/// Operational overview for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overview {
    /// Total crude stock across all grades, MT.
    pub crude_stock_mt: f64,
    /// Total refined (sellable) stock across all grades, MT.
    pub refined_stock_mt: f64,
    /// Shipments not yet arrived at the factory.
    pub active_shipments: usize,
    /// Orders still Under Process or Confirmed.
    pub pending_orders: usize,
}

/// The trading desk: owns the mutable record set, serializes every
/// mutation behind one lock, and persists after each one.
///
/// Check-then-act sequences (the booking availability check and debit, the
/// arrival credit) execute inside the same critical section as the state
/// read, so concurrent callers cannot double-spend stock or double-credit
/// an arrival.
pub struct Desk<S: DeskStore> {
    store: S,
    pricing: PricingEngine,
    state: Mutex<DeskState>,
}

impl<S: DeskStore> Desk<S> {
    /// Open the desk from the store's durable record set.
    ///
    /// A negative quantity at rest is a data-integrity fault: it is
    /// surfaced as an error, never silently corrected.
    pub fn open(store: S, pricing: PricingEngine) -> Result<Self, DeskError> {
        let state = store.load()?;
        state.stock.audit()?;
        Ok(Self {
            store,
            pricing,
            state: Mutex::new(state),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, DeskState>, DeskError> {
        self.state.lock().map_err(|_| DeskError::LockPoisoned)
    }

    fn today() -> u32 {
        Utc::now().ordinal()
    }

    /// Today's market price board: current and previous-day price per grade.
    pub fn market_prices(&self) -> Vec<(Grade, PricePair)> {
        self.pricing.board(Self::today())
    }

    /// Quote a hypothetical sale at today's market rate. Pure read; the
    /// quote is not persisted.
    pub fn quote(&self, grade: Grade, quantity_mt: f64, distance_km: f64) -> Quote {
        self.pricing.quote(grade, quantity_mt, distance_km, Self::today())
    }

    /// Log a new crude purchase. The shipment starts In Transit; stock is
    /// not touched until it arrives.
    pub fn log_purchase(&self, input: NewShipment) -> Result<Shipment, DeskError> {
        let mut state = self.lock()?;
        let shipment = Shipment::log(
            input.grade,
            input.quantity_mt,
            input.price_per_mt,
            input.supplier,
            input.purchase_date,
        )?;
        state.shipments.push(shipment.clone());
        self.store.persist(&state)?;

        tracing::info!(
            shipment = %shipment.id(),
            grade = %shipment.grade(),
            quantity_mt = shipment.quantity_mt(),
            supplier = shipment.supplier(),
            "purchase logged"
        );
        Ok(shipment)
    }

    /// Advance a shipment's status. First arrival at the factory credits
    /// the grade's crude pool, exactly once, inside this critical section.
    pub fn update_shipment_status(
        &self,
        id: ShipmentId,
        new_status: ShipmentStatus,
    ) -> Result<Shipment, DeskError> {
        let mut state = self.lock()?;
        let shipment = state
            .shipment_mut(id)
            .ok_or(DomainError::NotFound)?;
        let arrival = shipment.update_status(new_status)?;
        let updated = shipment.clone();

        if let Some(arrival) = arrival {
            state
                .stock
                .credit(arrival.grade, Pool::Crude, arrival.quantity_mt)?;
            tracing::info!(
                shipment = %id,
                grade = %arrival.grade,
                quantity_mt = arrival.quantity_mt,
                "shipment arrived, crude stock credited"
            );
        }

        self.store.persist(&state)?;
        Ok(updated)
    }

    /// Book a sales order at today's quote.
    ///
    /// If refined stock covers the quantity the order is Confirmed and the
    /// stock is debited immediately; otherwise it is accepted as an
    /// Under Process backlog entry with no deduction. The availability
    /// check and the debit share this lock, so two bookings cannot both
    /// spend the same stock.
    pub fn book_order(&self, input: NewOrder) -> Result<SalesOrder, DeskError> {
        let mut state = self.lock()?;

        let quote = self
            .pricing
            .quote(input.grade, input.quantity_mt, input.distance_km, Self::today());
        let available = state.stock.available(input.grade, Pool::Refined);
        let decision = if input.quantity_mt <= available {
            StockDecision::InStock
        } else {
            StockDecision::Backlogged
        };

        let order = SalesOrder::book(
            input.vendor,
            input.destination,
            input.distance_km,
            input.grade,
            input.quantity_mt,
            input.order_date,
            quote,
            decision,
        )?;

        if decision == StockDecision::InStock {
            // Cannot fail: the availability check ran under this same lock.
            state
                .stock
                .debit(input.grade, Pool::Refined, input.quantity_mt)?;
        } else {
            tracing::warn!(
                order = %order.id(),
                grade = %input.grade,
                requested_mt = input.quantity_mt,
                available_mt = available,
                "insufficient refined stock, order backlogged"
            );
        }

        state.orders.push(order.clone());
        self.store.persist(&state)?;

        tracing::info!(
            order = %order.id(),
            status = %order.status(),
            sale_price = order.sale_price(),
            "sales order booked"
        );
        Ok(order)
    }

    /// Move a sales order along its lifecycle. Purely informational; no
    /// stock movement for any status.
    pub fn update_order_status(
        &self,
        id: SalesOrderId,
        new_status: OrderStatus,
    ) -> Result<SalesOrder, DeskError> {
        let mut state = self.lock()?;
        let order = state.order_mut(id).ok_or(DomainError::NotFound)?;
        order.update_status(new_status)?;
        let updated = order.clone();
        self.store.persist(&state)?;
        Ok(updated)
    }

    /// Refine crude stock into refined stock, 1:1 by mass. All-or-nothing.
    pub fn refine(&self, grade: Grade, quantity_mt: f64) -> Result<StockSnapshot, DeskError> {
        if quantity_mt <= 0.0 {
            return Err(DomainError::validation("refine quantity must be positive").into());
        }
        let mut state = self.lock()?;
        state.stock.refine(grade, quantity_mt)?;
        self.store.persist(&state)?;

        tracing::info!(grade = %grade, quantity_mt, "refining batch complete");
        Ok(state.stock.snapshot())
    }

    /// Read-only snapshot of all stock quantities.
    pub fn stock(&self) -> Result<StockSnapshot, DeskError> {
        Ok(self.lock()?.stock.snapshot())
    }

    /// All logged shipments, oldest first.
    pub fn shipments(&self) -> Result<Vec<Shipment>, DeskError> {
        Ok(self.lock()?.shipments.clone())
    }

    /// All booked orders, oldest first.
    pub fn orders(&self) -> Result<Vec<SalesOrder>, DeskError> {
        Ok(self.lock()?.orders.clone())
    }

    /// Dashboard overview: stock totals and open record counts.
    pub fn overview(&self) -> Result<Overview, DeskError> {
        let state = self.lock()?;
        let snapshot = state.stock.snapshot();
        Ok(Overview {
            crude_stock_mt: snapshot.pool_total(Pool::Crude),
            refined_stock_mt: snapshot.pool_total(Pool::Refined),
            active_shipments: state.shipments.iter().filter(|s| s.is_active()).count(),
            pending_orders: state.orders.iter().filter(|o| o.is_pending()).count(),
        })
    }
}
