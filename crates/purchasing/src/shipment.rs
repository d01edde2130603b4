//! Shipment entity and its status state machine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use oildesk_core::{DomainError, DomainResult, Entity, Grade, ShipmentId};

/// Shipment lifecycle. Transitions only move forward; arriving at the
/// factory is the point where crude stock is credited.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentStatus {
    #[serde(rename = "In Transit")]
    InTransit,
    #[serde(rename = "At Port")]
    AtPort,
    #[serde(rename = "Arrived At Factory")]
    ArrivedAtFactory,
}

impl ShipmentStatus {
    fn rank(self) -> u8 {
        match self {
            ShipmentStatus::InTransit => 0,
            ShipmentStatus::AtPort => 1,
            ShipmentStatus::ArrivedAtFactory => 2,
        }
    }
}

impl core::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShipmentStatus::InTransit => f.write_str("In Transit"),
            ShipmentStatus::AtPort => f.write_str("At Port"),
            ShipmentStatus::ArrivedAtFactory => f.write_str("Arrived At Factory"),
        }
    }
}

/// One-time effect of a shipment reaching the factory: the quantity the
/// inventory ledger must credit to the grade's crude pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrudeArrival {
    pub grade: Grade,
    pub quantity_mt: f64,
}

/// A logged crude oil purchase, tracked until it reaches the factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    id: ShipmentId,
    grade: Grade,
    quantity_mt: f64,
    price_per_mt: f64,
    total_cost: f64,
    purchase_date: NaiveDate,
    supplier: String,
    status: ShipmentStatus,
}

impl Shipment {
    /// Log a new purchase. Starts In Transit.
    pub fn log(
        grade: Grade,
        quantity_mt: f64,
        price_per_mt: f64,
        supplier: impl Into<String>,
        purchase_date: NaiveDate,
    ) -> DomainResult<Self> {
        let supplier = supplier.into();
        if supplier.trim().is_empty() {
            return Err(DomainError::validation("supplier cannot be empty"));
        }
        if quantity_mt <= 0.0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if price_per_mt < 0.0 {
            return Err(DomainError::validation("price per MT cannot be negative"));
        }

        Ok(Self {
            id: ShipmentId::new(),
            grade,
            quantity_mt,
            price_per_mt,
            total_cost: quantity_mt * price_per_mt,
            purchase_date,
            supplier,
            status: ShipmentStatus::InTransit,
        })
    }

    /// Move the shipment to a new status.
    ///
    /// Backward moves are rejected. Returns the crude credit to apply when
    /// the shipment first reaches the factory; re-setting Arrived At Factory
    /// is a no-op write and never yields a second credit.
    pub fn update_status(&mut self, new_status: ShipmentStatus) -> DomainResult<Option<CrudeArrival>> {
        if new_status.rank() < self.status.rank() {
            return Err(DomainError::conflict(format!(
                "shipment {} cannot move backward from {} to {}",
                self.id, self.status, new_status
            )));
        }

        let first_arrival = new_status == ShipmentStatus::ArrivedAtFactory
            && self.status != ShipmentStatus::ArrivedAtFactory;
        self.status = new_status;

        Ok(first_arrival.then_some(CrudeArrival {
            grade: self.grade,
            quantity_mt: self.quantity_mt,
        }))
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn quantity_mt(&self) -> f64 {
        self.quantity_mt
    }

    pub fn price_per_mt(&self) -> f64 {
        self.price_per_mt
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn status(&self) -> ShipmentStatus {
        self.status
    }

    /// Still on the water or at port, i.e. not yet credited to stock.
    pub fn is_active(&self) -> bool {
        self.status != ShipmentStatus::ArrivedAtFactory
    }
}

impl Entity for Shipment {
    type Id = ShipmentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
