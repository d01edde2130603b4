//! The full in-memory record set the desk operates on.

use oildesk_core::{Entity, SalesOrderId, ShipmentId};
use oildesk_inventory::StockBook;
use oildesk_purchasing::Shipment;
use oildesk_sales::SalesOrder;

/// Everything the desk owns: purchase ledger, sales ledger, stock book.
///
/// The stock book is the single source of truth for quantities; shipments
/// and orders reference grades and quantities but never duplicate stock
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct DeskState {
    pub shipments: Vec<Shipment>,
    pub orders: Vec<SalesOrder>,
    pub stock: StockBook,
}

impl DeskState {
    pub fn empty() -> Self {
        Self {
            shipments: Vec::new(),
            orders: Vec::new(),
            stock: StockBook::new(),
        }
    }

    pub fn shipment_mut(&mut self, id: ShipmentId) -> Option<&mut Shipment> {
        self.shipments.iter_mut().find(|s| *s.id() == id)
    }

    pub fn order_mut(&mut self, id: SalesOrderId) -> Option<&mut SalesOrder> {
        self.orders.iter_mut().find(|o| *o.id() == id)
    }
}

impl Default for DeskState {
    fn default() -> Self {
        Self::empty()
    }
}
