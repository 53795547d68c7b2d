//! Dose gateway adapter over the Inventory Ledger.

use shared_types::VaccineStock;
use std::sync::Arc;
use vs_02_inventory::{InventoryApi, InventoryError, InventoryService};
use vs_05_booking::{BookingError, BookingResult, DoseGateway};

/// Bridges [`DoseGateway`] to the Inventory Ledger service.
pub struct DoseGatewayAdapter {
    inner: Arc<InventoryService>,
}

impl DoseGatewayAdapter {
    pub fn new(inner: Arc<InventoryService>) -> Self {
        Self { inner }
    }
}

fn map_err(err: InventoryError) -> BookingError {
    match err {
        InventoryError::InvalidCount => BookingError::InvalidDoseCount,
        other => BookingError::Storage(other.to_string()),
    }
}

impl DoseGateway for DoseGatewayAdapter {
    fn restock(&self, vaccine: &str, count: u64) -> BookingResult<u64> {
        self.inner.restock(vaccine, count).map_err(map_err)
    }

    fn try_consume(&self, vaccine: &str, units: u64) -> BookingResult<bool> {
        self.inner.try_consume(vaccine, units).map_err(map_err)
    }

    fn restore(&self, vaccine: &str, units: u64) -> BookingResult<u64> {
        self.inner.restore(vaccine, units).map_err(map_err)
    }

    fn stock_levels(&self) -> BookingResult<Vec<VaccineStock>> {
        self.inner.stock_levels().map_err(map_err)
    }
}
