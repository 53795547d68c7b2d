//! Inventory Ledger service.

use crate::domain::DoseLedger;
use crate::error::{InventoryError, InventoryResult};
use crate::ports::InventoryApi;
use shared_types::VaccineStock;
use std::sync::RwLock;
use tracing::{debug, info};

/// Thread-safe dose counter table.
///
/// Wraps [`DoseLedger`] in a `RwLock`; each API call holds the lock for one
/// check-and-mutate step only. A poisoned lock is reported as
/// [`InventoryError::LockPoisoned`] rather than propagating the panic.
#[derive(Debug, Default)]
pub struct InventoryService {
    ledger: RwLock<DoseLedger>,
}

impl InventoryService {
    /// Creates a service with an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current dose count for `name`.
    pub fn doses(&self, name: &str) -> InventoryResult<u64> {
        let ledger = self
            .ledger
            .read()
            .map_err(|_| InventoryError::LockPoisoned)?;
        Ok(ledger.doses(name))
    }
}

impl InventoryApi for InventoryService {
    fn restock(&self, name: &str, count: u64) -> InventoryResult<u64> {
        if count == 0 {
            return Err(InventoryError::InvalidCount);
        }
        let mut ledger = self
            .ledger
            .write()
            .map_err(|_| InventoryError::LockPoisoned)?;
        let total = ledger.add(name, count);
        info!(vaccine = %name, added = count, total, "restocked doses");
        Ok(total)
    }

    fn try_consume(&self, name: &str, units: u64) -> InventoryResult<bool> {
        let mut ledger = self
            .ledger
            .write()
            .map_err(|_| InventoryError::LockPoisoned)?;
        let consumed = ledger.try_consume(name, units);
        debug!(vaccine = %name, units, consumed, "conditional dose decrement");
        Ok(consumed)
    }

    fn restore(&self, name: &str, units: u64) -> InventoryResult<u64> {
        let mut ledger = self
            .ledger
            .write()
            .map_err(|_| InventoryError::LockPoisoned)?;
        let total = ledger.add(name, units);
        debug!(vaccine = %name, units, total, "restored doses");
        Ok(total)
    }

    fn stock_levels(&self) -> InventoryResult<Vec<VaccineStock>> {
        let ledger = self
            .ledger
            .read()
            .map_err(|_| InventoryError::LockPoisoned)?;
        Ok(ledger.stock_levels())
    }
}
