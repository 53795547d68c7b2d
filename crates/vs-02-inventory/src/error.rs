//! Inventory Ledger error types.

use thiserror::Error;

/// Inventory Ledger errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InventoryError {
    /// Restock amount must be a positive number of doses.
    #[error("Dose count must be positive")]
    InvalidCount,

    /// The ledger lock was poisoned by a panicking writer.
    #[error("Inventory ledger is unavailable: lock poisoned")]
    LockPoisoned,
}

/// Result type for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;
