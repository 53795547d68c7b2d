//! Appointment Ledger error types.

use shared_types::AppointmentId;
use thiserror::Error;

/// Appointment Ledger errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppointmentError {
    /// No live appointment carries this id.
    #[error("Appointment {id} not found")]
    NotFound { id: AppointmentId },

    /// Could not draw an unused id within the attempt budget.
    #[error("Could not allocate a unique appointment id")]
    IdSpaceExhausted,

    /// The ledger lock was poisoned by a panicking writer.
    #[error("Appointment ledger is unavailable: lock poisoned")]
    LockPoisoned,
}

/// Result type for appointment ledger operations.
pub type AppointmentResult<T> = Result<T, AppointmentError>;
