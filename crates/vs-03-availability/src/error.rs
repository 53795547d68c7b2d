//! Availability Index error types.

use chrono::NaiveDate;
use shared_types::CaregiverId;
use thiserror::Error;

/// Availability Index errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AvailabilityError {
    /// The caregiver already published a slot for this date.
    #[error("Caregiver {caregiver} already has availability on {date}")]
    SlotTaken {
        date: NaiveDate,
        caregiver: CaregiverId,
    },

    /// The slot board lock was poisoned by a panicking writer.
    #[error("Availability index is unavailable: lock poisoned")]
    LockPoisoned,
}

/// Result type for availability operations.
pub type AvailabilityResult<T> = Result<T, AvailabilityError>;
