//! Booking Engine error types.
//!
//! Every failure here leaves the ledger invariants intact: validation and
//! authorization errors are raised before any ledger is touched, and the
//! protocol compensates any partially-acquired resources before surfacing
//! the rest.

use chrono::NaiveDate;
use shared_types::{AppointmentId, ParticipantKind, VaccineName};
use thiserror::Error;

/// Booking Engine errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingError {
    /// The requested date is before today.
    #[error("Date {date} is in the past (today is {today})")]
    PastDate { date: NaiveDate, today: NaiveDate },

    /// The vaccine name is empty.
    #[error("Vaccine name must not be empty")]
    EmptyVaccineName,

    /// The dose count is not a positive number.
    #[error("Dose count must be a positive number")]
    InvalidDoseCount,

    /// No participant is logged in.
    #[error("Please log in first")]
    AuthRequired,

    /// A participant of the other kind is logged in.
    #[error("This operation requires a {required} login")]
    WrongRole { required: ParticipantKind },

    /// The caregiver already published availability for this date.
    #[error("Availability already published for {date}")]
    DuplicateSlot { date: NaiveDate },

    /// No caregiver has a live slot on the requested date.
    #[error("No caregivers are available on {date}")]
    NoAvailability { date: NaiveDate },

    /// The vaccine counter cannot cover the reservation.
    #[error("Not enough available doses of {vaccine}")]
    InsufficientDoses { vaccine: VaccineName },

    /// Concurrent claims exhausted the retry budget.
    #[error("Reservation abandoned after {attempts} contended attempts")]
    Contention { attempts: u32 },

    /// No live appointment carries this id, or the caller is not a
    /// participant on it.
    #[error("Appointment {appointment_id} not found")]
    NotFound { appointment_id: AppointmentId },

    /// A backing store failed; the operation was aborted without partial
    /// effect. The only kind that carries operator diagnostics.
    #[error("Storage failure: {0}")]
    Storage(String),
}

/// Result type for booking operations.
pub type BookingResult<T> = Result<T, BookingError>;
