//! Outbound (Driven) ports for the Booking Engine.
//!
//! These traits define the engine's dependencies on the three ledgers and on
//! wall-clock time. Each method is a single short-lived atomic operation;
//! the runtime wires them to the ledger subsystems, and tests substitute
//! in-memory fakes.

use crate::error::BookingResult;
use chrono::NaiveDate;
use shared_types::{Appointment, AppointmentId, CaregiverId, VaccineStock};

/// Availability Index as seen by the engine.
pub trait SlotGateway: Send + Sync {
    /// Publishes `(date, caregiver)`.
    ///
    /// # Errors
    /// - `DuplicateSlot`: the caregiver already published this date
    fn publish(&self, date: NaiveDate, caregiver: &str) -> BookingResult<()>;

    /// Caregivers with a live slot on `date`, ascending by id.
    ///
    /// Re-querying reflects current state, so protocol retries observe
    /// concurrent claims.
    fn providers_for(&self, date: NaiveDate) -> BookingResult<Vec<CaregiverId>>;

    /// Atomic test-and-delete of `(date, caregiver)`.
    ///
    /// Returns whether this caller removed the slot; at most one concurrent
    /// claimant observes `true` for a given pair.
    fn claim(&self, date: NaiveDate, caregiver: &str) -> BookingResult<bool>;
}

/// Inventory Ledger as seen by the engine.
pub trait DoseGateway: Send + Sync {
    /// Adds doses, creating the counter on first restock of a new name.
    fn restock(&self, vaccine: &str, count: u64) -> BookingResult<u64>;

    /// Atomically decrements iff enough doses remain; `Ok(false)` leaves the
    /// counter untouched.
    fn try_consume(&self, vaccine: &str, units: u64) -> BookingResult<bool>;

    /// Atomically adds doses back (compensation and cancellation).
    fn restore(&self, vaccine: &str, units: u64) -> BookingResult<u64>;

    /// Name-ascending snapshot of every counter.
    fn stock_levels(&self) -> BookingResult<Vec<VaccineStock>>;
}

/// Appointment Ledger as seen by the engine.
pub trait AppointmentGateway: Send + Sync {
    /// Commits an appointment and returns its fresh unique id.
    fn create(
        &self,
        date: NaiveDate,
        patient: &str,
        caregiver: &str,
        vaccine: &str,
    ) -> BookingResult<AppointmentId>;

    /// Looks up a live appointment.
    fn get(&self, id: AppointmentId) -> BookingResult<Option<Appointment>>;

    /// Atomically deletes and returns the record; `Ok(None)` if no live
    /// appointment carries the id.
    fn remove(&self, id: AppointmentId) -> BookingResult<Option<Appointment>>;

    /// Live appointments reserved by `patient`, ascending by id.
    fn for_patient(&self, patient: &str) -> BookingResult<Vec<Appointment>>;

    /// Live appointments claiming `caregiver`'s slots, ascending by id.
    fn for_caregiver(&self, caregiver: &str) -> BookingResult<Vec<Appointment>>;
}

/// Calendar time source.
///
/// Abstracted so today-or-future validation can be tested with a pinned
/// date.
pub trait TimeSource: Send + Sync {
    /// The current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Default wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Pinned time source for testing.
#[cfg(test)]
pub struct FixedTimeSource(pub NaiveDate);

#[cfg(test)]
impl TimeSource for FixedTimeSource {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
