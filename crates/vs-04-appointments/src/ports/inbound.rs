//! # Inbound Port - AppointmentsApi
//!
//! Primary driving port exposing the appointment book.

use crate::error::AppointmentResult;
use chrono::NaiveDate;
use shared_types::{Appointment, AppointmentId};

/// Primary API for the Appointment Ledger subsystem.
pub trait AppointmentsApi: Send + Sync {
    /// Creates a record with a fresh ledger-unique id and returns the id.
    ///
    /// # Errors
    /// - `IdSpaceExhausted`: no unused id found within the attempt budget
    fn create(
        &self,
        date: NaiveDate,
        patient: &str,
        caregiver: &str,
        vaccine: &str,
    ) -> AppointmentResult<AppointmentId>;

    /// Looks up a live appointment.
    fn get(&self, id: AppointmentId) -> AppointmentResult<Option<Appointment>>;

    /// Atomically deletes and returns the record, for the caller to reverse
    /// its effects.
    ///
    /// # Errors
    /// - `NotFound`: the id does not reference a live appointment (this is
    ///   what makes double-cancel idempotent)
    fn remove(&self, id: AppointmentId) -> AppointmentResult<Appointment>;

    /// Live appointments reserved by `patient`, ascending by id.
    fn for_patient(&self, patient: &str) -> AppointmentResult<Vec<Appointment>>;

    /// Live appointments claiming `caregiver`'s slots, ascending by id.
    fn for_caregiver(&self, caregiver: &str) -> AppointmentResult<Vec<Appointment>>;
}
