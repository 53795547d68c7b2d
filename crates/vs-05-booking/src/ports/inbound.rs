//! # Inbound Port - BookingApi
//!
//! Primary driving port exposing the booking engine to the command surface.
//!
//! Every method takes the caller's session explicitly (`None` when nobody is
//! logged in); authentication and role preconditions are checked here in the
//! engine, before any ledger is touched.

use crate::domain::{Reservation, ScheduleView};
use crate::error::BookingResult;
use chrono::NaiveDate;
use shared_types::{Appointment, AppointmentId, Session};

/// Primary API for the Booking Engine subsystem.
pub trait BookingApi: Send + Sync {
    /// Reserves one slot and one dose on `date` for the logged-in patient.
    ///
    /// # Errors
    /// - `AuthRequired` / `WrongRole`: caller is not a logged-in patient
    /// - `PastDate` / `EmptyVaccineName`: request rejected before any ledger
    ///   is touched
    /// - `NoAvailability`: no caregiver has a live slot on the date
    /// - `InsufficientDoses`: the vaccine counter cannot cover one dose
    /// - `Contention`: concurrent claims exhausted the retry budget
    fn reserve(
        &self,
        session: Option<&Session>,
        date: NaiveDate,
        vaccine: &str,
    ) -> BookingResult<Reservation>;

    /// Cancels an appointment the caller participates in, restoring the dose
    /// and re-publishing the slot.
    ///
    /// Returns the cancelled record.
    ///
    /// # Errors
    /// - `NotFound`: unknown id, already cancelled, or the caller is not the
    ///   referenced patient or caregiver
    fn cancel(
        &self,
        session: Option<&Session>,
        appointment_id: AppointmentId,
    ) -> BookingResult<Appointment>;

    /// Publishes the logged-in caregiver's availability for `date`.
    ///
    /// # Errors
    /// - `DuplicateSlot`: this caregiver already published the date
    fn upload_availability(&self, session: Option<&Session>, date: NaiveDate)
        -> BookingResult<()>;

    /// Adds doses to a vaccine counter, creating it on first restock.
    ///
    /// Returns the new total.
    fn add_doses(
        &self,
        session: Option<&Session>,
        vaccine: &str,
        count: u64,
    ) -> BookingResult<u64>;

    /// Availability and stock view for `date`, for any logged-in
    /// participant.
    fn schedule_for(&self, session: Option<&Session>, date: NaiveDate)
        -> BookingResult<ScheduleView>;

    /// The caller's own appointments, ascending by id.
    fn appointments_for(&self, session: Option<&Session>) -> BookingResult<Vec<Appointment>>;
}
