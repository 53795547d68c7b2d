//! Value objects returned by the Booking Engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared_types::{AppointmentId, CaregiverId, VaccineStock};

/// Outcome of a successful reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Ledger-unique id of the committed appointment.
    pub appointment_id: AppointmentId,
    /// Caregiver whose slot was claimed.
    pub caregiver: CaregiverId,
}

/// Schedule view for one date: who is available, and what stock exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleView {
    /// Date the view was taken for.
    pub date: NaiveDate,
    /// Caregivers with a live slot on the date, ascending by id.
    pub caregivers: Vec<CaregiverId>,
    /// Current dose counters, ascending by vaccine name.
    pub stock: Vec<VaccineStock>,
}
