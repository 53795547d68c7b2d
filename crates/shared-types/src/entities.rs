//! # Core Domain Entities
//!
//! Defines the scheduler entities shared across subsystems.
//!
//! ## Clusters
//!
//! - **Participants**: `ParticipantKind`, `Session`
//! - **Capacity**: `Slot` (one caregiver, one calendar date)
//! - **Inventory**: `VaccineStock`
//! - **Reservations**: `Appointment`

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Username of a caregiver account.
pub type CaregiverId = String;

/// Username of a patient account.
pub type PatientId = String;

/// Name of a vaccine inventory counter (e.g. "Pfizer").
pub type VaccineName = String;

/// Unique identifier of a committed appointment, rendered in decimal.
pub type AppointmentId = u64;

/// Which side of the scheduling relationship a participant is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantKind {
    /// Publishes availability and doses.
    Caregiver,
    /// Reserves appointments.
    Patient,
}

impl fmt::Display for ParticipantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Caregiver => write!(f, "caregiver"),
            Self::Patient => write!(f, "patient"),
        }
    }
}

/// Authenticated participant context.
///
/// A `Session` is produced by the identity subsystem on successful
/// registration or login, and passed explicitly into every booking engine
/// call. At most one session is live per interactive surface; the surface
/// owns that exclusivity, the ledgers themselves are shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Participant kind this session was authenticated as.
    pub kind: ParticipantKind,
    /// Account username, used as the participant id on ledger records.
    pub username: String,
}

impl Session {
    /// Creates a caregiver session.
    pub fn caregiver(username: impl Into<String>) -> Self {
        Self {
            kind: ParticipantKind::Caregiver,
            username: username.into(),
        }
    }

    /// Creates a patient session.
    pub fn patient(username: impl Into<String>) -> Self {
        Self {
            kind: ParticipantKind::Patient,
            username: username.into(),
        }
    }

    /// Returns true if this session belongs to a patient.
    pub fn is_patient(&self) -> bool {
        self.kind == ParticipantKind::Patient
    }

    /// Returns true if this session belongs to a caregiver.
    pub fn is_caregiver(&self) -> bool {
        self.kind == ParticipantKind::Caregiver
    }
}

/// A caregiver's published availability for one calendar date.
///
/// The `(date, caregiver)` pair is unique: a caregiver cannot publish two
/// slots for the same date. A slot is destroyed when a reservation claims it
/// and re-created when that reservation is cancelled.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Calendar date of the availability.
    pub date: NaiveDate,
    /// Caregiver offering it.
    pub caregiver: CaregiverId,
}

/// Point-in-time dose count for one vaccine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineStock {
    /// Vaccine name.
    pub name: VaccineName,
    /// Doses currently available.
    pub doses: u64,
}

/// A committed reservation binding one slot and one dose.
///
/// Every live appointment corresponds, at creation time, to a slot that
/// existed and a dose counter that was successfully decremented. The
/// appointment ledger exclusively owns the record; patient and caregiver hold
/// only the referencing id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Ledger-unique identifier.
    pub id: AppointmentId,
    /// Date the slot was claimed for.
    pub date: NaiveDate,
    /// Patient who reserved.
    pub patient: PatientId,
    /// Caregiver whose slot was claimed.
    pub caregiver: CaregiverId,
    /// Vaccine whose counter was decremented.
    pub vaccine: VaccineName,
}
