//! Appointment Ledger service.

use crate::domain::AppointmentBook;
use crate::error::{AppointmentError, AppointmentResult};
use crate::ports::AppointmentsApi;
use chrono::NaiveDate;
use rand::Rng;
use shared_types::{Appointment, AppointmentId};
use std::sync::RwLock;
use tracing::{debug, info};

/// Smallest id the ledger will issue (keeps ids at 8 decimal digits).
pub const MIN_APPOINTMENT_ID: AppointmentId = 10_000_000;

/// Largest id the ledger will issue.
pub const MAX_APPOINTMENT_ID: AppointmentId = 99_999_999;

/// Redraws before giving up on id allocation. The id space holds ninety
/// million values, so hitting this bound means the ledger is effectively
/// full.
const MAX_ID_ATTEMPTS: usize = 16;

/// Thread-safe appointment book.
///
/// Id generation happens inside the write lock, so a drawn id is checked
/// and inserted in the same critical section; collisions redraw rather than
/// clobber.
#[derive(Debug, Default)]
pub struct AppointmentLedger {
    book: RwLock<AppointmentBook>,
}

impl AppointmentLedger {
    /// Creates a service with an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live appointments.
    pub fn len(&self) -> AppointmentResult<usize> {
        let book = self.book.read().map_err(|_| AppointmentError::LockPoisoned)?;
        Ok(book.len())
    }

    /// Returns true if no appointment is live.
    pub fn is_empty(&self) -> AppointmentResult<bool> {
        let book = self.book.read().map_err(|_| AppointmentError::LockPoisoned)?;
        Ok(book.is_empty())
    }
}

impl AppointmentsApi for AppointmentLedger {
    fn create(
        &self,
        date: NaiveDate,
        patient: &str,
        caregiver: &str,
        vaccine: &str,
    ) -> AppointmentResult<AppointmentId> {
        let mut book = self.book.write().map_err(|_| AppointmentError::LockPoisoned)?;
        let mut rng = rand::thread_rng();

        for _ in 0..MAX_ID_ATTEMPTS {
            let id = rng.gen_range(MIN_APPOINTMENT_ID..=MAX_APPOINTMENT_ID);
            if book.contains(id) {
                debug!(id, "appointment id collision, redrawing");
                continue;
            }
            let inserted = book.insert(Appointment {
                id,
                date,
                patient: patient.to_owned(),
                caregiver: caregiver.to_owned(),
                vaccine: vaccine.to_owned(),
            });
            debug_assert!(inserted, "id was checked free under the same lock");
            info!(id, %date, %patient, %caregiver, %vaccine, "appointment committed");
            return Ok(id);
        }
        Err(AppointmentError::IdSpaceExhausted)
    }

    fn get(&self, id: AppointmentId) -> AppointmentResult<Option<Appointment>> {
        let book = self.book.read().map_err(|_| AppointmentError::LockPoisoned)?;
        Ok(book.get(id).cloned())
    }

    fn remove(&self, id: AppointmentId) -> AppointmentResult<Appointment> {
        let mut book = self.book.write().map_err(|_| AppointmentError::LockPoisoned)?;
        let removed = book
            .remove(id)
            .ok_or(AppointmentError::NotFound { id })?;
        info!(id, "appointment removed");
        Ok(removed)
    }

    fn for_patient(&self, patient: &str) -> AppointmentResult<Vec<Appointment>> {
        let book = self.book.read().map_err(|_| AppointmentError::LockPoisoned)?;
        Ok(book.for_patient(patient))
    }

    fn for_caregiver(&self, caregiver: &str) -> AppointmentResult<Vec<Appointment>> {
        let book = self.book.read().map_err(|_| AppointmentError::LockPoisoned)?;
        Ok(book.for_caregiver(caregiver))
    }
}
