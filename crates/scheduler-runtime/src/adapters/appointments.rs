//! Appointment gateway adapter over the Appointment Ledger.

use chrono::NaiveDate;
use shared_types::{Appointment, AppointmentId};
use std::sync::Arc;
use vs_04_appointments::{AppointmentError, AppointmentLedger, AppointmentsApi};
use vs_05_booking::{AppointmentGateway, BookingError, BookingResult};

/// Bridges [`AppointmentGateway`] to the Appointment Ledger service.
pub struct AppointmentGatewayAdapter {
    inner: Arc<AppointmentLedger>,
}

impl AppointmentGatewayAdapter {
    pub fn new(inner: Arc<AppointmentLedger>) -> Self {
        Self { inner }
    }
}

fn map_err(err: AppointmentError) -> BookingError {
    BookingError::Storage(err.to_string())
}

impl AppointmentGateway for AppointmentGatewayAdapter {
    fn create(
        &self,
        date: NaiveDate,
        patient: &str,
        caregiver: &str,
        vaccine: &str,
    ) -> BookingResult<AppointmentId> {
        self.inner
            .create(date, patient, caregiver, vaccine)
            .map_err(map_err)
    }

    fn get(&self, id: AppointmentId) -> BookingResult<Option<Appointment>> {
        self.inner.get(id).map_err(map_err)
    }

    fn remove(&self, id: AppointmentId) -> BookingResult<Option<Appointment>> {
        // The engine treats a missing record as data, not as a failure: it
        // is the signal that drives idempotent cancellation.
        match self.inner.remove(id) {
            Ok(removed) => Ok(Some(removed)),
            Err(AppointmentError::NotFound { .. }) => Ok(None),
            Err(other) => Err(map_err(other)),
        }
    }

    fn for_patient(&self, patient: &str) -> BookingResult<Vec<Appointment>> {
        self.inner.for_patient(patient).map_err(map_err)
    }

    fn for_caregiver(&self, caregiver: &str) -> BookingResult<Vec<Appointment>> {
        self.inner.for_caregiver(caregiver).map_err(map_err)
    }
}
