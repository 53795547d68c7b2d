//! Slot gateway adapter over the Availability Index.

use chrono::NaiveDate;
use shared_types::CaregiverId;
use std::sync::Arc;
use vs_03_availability::{AvailabilityApi, AvailabilityError, AvailabilityService};
use vs_05_booking::{BookingError, BookingResult, SlotGateway};

/// Bridges [`SlotGateway`] to the Availability Index service.
pub struct SlotGatewayAdapter {
    inner: Arc<AvailabilityService>,
}

impl SlotGatewayAdapter {
    pub fn new(inner: Arc<AvailabilityService>) -> Self {
        Self { inner }
    }
}

fn map_err(err: AvailabilityError) -> BookingError {
    match err {
        AvailabilityError::SlotTaken { date, .. } => BookingError::DuplicateSlot { date },
        other => BookingError::Storage(other.to_string()),
    }
}

impl SlotGateway for SlotGatewayAdapter {
    fn publish(&self, date: NaiveDate, caregiver: &str) -> BookingResult<()> {
        self.inner.publish(date, caregiver).map_err(map_err)
    }

    fn providers_for(&self, date: NaiveDate) -> BookingResult<Vec<CaregiverId>> {
        self.inner.caregivers_for(date).map_err(map_err)
    }

    fn claim(&self, date: NaiveDate, caregiver: &str) -> BookingResult<bool> {
        self.inner.claim(date, caregiver).map_err(map_err)
    }
}
