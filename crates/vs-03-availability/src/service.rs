//! Availability Index service.

use crate::domain::AvailabilityBoard;
use crate::error::{AvailabilityError, AvailabilityResult};
use crate::ports::AvailabilityApi;
use chrono::NaiveDate;
use shared_types::{CaregiverId, Slot};
use std::sync::RwLock;
use tracing::{debug, info};

/// Thread-safe slot board.
///
/// Wraps [`AvailabilityBoard`] in a `RwLock`. `claim` runs its test and its
/// delete inside one write-lock acquisition, which is what makes it safe to
/// use as the claim primitive of the reservation protocol.
#[derive(Debug, Default)]
pub struct AvailabilityService {
    board: RwLock<AvailabilityBoard>,
}

impl AvailabilityService {
    /// Creates a service with an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `(date, caregiver)` is currently published.
    pub fn has_slot(&self, date: NaiveDate, caregiver: &str) -> AvailabilityResult<bool> {
        let board = self
            .board
            .read()
            .map_err(|_| AvailabilityError::LockPoisoned)?;
        Ok(board.has_slot(date, caregiver))
    }
}

impl AvailabilityApi for AvailabilityService {
    fn publish(&self, date: NaiveDate, caregiver: &str) -> AvailabilityResult<()> {
        let mut board = self
            .board
            .write()
            .map_err(|_| AvailabilityError::LockPoisoned)?;
        board.publish(date, caregiver)?;
        info!(%date, %caregiver, "availability published");
        Ok(())
    }

    fn caregivers_for(&self, date: NaiveDate) -> AvailabilityResult<Vec<CaregiverId>> {
        let board = self
            .board
            .read()
            .map_err(|_| AvailabilityError::LockPoisoned)?;
        Ok(board.caregivers_for(date))
    }

    fn claim(&self, date: NaiveDate, caregiver: &str) -> AvailabilityResult<bool> {
        let mut board = self
            .board
            .write()
            .map_err(|_| AvailabilityError::LockPoisoned)?;
        let claimed = board.claim(date, caregiver);
        debug!(%date, %caregiver, claimed, "slot claim attempt");
        Ok(claimed)
    }

    fn slot_count(&self) -> AvailabilityResult<usize> {
        let board = self
            .board
            .read()
            .map_err(|_| AvailabilityError::LockPoisoned)?;
        Ok(board.slot_count())
    }

    fn live_slots(&self) -> AvailabilityResult<Vec<Slot>> {
        let board = self
            .board
            .read()
            .map_err(|_| AvailabilityError::LockPoisoned)?;
        Ok(board.live_slots())
    }
}
