//! Slot board: published availability keyed by date.
//!
//! Single-owner data structure; thread safety is provided by the service
//! layer, which serializes access through a `RwLock`.

use crate::error::AvailabilityError;
use chrono::NaiveDate;
use shared_types::{CaregiverId, Slot};
use std::collections::{BTreeMap, BTreeSet};

/// Published slots, grouped by date.
///
/// The inner `BTreeSet` keeps each date's caregivers unique and iterates
/// them in ascending id order, which is the tie-break the booking engine
/// relies on for a reproducible pick order.
#[derive(Debug, Default)]
pub struct AvailabilityBoard {
    slots: BTreeMap<NaiveDate, BTreeSet<CaregiverId>>,
}

impl AvailabilityBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a slot for `(date, caregiver)`.
    ///
    /// # Errors
    /// - `SlotTaken`: the caregiver already has a slot on this date
    pub fn publish(&mut self, date: NaiveDate, caregiver: &str) -> Result<(), AvailabilityError> {
        let inserted = self.slots.entry(date).or_default().insert(caregiver.to_owned());
        if !inserted {
            return Err(AvailabilityError::SlotTaken {
                date,
                caregiver: caregiver.to_owned(),
            });
        }
        Ok(())
    }

    /// Caregivers with a live slot on `date`, ascending by id.
    pub fn caregivers_for(&self, date: NaiveDate) -> Vec<CaregiverId> {
        self.slots
            .get(&date)
            .map(|caregivers| caregivers.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Test-and-delete of one specific slot.
    ///
    /// Returns whether this call removed the slot. Empty per-date sets are
    /// pruned so the board does not accumulate dead dates.
    pub fn claim(&mut self, date: NaiveDate, caregiver: &str) -> bool {
        let Some(caregivers) = self.slots.get_mut(&date) else {
            return false;
        };
        let removed = caregivers.remove(caregiver);
        if caregivers.is_empty() {
            self.slots.remove(&date);
        }
        removed
    }

    /// Returns true if `(date, caregiver)` is currently published.
    pub fn has_slot(&self, date: NaiveDate, caregiver: &str) -> bool {
        self.slots
            .get(&date)
            .is_some_and(|caregivers| caregivers.contains(caregiver))
    }

    /// Total number of live slots across all dates.
    pub fn slot_count(&self) -> usize {
        self.slots.values().map(BTreeSet::len).sum()
    }

    /// Every live slot, ascending by date then caregiver id.
    pub fn live_slots(&self) -> Vec<Slot> {
        self.slots
            .iter()
            .flat_map(|(date, caregivers)| {
                caregivers.iter().map(|caregiver| Slot {
                    date: *date,
                    caregiver: caregiver.clone(),
                })
            })
            .collect()
    }
}
