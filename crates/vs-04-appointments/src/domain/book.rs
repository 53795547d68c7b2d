//! Appointment book with reverse indices.
//!
//! Single-owner data structure; thread safety is provided by the service
//! layer, which serializes access through a `RwLock`.

use shared_types::{Appointment, AppointmentId, CaregiverId, PatientId};
use std::collections::{BTreeSet, HashMap};

/// Committed reservations indexed three ways.
///
/// `by_patient` and `by_caregiver` hold only ids; the `by_id` map owns the
/// records. Index sets are `BTreeSet` so per-participant views come out in
/// ascending id order.
#[derive(Debug, Default)]
pub struct AppointmentBook {
    by_id: HashMap<AppointmentId, Appointment>,
    by_patient: HashMap<PatientId, BTreeSet<AppointmentId>>,
    by_caregiver: HashMap<CaregiverId, BTreeSet<AppointmentId>>,
}

impl AppointmentBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an appointment with this id is live.
    pub fn contains(&self, id: AppointmentId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Inserts a record, refusing id collisions.
    ///
    /// Returns whether the record was inserted; `false` means the id is
    /// already taken and the book is unchanged.
    pub fn insert(&mut self, appointment: Appointment) -> bool {
        if self.by_id.contains_key(&appointment.id) {
            return false;
        }
        self.by_patient
            .entry(appointment.patient.clone())
            .or_default()
            .insert(appointment.id);
        self.by_caregiver
            .entry(appointment.caregiver.clone())
            .or_default()
            .insert(appointment.id);
        self.by_id.insert(appointment.id, appointment);
        true
    }

    /// Looks up a live appointment.
    pub fn get(&self, id: AppointmentId) -> Option<&Appointment> {
        self.by_id.get(&id)
    }

    /// Deletes and returns the record, fixing up both reverse indices.
    pub fn remove(&mut self, id: AppointmentId) -> Option<Appointment> {
        let appointment = self.by_id.remove(&id)?;
        if let Some(ids) = self.by_patient.get_mut(&appointment.patient) {
            ids.remove(&id);
            if ids.is_empty() {
                self.by_patient.remove(&appointment.patient);
            }
        }
        if let Some(ids) = self.by_caregiver.get_mut(&appointment.caregiver) {
            ids.remove(&id);
            if ids.is_empty() {
                self.by_caregiver.remove(&appointment.caregiver);
            }
        }
        Some(appointment)
    }

    /// Live appointments reserved by `patient`, ascending by id.
    pub fn for_patient(&self, patient: &str) -> Vec<Appointment> {
        self.collect(self.by_patient.get(patient))
    }

    /// Live appointments claiming `caregiver`'s slots, ascending by id.
    pub fn for_caregiver(&self, caregiver: &str) -> Vec<Appointment> {
        self.collect(self.by_caregiver.get(caregiver))
    }

    /// Number of live appointments.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if no appointment is live.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    fn collect(&self, ids: Option<&BTreeSet<AppointmentId>>) -> Vec<Appointment> {
        ids.into_iter()
            .flatten()
            .filter_map(|id| self.by_id.get(id).cloned())
            .collect()
    }
}
