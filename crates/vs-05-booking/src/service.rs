//! Booking Engine service - core reservation and cancellation logic.

use crate::domain::{Reservation, ScheduleView};
use crate::error::{BookingError, BookingResult};
use crate::ports::inbound::BookingApi;
use crate::ports::outbound::{AppointmentGateway, DoseGateway, SlotGateway, TimeSource};
use chrono::NaiveDate;
use shared_types::{Appointment, AppointmentId, ParticipantKind, Session};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Booking engine configuration.
#[derive(Clone, Copy, Debug)]
pub struct BookingConfig {
    /// Claim attempts before a reservation gives up with `Contention`.
    pub max_claim_attempts: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            max_claim_attempts: 5,
        }
    }
}

/// Booking Engine implementation.
///
/// Generic over the three ledger gateways and the time source so the
/// protocol can be exercised against fakes. The engine holds no state of
/// its own beyond configuration; every acquisition is delegated to a
/// gateway primitive that is atomic on its own store.
pub struct BookingService<S, D, A, T>
where
    S: SlotGateway,
    D: DoseGateway,
    A: AppointmentGateway,
    T: TimeSource,
{
    config: BookingConfig,
    slots: Arc<S>,
    doses: Arc<D>,
    appointments: Arc<A>,
    clock: Arc<T>,
}

impl<S, D, A, T> BookingService<S, D, A, T>
where
    S: SlotGateway,
    D: DoseGateway,
    A: AppointmentGateway,
    T: TimeSource,
{
    /// Creates a new booking engine over the given gateways.
    pub fn new(
        config: BookingConfig,
        slots: Arc<S>,
        doses: Arc<D>,
        appointments: Arc<A>,
        clock: Arc<T>,
    ) -> Self {
        Self {
            config,
            slots,
            doses,
            appointments,
            clock,
        }
    }

    fn require_session(session: Option<&Session>) -> BookingResult<&Session> {
        session.ok_or(BookingError::AuthRequired)
    }

    fn require_kind(
        session: Option<&Session>,
        required: ParticipantKind,
    ) -> BookingResult<&str> {
        let session = Self::require_session(session)?;
        if session.kind != required {
            return Err(BookingError::WrongRole { required });
        }
        Ok(&session.username)
    }

    fn ensure_not_past(&self, date: NaiveDate) -> BookingResult<()> {
        let today = self.clock.today();
        if date < today {
            return Err(BookingError::PastDate { date, today });
        }
        Ok(())
    }

    /// Puts back a held dose and slot after a failed commit.
    ///
    /// Failures here are logged rather than returned: the caller is already
    /// propagating the original error, and the slot may legitimately exist
    /// again if the caregiver re-published in the meantime.
    fn release_held(&self, date: NaiveDate, caregiver: &str, vaccine: &str) {
        if let Err(err) = self.doses.restore(vaccine, 1) {
            error!(%vaccine, %err, "failed to restore dose while aborting reservation");
        }
        match self.slots.publish(date, caregiver) {
            Ok(()) | Err(BookingError::DuplicateSlot { .. }) => {}
            Err(err) => {
                error!(%date, %caregiver, %err, "failed to re-publish slot while aborting reservation");
            }
        }
    }
}

impl<S, D, A, T> BookingApi for BookingService<S, D, A, T>
where
    S: SlotGateway,
    D: DoseGateway,
    A: AppointmentGateway,
    T: TimeSource,
{
    fn reserve(
        &self,
        session: Option<&Session>,
        date: NaiveDate,
        vaccine: &str,
    ) -> BookingResult<Reservation> {
        let patient = Self::require_kind(session, ParticipantKind::Patient)?;
        self.ensure_not_past(date)?;
        if vaccine.is_empty() {
            return Err(BookingError::EmptyVaccineName);
        }

        for attempt in 1..=self.config.max_claim_attempts {
            // Re-read the board every attempt: a retry must see the claims
            // that beat it, not a stale candidate list.
            let caregivers = self.slots.providers_for(date)?;
            let Some(candidate) = caregivers.into_iter().next() else {
                return Err(BookingError::NoAvailability { date });
            };

            // Hold the dose first. If the counter is short nothing has been
            // acquired yet and the whole reservation fails cleanly.
            if !self.doses.try_consume(vaccine, 1)? {
                return Err(BookingError::InsufficientDoses {
                    vaccine: vaccine.to_owned(),
                });
            }

            // Now take the slot. A false return means a concurrent
            // reservation got this exact pair between the read and the
            // claim: give the dose back and start over on current state.
            if !self.slots.claim(date, &candidate)? {
                self.doses.restore(vaccine, 1)?;
                warn!(
                    %date,
                    caregiver = %candidate,
                    attempt,
                    "slot claimed concurrently; dose restored, retrying"
                );
                continue;
            }

            // Both resources held: commit. A commit failure must put both
            // back before surfacing.
            match self.appointments.create(date, patient, &candidate, vaccine) {
                Ok(appointment_id) => {
                    info!(
                        appointment_id,
                        %date,
                        patient = %patient,
                        caregiver = %candidate,
                        %vaccine,
                        "reservation committed"
                    );
                    return Ok(Reservation {
                        appointment_id,
                        caregiver: candidate,
                    });
                }
                Err(err) => {
                    self.release_held(date, &candidate, vaccine);
                    return Err(err);
                }
            }
        }

        Err(BookingError::Contention {
            attempts: self.config.max_claim_attempts,
        })
    }

    fn cancel(
        &self,
        session: Option<&Session>,
        appointment_id: AppointmentId,
    ) -> BookingResult<Appointment> {
        let session = Self::require_session(session)?;

        let Some(appointment) = self.appointments.get(appointment_id)? else {
            return Err(BookingError::NotFound { appointment_id });
        };
        let caller_owns = match session.kind {
            ParticipantKind::Patient => appointment.patient == session.username,
            ParticipantKind::Caregiver => appointment.caregiver == session.username,
        };
        if !caller_owns {
            // Same answer as an unknown id: callers cannot probe for other
            // participants' appointment ids.
            debug!(appointment_id, caller = %session.username, "cancel refused");
            return Err(BookingError::NotFound { appointment_id });
        }

        // Records are immutable, so the ownership check stays valid for
        // whatever remove returns. If a concurrent cancel won the remove,
        // this one reports NotFound and restores nothing.
        let Some(removed) = self.appointments.remove(appointment_id)? else {
            return Err(BookingError::NotFound { appointment_id });
        };

        self.doses.restore(&removed.vaccine, 1)?;
        match self.slots.publish(removed.date, &removed.caregiver) {
            Ok(()) => {}
            Err(BookingError::DuplicateSlot { .. }) => {
                warn!(
                    appointment_id,
                    date = %removed.date,
                    caregiver = %removed.caregiver,
                    "caregiver already re-published this date; slot left as-is"
                );
            }
            Err(err) => return Err(err),
        }
        info!(appointment_id, "appointment cancelled");
        Ok(removed)
    }

    fn upload_availability(
        &self,
        session: Option<&Session>,
        date: NaiveDate,
    ) -> BookingResult<()> {
        let caregiver = Self::require_kind(session, ParticipantKind::Caregiver)?;
        self.slots.publish(date, caregiver)
    }

    fn add_doses(
        &self,
        session: Option<&Session>,
        vaccine: &str,
        count: u64,
    ) -> BookingResult<u64> {
        Self::require_kind(session, ParticipantKind::Caregiver)?;
        if vaccine.is_empty() {
            return Err(BookingError::EmptyVaccineName);
        }
        if count == 0 {
            return Err(BookingError::InvalidDoseCount);
        }
        self.doses.restock(vaccine, count)
    }

    fn schedule_for(
        &self,
        session: Option<&Session>,
        date: NaiveDate,
    ) -> BookingResult<ScheduleView> {
        Self::require_session(session)?;
        self.ensure_not_past(date)?;
        Ok(ScheduleView {
            date,
            caregivers: self.slots.providers_for(date)?,
            stock: self.doses.stock_levels()?,
        })
    }

    fn appointments_for(&self, session: Option<&Session>) -> BookingResult<Vec<Appointment>> {
        let session = Self::require_session(session)?;
        match session.kind {
            ParticipantKind::Patient => self.appointments.for_patient(&session.username),
            ParticipantKind::Caregiver => self.appointments.for_caregiver(&session.username),
        }
    }
}
