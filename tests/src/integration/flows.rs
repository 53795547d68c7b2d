//! # Integration Test Flows
//!
//! End-to-end reservation and cancellation flows against a fully wired
//! node: real ledger services behind the engine's gateway adapters, system
//! clock, HMAC credential scheme.
//!
//! Dates are pinned far in the future so the system clock's today-or-future
//! check never interferes; the one past-date test derives "yesterday" from
//! the real clock.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use scheduler_runtime::container::SchedulerContainer;
    use shared_types::{Session, Slot};
    use vs_02_inventory::InventoryApi;
    use vs_03_availability::AvailabilityApi;
    use vs_05_booking::{BookingApi, BookingError};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 1, day).unwrap()
    }

    fn caregiver(name: &str) -> Session {
        Session::caregiver(name)
    }

    fn patient(name: &str) -> Session {
        Session::patient(name)
    }

    /// Restock 5, one slot for p1, reserve: success leaves 4 doses and an
    /// empty slot list.
    #[test]
    fn test_reserve_decrements_doses_and_consumes_slot() {
        let node = SchedulerContainer::with_defaults();
        node.booking
            .add_doses(Some(&caregiver("p1")), "X", 5)
            .unwrap();
        node.booking
            .upload_availability(Some(&caregiver("p1")), date(1))
            .unwrap();

        let reservation = node
            .booking
            .reserve(Some(&patient("alice")), date(1), "X")
            .unwrap();

        assert_eq!(reservation.caregiver, "p1");
        assert_eq!(node.inventory.doses("X").unwrap(), 4);
        let view = node
            .booking
            .schedule_for(Some(&patient("alice")), date(1))
            .unwrap();
        assert!(view.caregivers.is_empty());
    }

    /// Reserve with no slots published for the date: NoAvailability,
    /// inventory untouched.
    #[test]
    fn test_reserve_without_slots_touches_nothing() {
        let node = SchedulerContainer::with_defaults();
        node.booking
            .add_doses(Some(&caregiver("p1")), "X", 5)
            .unwrap();

        let err = node
            .booking
            .reserve(Some(&patient("alice")), date(2), "X")
            .unwrap_err();

        assert_eq!(err, BookingError::NoAvailability { date: date(2) });
        assert_eq!(node.inventory.doses("X").unwrap(), 5);
        assert!(node.appointments.is_empty().unwrap());
    }

    /// Reserve a vaccine whose counter is exhausted: InsufficientDoses and
    /// the slot survives.
    #[test]
    fn test_reserve_with_exhausted_counter_keeps_slot() {
        let node = SchedulerContainer::with_defaults();
        node.booking
            .add_doses(Some(&caregiver("p1")), "X", 1)
            .unwrap();
        node.booking
            .upload_availability(Some(&caregiver("p1")), date(3))
            .unwrap();
        // Drain the counter to zero through a real reservation elsewhere.
        node.booking
            .upload_availability(Some(&caregiver("p2")), date(4))
            .unwrap();
        node.booking
            .reserve(Some(&patient("bob")), date(4), "X")
            .unwrap();

        let err = node
            .booking
            .reserve(Some(&patient("alice")), date(3), "X")
            .unwrap_err();

        assert_eq!(
            err,
            BookingError::InsufficientDoses {
                vaccine: "X".into(),
            }
        );
        assert!(node.availability.has_slot(date(3), "p1").unwrap());
        assert_eq!(node.inventory.doses("X").unwrap(), 0);
    }

    /// Reserve an unknown vaccine name: same InsufficientDoses outcome, no
    /// counter springs into existence.
    #[test]
    fn test_reserve_unknown_vaccine_is_insufficient() {
        let node = SchedulerContainer::with_defaults();
        node.booking
            .upload_availability(Some(&caregiver("p1")), date(5))
            .unwrap();

        let err = node
            .booking
            .reserve(Some(&patient("alice")), date(5), "Nowhere")
            .unwrap_err();

        assert_eq!(
            err,
            BookingError::InsufficientDoses {
                vaccine: "Nowhere".into(),
            }
        );
        assert!(node.inventory.stock_levels().unwrap().is_empty());
        assert!(node.availability.has_slot(date(5), "p1").unwrap());
    }

    /// Reserve for yesterday: validation error, no ledger touched.
    #[test]
    fn test_reserve_past_date_is_rejected() {
        let node = SchedulerContainer::with_defaults();
        node.booking
            .add_doses(Some(&caregiver("p1")), "X", 5)
            .unwrap();
        let yesterday = chrono::Local::now().date_naive().pred_opt().unwrap();

        let err = node
            .booking
            .reserve(Some(&patient("alice")), yesterday, "X")
            .unwrap_err();

        assert!(matches!(err, BookingError::PastDate { .. }));
        assert_eq!(node.inventory.doses("X").unwrap(), 5);
        assert!(node.appointments.is_empty().unwrap());
    }

    /// Reserve then cancel restores both the dose and the slot.
    #[test]
    fn test_reserve_cancel_round_trip() {
        let node = SchedulerContainer::with_defaults();
        node.booking
            .add_doses(Some(&caregiver("p1")), "X", 5)
            .unwrap();
        node.booking
            .upload_availability(Some(&caregiver("p1")), date(6))
            .unwrap();

        let reservation = node
            .booking
            .reserve(Some(&patient("alice")), date(6), "X")
            .unwrap();
        assert_eq!(node.inventory.doses("X").unwrap(), 4);

        let cancelled = node
            .booking
            .cancel(Some(&patient("alice")), reservation.appointment_id)
            .unwrap();
        assert_eq!(cancelled.id, reservation.appointment_id);

        // Pre-reservation state is fully restored.
        assert_eq!(node.inventory.doses("X").unwrap(), 5);
        assert_eq!(
            node.availability.live_slots().unwrap(),
            vec![Slot {
                date: date(6),
                caregiver: "p1".into(),
            }]
        );
        let view = node
            .booking
            .schedule_for(Some(&patient("alice")), date(6))
            .unwrap();
        assert_eq!(view.caregivers, vec!["p1"]);
        assert!(node.appointments.is_empty().unwrap());
    }

    /// Cancelling the same id twice yields NotFound the second time and no
    /// double restoration.
    #[test]
    fn test_double_cancel_restores_once() {
        let node = SchedulerContainer::with_defaults();
        node.booking
            .add_doses(Some(&caregiver("p1")), "X", 5)
            .unwrap();
        node.booking
            .upload_availability(Some(&caregiver("p1")), date(7))
            .unwrap();
        let reservation = node
            .booking
            .reserve(Some(&patient("alice")), date(7), "X")
            .unwrap();

        node.booking
            .cancel(Some(&patient("alice")), reservation.appointment_id)
            .unwrap();
        let err = node
            .booking
            .cancel(Some(&patient("alice")), reservation.appointment_id)
            .unwrap_err();

        assert_eq!(
            err,
            BookingError::NotFound {
                appointment_id: reservation.appointment_id,
            }
        );
        assert_eq!(node.inventory.doses("X").unwrap(), 5);
        assert_eq!(node.availability.slot_count().unwrap(), 1);
    }

    /// The caregiver on the appointment may cancel it too; a stranger may
    /// not, and cannot tell the id exists.
    #[test]
    fn test_cancel_authorization() {
        let node = SchedulerContainer::with_defaults();
        node.booking
            .add_doses(Some(&caregiver("p1")), "X", 2)
            .unwrap();
        node.booking
            .upload_availability(Some(&caregiver("p1")), date(8))
            .unwrap();
        let reservation = node
            .booking
            .reserve(Some(&patient("alice")), date(8), "X")
            .unwrap();

        let err = node
            .booking
            .cancel(Some(&patient("mallory")), reservation.appointment_id)
            .unwrap_err();
        assert_eq!(
            err,
            BookingError::NotFound {
                appointment_id: reservation.appointment_id,
            }
        );

        node.booking
            .cancel(Some(&caregiver("p1")), reservation.appointment_id)
            .unwrap();
        assert!(node.appointments.is_empty().unwrap());
    }

    /// Deterministic pick order: the candidate is the first caregiver in
    /// ascending id order, and successive reservations walk that order.
    #[test]
    fn test_reservations_follow_ascending_caregiver_order() {
        let node = SchedulerContainer::with_defaults();
        node.booking
            .add_doses(Some(&caregiver("p1")), "X", 5)
            .unwrap();
        for name in ["zoe", "amy", "bob"] {
            node.booking
                .upload_availability(Some(&caregiver(name)), date(9))
                .unwrap();
        }

        let first = node
            .booking
            .reserve(Some(&patient("alice")), date(9), "X")
            .unwrap();
        let second = node
            .booking
            .reserve(Some(&patient("alice")), date(9), "X")
            .unwrap();
        let third = node
            .booking
            .reserve(Some(&patient("alice")), date(9), "X")
            .unwrap();

        assert_eq!(first.caregiver, "amy");
        assert_eq!(second.caregiver, "bob");
        assert_eq!(third.caregiver, "zoe");
    }

    /// Both participant views show the counterpart and stay id-ascending.
    #[test]
    fn test_show_appointments_views() {
        let node = SchedulerContainer::with_defaults();
        node.booking
            .add_doses(Some(&caregiver("p1")), "X", 5)
            .unwrap();
        node.booking
            .upload_availability(Some(&caregiver("p1")), date(10))
            .unwrap();
        node.booking
            .upload_availability(Some(&caregiver("p1")), date(11))
            .unwrap();

        let one = node
            .booking
            .reserve(Some(&patient("alice")), date(10), "X")
            .unwrap();
        let two = node
            .booking
            .reserve(Some(&patient("alice")), date(11), "X")
            .unwrap();

        let mine = node
            .booking
            .appointments_for(Some(&patient("alice")))
            .unwrap();
        let ids: Vec<_> = mine.iter().map(|appointment| appointment.id).collect();
        let mut expected = vec![one.appointment_id, two.appointment_id];
        expected.sort_unstable();
        assert_eq!(ids, expected);
        assert!(mine.iter().all(|appointment| appointment.caregiver == "p1"));

        let theirs = node
            .booking
            .appointments_for(Some(&caregiver("p1")))
            .unwrap();
        assert_eq!(theirs.len(), 2);
        assert!(theirs.iter().all(|appointment| appointment.patient == "alice"));

        let nobody = node
            .booking
            .appointments_for(Some(&caregiver("p9")))
            .unwrap();
        assert!(nobody.is_empty());
    }

    /// Identity flow: registration logs in, duplicates are refused per
    /// kind, bad credentials are rejected.
    #[test]
    fn test_identity_flow() {
        use shared_types::ParticipantKind;
        use vs_01_identity::{IdentityApi, IdentityError};

        let node = SchedulerContainer::with_defaults();
        let session = node
            .identity
            .register(ParticipantKind::Patient, "alice", "hunter2")
            .unwrap();
        assert!(session.is_patient());

        assert_eq!(
            node.identity
                .register(ParticipantKind::Patient, "alice", "other")
                .unwrap_err(),
            IdentityError::UsernameTaken {
                username: "alice".into(),
            }
        );
        assert_eq!(
            node.identity
                .authenticate(ParticipantKind::Patient, "alice", "wrong")
                .unwrap_err(),
            IdentityError::BadCredentials
        );
        node.identity
            .authenticate(ParticipantKind::Patient, "alice", "hunter2")
            .unwrap();
    }

    /// A caregiver cannot double-publish a date, and the conflict does not
    /// disturb the existing slot.
    #[test]
    fn test_double_publish_conflicts() {
        let node = SchedulerContainer::with_defaults();
        node.booking
            .upload_availability(Some(&caregiver("p1")), date(12))
            .unwrap();

        let err = node
            .booking
            .upload_availability(Some(&caregiver("p1")), date(12))
            .unwrap_err();

        assert_eq!(err, BookingError::DuplicateSlot { date: date(12) });
        assert_eq!(node.availability.slot_count().unwrap(), 1);
    }
}
