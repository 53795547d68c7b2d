//! # Interactive Command Surface
//!
//! Deliberately thin: tokenizes one input line, parses dates and counts,
//! owns the single interactive login session, dispatches to the identity
//! store or the booking engine, and renders exactly one textual status per
//! command. All scheduling semantics live behind the engine API.

use crate::container::SchedulerContainer;
use chrono::NaiveDate;
use shared_types::{AppointmentId, ParticipantKind, Session};
use vs_01_identity::IdentityApi;
use vs_05_booking::{BookingApi, BookingError};

/// Renders an engine failure as its user-facing message.
///
/// Storage failures are the one kind that additionally logs diagnostic
/// detail for operators; every other kind is an expected business outcome.
fn render_error(err: BookingError) -> String {
    if let BookingError::Storage(detail) = &err {
        tracing::error!(%detail, "storage failure surfaced to the user");
    }
    err.to_string()
}

/// What the surface should do after handling a line.
#[derive(Debug, PartialEq, Eq)]
pub enum ShellOutcome {
    /// Print this reply and keep reading.
    Reply(String),
    /// Stop reading input.
    Quit,
}

/// One interactive session over a scheduler node.
///
/// Holds the only mutable login state in the process: at most one
/// participant is logged in here at a time, while the ledgers behind the
/// engine stay shared across sessions.
pub struct Shell {
    node: SchedulerContainer,
    session: Option<Session>,
}

impl Shell {
    pub fn new(node: SchedulerContainer) -> Self {
        Self { node, session: None }
    }

    /// Greeting and command menu, shown once at startup.
    pub fn menu() -> &'static str {
        "Welcome to the vaccine appointment scheduler!\n\
         *** Please enter one of the following commands ***\n\
         > create_patient <username> <password>\n\
         > create_caregiver <username> <password>\n\
         > login_patient <username> <password>\n\
         > login_caregiver <username> <password>\n\
         > search_caregiver_schedule <yyyy-mm-dd>\n\
         > reserve <yyyy-mm-dd> <vaccine>\n\
         > upload_availability <yyyy-mm-dd>\n\
         > cancel <appointment_id>\n\
         > add_doses <vaccine> <count>\n\
         > show_appointments\n\
         > logout\n\
         > quit"
    }

    /// Currently logged-in session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Handles one input line.
    pub fn dispatch(&mut self, line: &str) -> ShellOutcome {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&operation, args)) = tokens.split_first() else {
            return ShellOutcome::Reply("Please enter a command.".into());
        };
        let reply = match operation {
            "create_patient" => self.register(ParticipantKind::Patient, args),
            "create_caregiver" => self.register(ParticipantKind::Caregiver, args),
            "login_patient" => self.login(ParticipantKind::Patient, args),
            "login_caregiver" => self.login(ParticipantKind::Caregiver, args),
            "search_caregiver_schedule" => self.search_schedule(args),
            "reserve" => self.reserve(args),
            "upload_availability" => self.upload_availability(args),
            "cancel" => self.cancel(args),
            "add_doses" => self.add_doses(args),
            "show_appointments" => self.show_appointments(args),
            "logout" => self.logout(args),
            "quit" => return ShellOutcome::Quit,
            _ => "Invalid operation name.".into(),
        };
        ShellOutcome::Reply(reply)
    }

    fn register(&mut self, kind: ParticipantKind, args: &[&str]) -> String {
        if self.session.is_some() {
            return "Already logged in, please logout first.".into();
        }
        let [username, password] = args else {
            return format!("Usage: create_{kind} <username> <password>");
        };
        match self.node.identity.register(kind, username, password) {
            Ok(session) => {
                self.session = Some(session);
                format!("Created {kind} user {username}")
            }
            Err(err) => err.to_string(),
        }
    }

    fn login(&mut self, kind: ParticipantKind, args: &[&str]) -> String {
        if self.session.is_some() {
            return "Already logged in, please logout first.".into();
        }
        let [username, password] = args else {
            return format!("Usage: login_{kind} <username> <password>");
        };
        match self.node.identity.authenticate(kind, username, password) {
            Ok(session) => {
                self.session = Some(session);
                format!("Logged in as {username}")
            }
            Err(err) => err.to_string(),
        }
    }

    fn logout(&mut self, args: &[&str]) -> String {
        if !args.is_empty() {
            return "Usage: logout".into();
        }
        match self.session.take() {
            Some(_) => "Successfully logged out.".into(),
            None => "Please log in first".into(),
        }
    }

    fn search_schedule(&self, args: &[&str]) -> String {
        let [date] = args else {
            return "Usage: search_caregiver_schedule <yyyy-mm-dd>".into();
        };
        let Ok(date) = date.parse::<NaiveDate>() else {
            return "Please enter a valid date in yyyy-mm-dd format.".into();
        };
        match self.node.booking.schedule_for(self.session(), date) {
            Ok(view) => {
                if view.caregivers.is_empty() {
                    return format!("No caregivers are available on {date}");
                }
                let mut out = format!("Caregivers available on {date}:");
                for caregiver in &view.caregivers {
                    out.push_str(&format!("\n  {caregiver}"));
                }
                out.push_str("\nDoses on hand:");
                if view.stock.is_empty() {
                    out.push_str("\n  (none)");
                }
                for stock in &view.stock {
                    out.push_str(&format!("\n  {} {}", stock.name, stock.doses));
                }
                out
            }
            Err(err) => render_error(err),
        }
    }

    fn reserve(&self, args: &[&str]) -> String {
        let [date, vaccine] = args else {
            return "Usage: reserve <yyyy-mm-dd> <vaccine>".into();
        };
        let Ok(date) = date.parse::<NaiveDate>() else {
            return "Please enter a valid date in yyyy-mm-dd format.".into();
        };
        match self.node.booking.reserve(self.session(), date, vaccine) {
            Ok(reservation) => format!(
                "Appointment ID: {}, Caregiver username: {}",
                reservation.appointment_id, reservation.caregiver
            ),
            Err(err) => render_error(err),
        }
    }

    fn upload_availability(&self, args: &[&str]) -> String {
        let [date] = args else {
            return "Usage: upload_availability <yyyy-mm-dd>".into();
        };
        let Ok(date) = date.parse::<NaiveDate>() else {
            return "Please enter a valid date in yyyy-mm-dd format.".into();
        };
        match self.node.booking.upload_availability(self.session(), date) {
            Ok(()) => "Availability uploaded.".into(),
            Err(err) => render_error(err),
        }
    }

    fn cancel(&self, args: &[&str]) -> String {
        let [id] = args else {
            return "Usage: cancel <appointment_id>".into();
        };
        let Ok(id) = id.parse::<AppointmentId>() else {
            return "Please enter a valid appointment id.".into();
        };
        match self.node.booking.cancel(self.session(), id) {
            Ok(cancelled) => format!(
                "Appointment {} on {} cancelled.",
                cancelled.id, cancelled.date
            ),
            Err(err) => render_error(err),
        }
    }

    fn add_doses(&self, args: &[&str]) -> String {
        let [vaccine, count] = args else {
            return "Usage: add_doses <vaccine> <count>".into();
        };
        let Ok(count) = count.parse::<u64>() else {
            return "Please enter a valid dose count.".into();
        };
        match self.node.booking.add_doses(self.session(), vaccine, count) {
            Ok(total) => format!("Doses updated, {vaccine} now has {total} doses."),
            Err(err) => render_error(err),
        }
    }

    fn show_appointments(&self, args: &[&str]) -> String {
        if !args.is_empty() {
            return "Usage: show_appointments".into();
        }
        match self.node.booking.appointments_for(self.session()) {
            Ok(appointments) => {
                if appointments.is_empty() {
                    return "No appointments found.".into();
                }
                // Each side sees the counterpart participant's username.
                let viewer_is_patient =
                    self.session().is_some_and(Session::is_patient);
                appointments
                    .iter()
                    .map(|appointment| {
                        if viewer_is_patient {
                            format!(
                                "Appointment ID: {}, Vaccine: {}, Date: {}, Caregiver: {}",
                                appointment.id,
                                appointment.vaccine,
                                appointment.date,
                                appointment.caregiver
                            )
                        } else {
                            format!(
                                "Appointment ID: {}, Vaccine: {}, Date: {}, Patient: {}",
                                appointment.id,
                                appointment.vaccine,
                                appointment.date,
                                appointment.patient
                            )
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            Err(err) => render_error(err),
        }
    }
}
