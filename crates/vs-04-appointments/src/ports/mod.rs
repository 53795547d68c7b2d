//! Ports for the Appointment Ledger subsystem.

pub mod inbound;

pub use inbound::AppointmentsApi;
