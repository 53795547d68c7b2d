//! Ports for the Availability Index subsystem.

pub mod inbound;

pub use inbound::AvailabilityApi;
