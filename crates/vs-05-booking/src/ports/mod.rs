//! Ports for the Booking Engine subsystem.

pub mod inbound;
pub mod outbound;

pub use inbound::BookingApi;
pub use outbound::{
    AppointmentGateway, DoseGateway, SlotGateway, SystemTimeSource, TimeSource,
};
