//! Port adapters connecting the booking engine to the ledger subsystems.
//!
//! Each adapter is a thin delegation layer whose only logic is error
//! mapping: ledger-specific failures become the engine's error taxonomy,
//! with everything unexpected folded into `BookingError::Storage`.

pub mod appointments;
pub mod doses;
pub mod slots;

pub use appointments::AppointmentGatewayAdapter;
pub use doses::DoseGatewayAdapter;
pub use slots::SlotGatewayAdapter;
