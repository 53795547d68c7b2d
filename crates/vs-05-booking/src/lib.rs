//! # Booking Engine Subsystem
//!
//! Orchestrates one logical transaction across the Availability Index, the
//! Inventory Ledger, and the Appointment Ledger, with all-or-nothing
//! semantics under contention.
//!
//! ## Reservation Protocol
//!
//! Both resources (one slot, one dose) must be held simultaneously for an
//! appointment to be valid. Each acquisition is independently atomic, so the
//! engine compensates instead of holding a cross-store lock:
//!
//! ```text
//! read slots ──→ consume dose ──→ claim slot ──→ commit appointment
//!     │               │               │
//!     │ empty         │ short         │ stolen by a concurrent claim
//!     ↓               ↓               ↓
//! NoAvailability  InsufficientDoses  restore dose, retry from the top
//!                                    (bounded; then Contention)
//! ```
//!
//! | Stage | Primitive | On failure |
//! |-------|-----------|------------|
//! | Pick | `SlotGateway::providers_for` | `NoAvailability` |
//! | Hold dose | `DoseGateway::try_consume` | `InsufficientDoses`, nothing held |
//! | Hold slot | `SlotGateway::claim` | dose restored, protocol retries |
//! | Commit | `AppointmentGateway::create` | dose restored, slot re-published |
//!
//! Cancellation reverses a committed reservation exactly: remove the
//! appointment (atomic, so double-cancel finds nothing), restore one dose,
//! re-publish the slot.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ports/inbound.rs         - BookingApi trait
//! ports/outbound.rs        - SlotGateway, DoseGateway, AppointmentGateway, TimeSource
//! domain/value_objects.rs  - Reservation, ScheduleView
//! service.rs               - BookingService protocol implementation
//! error.rs                 - BookingError enum
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::*;
pub use error::*;
pub use ports::*;
pub use service::{BookingConfig, BookingService};
