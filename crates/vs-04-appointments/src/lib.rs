//! # Appointment Ledger Subsystem
//!
//! Holds committed reservations linking a patient, a caregiver, a date, and
//! a vaccine name, keyed by a ledger-unique appointment id.
//!
//! ## Data Structures
//!
//! - `by_id`: O(1) lookup by appointment id
//! - `by_patient`: id-ordered appointment ids per patient
//! - `by_caregiver`: id-ordered appointment ids per caregiver
//!
//! The reverse indices drive the two show-appointments views; they are kept
//! consistent with `by_id` on every insert and remove.
//!
//! ## Identifier Generation
//!
//! Ids are random 8-digit numbers drawn while holding the write lock and
//! re-drawn on collision, so uniqueness is enforced by the store itself
//! rather than left to birthday odds.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ports/inbound.rs  - AppointmentsApi trait
//! domain/book.rs    - AppointmentBook with reverse indices
//! service.rs        - RwLock-guarded AppointmentLedger
//! error.rs          - AppointmentError enum
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::*;
pub use error::*;
pub use ports::*;
pub use service::AppointmentLedger;
