//! # VaxSched Scheduler Runtime
//!
//! The main entry point for the vaccine appointment scheduler.
//!
//! ## Wiring
//!
//! Subsystems are wired through the booking engine's outbound ports; no
//! subsystem reaches into another directly:
//!
//! ```text
//!            command surface (commands.rs)
//!                    │
//!        ┌───────────┴───────────┐
//!        ↓                       ↓
//!  IdentityService         BookingService
//!  (vs-01)                 (vs-05)
//!                           │ SlotGateway ───→ AvailabilityService (vs-03)
//!                           │ DoseGateway ───→ InventoryService    (vs-02)
//!                           │ AppointmentGateway → AppointmentLedger (vs-04)
//!                           └ TimeSource ────→ system clock
//! ```
//!
//! ## Modular Structure
//!
//! - `container.rs` - builds every service and wires the port adapters
//! - `adapters/`    - gateway implementations bridging engine ports to services
//! - `commands.rs`  - tokenizing, parsing, and rendering for the interactive surface

pub mod adapters;
pub mod commands;
pub mod container;
