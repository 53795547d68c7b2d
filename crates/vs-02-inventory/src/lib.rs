//! # Inventory Ledger Subsystem
//!
//! Holds one non-negative dose counter per vaccine name.
//!
//! ## Purpose
//!
//! The booking engine consumes one dose per reservation and the restock
//! operation adds doses. Counters are `u64`, so a negative count is
//! unrepresentable; sufficiency is enforced by making the decrement
//! conditional inside a single write-locked step.
//!
//! ## Operations
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | `restock` | Creates the counter if absent, else adds; rejects zero |
//! | `try_consume` | Decrements iff enough doses remain, else no change |
//! | `restore` | Unconditional add, used by cancellation and rollback |
//! | `stock_levels` | Name-ascending snapshot of every counter |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ports/inbound.rs  - InventoryApi trait
//! domain/ledger.rs  - DoseLedger counters
//! service.rs        - RwLock-guarded InventoryService
//! error.rs          - InventoryError enum
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::*;
pub use error::*;
pub use ports::*;
pub use service::InventoryService;
