//! # VaxSched Test Suite
//!
//! Unified test crate containing cross-subsystem tests. Per-subsystem unit
//! tests live next to the code they exercise; everything here drives the
//! fully wired node from `scheduler-runtime`.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs      # End-to-end reservation and cancellation flows
//!     └── contention.rs # Concurrent-reservation properties
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p vs-tests
//!
//! # By category
//! cargo test -p vs-tests integration::flows::
//! cargo test -p vs-tests integration::contention::
//! ```

pub mod integration;
