//! # Shared Types Crate
//!
//! This crate contains the domain entities shared across scheduler
//! subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Explicit Session Context**: The authenticated participant is carried
//!   as a [`Session`] value passed into every engine call; no subsystem holds
//!   process-wide mutable login state.

pub mod entities;

pub use entities::*;
