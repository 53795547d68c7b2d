//! # Identity Store Subsystem
//!
//! Holds credential records for the two participant kinds and turns
//! successful registration or login into a [`shared_types::Session`].
//!
//! ## Purpose
//!
//! The booking engine never sees raw passwords or derived credentials; it
//! consumes only the `Session` this subsystem issues. Credential derivation
//! itself sits behind the outbound [`ports::CredentialScheme`] port so the
//! store can be exercised with a throwaway scheme in tests.
//!
//! ## Uniqueness
//!
//! Usernames are unique per participant kind, matching the two separate
//! account relations of the persisted layout: a patient and a caregiver may
//! share a username, two patients may not.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ports/inbound.rs        - IdentityApi trait
//! ports/outbound.rs       - CredentialScheme trait
//! adapters/credentials.rs - HMAC-SHA256 scheme with random salts
//! domain/accounts.rs      - AccountDirectory
//! service.rs              - RwLock-guarded IdentityService
//! error.rs                - IdentityError enum
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use error::*;
pub use ports::*;
pub use service::IdentityService;
