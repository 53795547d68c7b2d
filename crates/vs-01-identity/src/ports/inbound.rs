//! # Inbound Port - IdentityApi
//!
//! Primary driving port for account registration and login.

use crate::error::IdentityResult;
use shared_types::{ParticipantKind, Session};

/// Primary API for the Identity Store subsystem.
///
/// Both methods return a live [`Session`] on success; registration logs the
/// new participant straight in, as the interactive surface expects.
pub trait IdentityApi: Send + Sync {
    /// Registers a new account.
    ///
    /// # Errors
    /// - `UsernameTaken`: an account of this kind already has the username
    fn register(
        &self,
        kind: ParticipantKind,
        username: &str,
        password: &str,
    ) -> IdentityResult<Session>;

    /// Verifies a login attempt.
    ///
    /// # Errors
    /// - `BadCredentials`: unknown account or wrong password (the two cases
    ///   are deliberately indistinguishable to the caller)
    fn authenticate(
        &self,
        kind: ParticipantKind,
        username: &str,
        password: &str,
    ) -> IdentityResult<Session>;
}
