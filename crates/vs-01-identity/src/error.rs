//! Identity Store error types.

use thiserror::Error;

/// Identity Store errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// An account of this kind already uses the username.
    #[error("Username {username} is already taken")]
    UsernameTaken { username: String },

    /// Unknown account or wrong password; deliberately indistinguishable.
    #[error("Login failed: invalid username or password")]
    BadCredentials,

    /// The account directory lock was poisoned by a panicking writer.
    #[error("Identity store is unavailable: lock poisoned")]
    LockPoisoned,
}

/// Result type for identity operations.
pub type IdentityResult<T> = Result<T, IdentityError>;
