//! Account directory.
//!
//! Single-owner data structure; thread safety is provided by the service
//! layer, which serializes access through a `RwLock`.

use crate::error::IdentityError;
use shared_types::ParticipantKind;
use std::collections::HashMap;

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// Derived credential length in bytes (one SHA-256 block).
pub const CREDENTIAL_LEN: usize = 32;

/// One stored account. Holds the salt and the derived credential, never the
/// password.
#[derive(Debug, Clone)]
pub struct Account {
    /// Participant kind the account was registered as.
    pub kind: ParticipantKind,
    /// Unique (per kind) username.
    pub username: String,
    /// Random per-account salt.
    pub salt: [u8; SALT_LEN],
    /// Credential derived from password and salt.
    pub credential: [u8; CREDENTIAL_LEN],
}

/// Accounts keyed by `(kind, username)`.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: HashMap<(ParticipantKind, String), Account>,
}

impl AccountDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an account, refusing username reuse within the kind.
    ///
    /// # Errors
    /// - `UsernameTaken`: an account of this kind already has the username
    pub fn insert(&mut self, account: Account) -> Result<(), IdentityError> {
        let key = (account.kind, account.username.clone());
        if self.accounts.contains_key(&key) {
            return Err(IdentityError::UsernameTaken {
                username: account.username,
            });
        }
        self.accounts.insert(key, account);
        Ok(())
    }

    /// Looks up an account by kind and username.
    pub fn get(&self, kind: ParticipantKind, username: &str) -> Option<&Account> {
        self.accounts.get(&(kind, username.to_owned()))
    }

    /// Returns true if an account of this kind uses the username.
    pub fn contains(&self, kind: ParticipantKind, username: &str) -> bool {
        self.accounts.contains_key(&(kind, username.to_owned()))
    }

    /// Number of registered accounts across both kinds.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if no account is registered.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
