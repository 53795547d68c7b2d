//! Identity Store service.

use crate::domain::{Account, AccountDirectory};
use crate::error::{IdentityError, IdentityResult};
use crate::ports::{CredentialScheme, IdentityApi};
use shared_types::{ParticipantKind, Session};
use std::sync::RwLock;
use tracing::{debug, info};

/// Thread-safe account directory with pluggable credential derivation.
#[derive(Debug, Default)]
pub struct IdentityService<C: CredentialScheme> {
    accounts: RwLock<AccountDirectory>,
    scheme: C,
}

impl<C: CredentialScheme> IdentityService<C> {
    /// Creates an empty store using the given credential scheme.
    pub fn new(scheme: C) -> Self {
        Self {
            accounts: RwLock::new(AccountDirectory::new()),
            scheme,
        }
    }

    /// Number of registered accounts across both kinds.
    pub fn account_count(&self) -> IdentityResult<usize> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| IdentityError::LockPoisoned)?;
        Ok(accounts.len())
    }
}

impl<C: CredentialScheme> IdentityApi for IdentityService<C> {
    fn register(
        &self,
        kind: ParticipantKind,
        username: &str,
        password: &str,
    ) -> IdentityResult<Session> {
        let salt = self.scheme.generate_salt();
        let credential = self.scheme.derive(password, &salt);

        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| IdentityError::LockPoisoned)?;
        accounts.insert(Account {
            kind,
            username: username.to_owned(),
            salt,
            credential,
        })?;
        info!(%kind, %username, "account registered");
        Ok(Session {
            kind,
            username: username.to_owned(),
        })
    }

    fn authenticate(
        &self,
        kind: ParticipantKind,
        username: &str,
        password: &str,
    ) -> IdentityResult<Session> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| IdentityError::LockPoisoned)?;
        let account = accounts
            .get(kind, username)
            .ok_or(IdentityError::BadCredentials)?;

        if !self.scheme.verify(password, &account.salt, &account.credential) {
            debug!(%kind, %username, "login rejected");
            return Err(IdentityError::BadCredentials);
        }
        info!(%kind, %username, "login accepted");
        Ok(Session {
            kind,
            username: username.to_owned(),
        })
    }
}
