//! Outbound (Driven) ports for the Identity Store subsystem.

use crate::domain::{CREDENTIAL_LEN, SALT_LEN};

/// Credential derivation scheme.
///
/// Abstracted so the account directory can be tested without real key
/// derivation, and so the scheme can be swapped without touching the store.
pub trait CredentialScheme: Send + Sync {
    /// Draws a fresh random salt for a new account.
    fn generate_salt(&self) -> [u8; SALT_LEN];

    /// Derives the stored credential from a password and salt.
    fn derive(&self, password: &str, salt: &[u8; SALT_LEN]) -> [u8; CREDENTIAL_LEN];

    /// Checks a password attempt against a stored credential in constant
    /// time.
    fn verify(
        &self,
        password: &str,
        salt: &[u8; SALT_LEN],
        credential: &[u8; CREDENTIAL_LEN],
    ) -> bool;
}

/// Transparent scheme for tests: the salt is zero and the credential is the
/// password bytes, truncated or zero-padded.
#[cfg(test)]
pub struct PlaintextScheme;

#[cfg(test)]
impl CredentialScheme for PlaintextScheme {
    fn generate_salt(&self) -> [u8; SALT_LEN] {
        [0; SALT_LEN]
    }

    fn derive(&self, password: &str, _salt: &[u8; SALT_LEN]) -> [u8; CREDENTIAL_LEN] {
        let mut credential = [0; CREDENTIAL_LEN];
        let bytes = password.as_bytes();
        let len = bytes.len().min(CREDENTIAL_LEN);
        credential[..len].copy_from_slice(&bytes[..len]);
        credential
    }

    fn verify(
        &self,
        password: &str,
        salt: &[u8; SALT_LEN],
        credential: &[u8; CREDENTIAL_LEN],
    ) -> bool {
        &self.derive(password, salt) == credential
    }
}
