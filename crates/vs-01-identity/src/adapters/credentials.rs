//! HMAC-SHA256 credential scheme.

use crate::domain::{CREDENTIAL_LEN, SALT_LEN};
use crate::ports::CredentialScheme;
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Default credential scheme: `HMAC-SHA256(key = salt, message = password)`
/// with a 16-byte random salt per account.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacCredentialScheme;

impl HmacCredentialScheme {
    fn mac(salt: &[u8; SALT_LEN]) -> HmacSha256 {
        HmacSha256::new_from_slice(salt).expect("HMAC can take key of any size")
    }
}

impl CredentialScheme for HmacCredentialScheme {
    fn generate_salt(&self) -> [u8; SALT_LEN] {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        salt
    }

    fn derive(&self, password: &str, salt: &[u8; SALT_LEN]) -> [u8; CREDENTIAL_LEN] {
        let mut mac = Self::mac(salt);
        mac.update(password.as_bytes());
        let mut credential = [0u8; CREDENTIAL_LEN];
        credential.copy_from_slice(&mac.finalize().into_bytes());
        credential
    }

    fn verify(
        &self,
        password: &str,
        salt: &[u8; SALT_LEN],
        credential: &[u8; CREDENTIAL_LEN],
    ) -> bool {
        let mut mac = Self::mac(salt);
        mac.update(password.as_bytes());
        // verify_slice is constant-time, unlike comparing digests with ==.
        mac.verify_slice(credential).is_ok()
    }
}
