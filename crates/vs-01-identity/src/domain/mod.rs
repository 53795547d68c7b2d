//! Inner domain layer: the account directory.

pub mod accounts;

pub use accounts::{Account, AccountDirectory, CREDENTIAL_LEN, SALT_LEN};
