//! Adapters implementing the Identity Store's outbound ports.

pub mod credentials;

pub use credentials::HmacCredentialScheme;
