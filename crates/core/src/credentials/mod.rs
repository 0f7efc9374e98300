pub mod static_verifier;
pub mod traits;

pub use static_verifier::StaticVerifier;
pub use traits::CredentialVerifier;
