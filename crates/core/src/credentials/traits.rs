use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::user::User;

/// Trait abstraction for credential verification.
///
/// The built-in `StaticVerifier` holds a fixed demo table; a real identity
/// provider (database, OIDC, LDAP) can be substituted without touching any
/// call site. Verification is async because real implementations do I/O.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Human-readable name of this verifier (for logs/errors).
    fn name(&self) -> &str;

    /// Check an email/password pair. Returns the user profile without any
    /// credential material, or `CoreError::InvalidCredentials`.
    ///
    /// Implementations must treat the email as case-insensitive and ignore
    /// surrounding whitespace.
    async fn verify(&self, email: &str, password: &str) -> Result<User, CoreError>;

    /// Look up a user profile by id. `None` when unknown.
    async fn user_by_id(&self, user_id: &str) -> Option<User>;
}
