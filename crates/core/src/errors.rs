use thiserror::Error;

/// Unified error type for the entire bridge-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Request-facing taxonomy ─────────────────────────────────────
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Not authenticated: missing or expired session")]
    Unauthenticated,

    // ── Internal ────────────────────────────────────────────────────
    #[error("Catalog integrity check failed: {0}")]
    CatalogIntegrity(String),

    #[error("Credential hashing failed: {0}")]
    CredentialHashing(String),

    #[error("Failed to generate session token: {0}")]
    TokenGeneration(String),

    #[error("Performance simulation failed: {0}")]
    Simulation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
