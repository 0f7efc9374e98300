use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{Duration, Utc};
use tracing::{debug, warn};

use crate::credentials::CredentialVerifier;
use crate::errors::CoreError;
use crate::models::session::Session;
use crate::models::user::User;

/// Default session lifetime: 24 hours from login.
pub const DEFAULT_SESSION_TTL_SECS: i64 = 86_400;

/// Length in bytes of the raw session-token entropy (hex-encoded on issue).
const TOKEN_BYTES: usize = 32;

/// Credential verification plus the in-memory session store.
///
/// Sessions are a token to `Session` map behind a mutex. Expiry is checked
/// lazily on lookup: there is no background sweep, so a token that is
/// never touched again simply sits in the map until its next (failing)
/// lookup evicts it.
///
/// The TTL window is anchored to `created`, not `last_active`: a session
/// lasts a fixed 24 hours from login no matter how active it is.
/// `last_active` is tracked for diagnostics only; switching the expiry
/// check to a sliding window would silently extend credentials.
pub struct AuthService {
    verifier: Box<dyn CredentialVerifier>,
    sessions: Mutex<HashMap<String, Session>>,
    ttl: Duration,
}

impl AuthService {
    pub fn new(verifier: Box<dyn CredentialVerifier>) -> Self {
        Self::with_ttl(verifier, Duration::seconds(DEFAULT_SESSION_TTL_SECS))
    }

    pub fn with_ttl(verifier: Box<dyn CredentialVerifier>, ttl: Duration) -> Self {
        Self {
            verifier,
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Verify credentials through the pluggable verifier.
    /// Returns the user profile sans credential material.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, CoreError> {
        self.verifier.verify(email, password).await
    }

    /// Look up a user profile by id.
    pub async fn user_by_id(&self, user_id: &str) -> Option<User> {
        self.verifier.user_by_id(user_id).await
    }

    /// Mint a new session for an authenticated user and return its token.
    ///
    /// Always succeeds (barring an entropy failure); a user may hold any
    /// number of concurrent sessions.
    pub fn create_session(&self, user: User) -> Result<String, CoreError> {
        let token = generate_token()?;
        let session = Session::new(user);
        debug!(user_id = %session.user.id, "session created");

        let mut sessions = lock_sessions(&self.sessions);
        sessions.insert(token.clone(), session);
        Ok(token)
    }

    /// Resolve a token to its user, refreshing `last_active`.
    ///
    /// Fails with `Unauthenticated` when the token was never issued, or
    /// when it has outlived the TTL, in which case the entry is evicted
    /// on the spot.
    pub fn get_session(&self, token: &str) -> Result<User, CoreError> {
        let mut sessions = lock_sessions(&self.sessions);

        let Some(session) = sessions.get_mut(token) else {
            return Err(CoreError::Unauthenticated);
        };

        let now = Utc::now();
        if now - session.created > self.ttl {
            warn!(user_id = %session.user.id, "expired session evicted on lookup");
            sessions.remove(token);
            return Err(CoreError::Unauthenticated);
        }

        session.last_active = now;
        Ok(session.user.clone())
    }

    /// Remove a session. Idempotent; an absent token is a no-op.
    pub fn destroy_session(&self, token: &str) {
        let mut sessions = lock_sessions(&self.sessions);
        if sessions.remove(token).is_some() {
            debug!("session destroyed");
        }
    }

    /// Number of sessions physically present in the store, including any
    /// logically expired entries awaiting lazy eviction.
    #[must_use]
    pub fn session_count(&self) -> usize {
        lock_sessions(&self.sessions).len()
    }
}

/// 32 bytes of OS entropy, hex-encoded: 64 characters, unguessable.
fn generate_token() -> Result<String, CoreError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    getrandom::getrandom(&mut bytes)
        .map_err(|e| CoreError::TokenGeneration(e.to_string()))?;
    Ok(hex::encode(bytes))
}

/// Recover the map from a poisoned lock so session state stays usable even
/// if another thread panicked mid-operation.
fn lock_sessions(
    sessions: &Mutex<HashMap<String, Session>>,
) -> std::sync::MutexGuard<'_, HashMap<String, Session>> {
    sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
