use std::collections::HashMap;

use argon2::Argon2;
use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::user::User;

use super::traits::CredentialVerifier;

/// Fixed salt for the in-memory demo table. Digests are derived at
/// construction and never persisted.
const DEMO_SALT: &[u8; 16] = b"bridge-demo-salt";

struct Entry {
    user: User,
    password_hash: [u8; 32],
}

/// In-memory credential table with Argon2id digests.
///
/// Demo-grade: digest comparison is constant-effort but not constant-time,
/// and the table lives in process memory. Swap in a real
/// `CredentialVerifier` implementation before exposing this to the open
/// internet.
pub struct StaticVerifier {
    users: HashMap<String, Entry>,
}

impl StaticVerifier {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// The demo adviser account the platform ships with.
    pub fn demo() -> Result<Self, CoreError> {
        let mut verifier = Self::new();
        verifier.add_user(
            User {
                id: "user-001".into(),
                email: "demo@bridge.co.uk".into(),
                name: "Demo Adviser".into(),
                firm: "Bridge Demo Firm".into(),
                role: "adviser".into(),
            },
            "Bridge2026!",
        )?;
        Ok(verifier)
    }

    /// Register a user, deriving and storing the password digest.
    /// The email key is normalised (trimmed, lowercased).
    pub fn add_user(&mut self, user: User, password: &str) -> Result<(), CoreError> {
        let key = normalise_email(&user.email);
        let password_hash = hash_password(password)?;
        self.users.insert(
            key,
            Entry {
                user,
                password_hash,
            },
        );
        Ok(())
    }

    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

impl Default for StaticVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialVerifier for StaticVerifier {
    fn name(&self) -> &str {
        "StaticVerifier"
    }

    async fn verify(&self, email: &str, password: &str) -> Result<User, CoreError> {
        let entry = self
            .users
            .get(&normalise_email(email))
            .ok_or(CoreError::InvalidCredentials)?;

        let candidate = hash_password(password)?;
        if candidate != entry.password_hash {
            return Err(CoreError::InvalidCredentials);
        }
        Ok(entry.user.clone())
    }

    async fn user_by_id(&self, user_id: &str) -> Option<User> {
        self.users
            .values()
            .find(|e| e.user.id == user_id)
            .map(|e| e.user.clone())
    }
}

fn normalise_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Derive a 256-bit Argon2id digest from a password.
fn hash_password(password: &str) -> Result<[u8; 32], CoreError> {
    let mut digest = [0u8; 32];
    Argon2::default()
        .hash_password_into(password.as_bytes(), DEMO_SALT, &mut digest)
        .map_err(|e| CoreError::CredentialHashing(e.to_string()))?;
    Ok(digest)
}
