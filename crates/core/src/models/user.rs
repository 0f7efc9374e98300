use serde::{Deserialize, Serialize};

/// An authenticated adviser profile.
///
/// Never carries credential material; password digests live only inside
/// the credential verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub firm: String,
    pub role: String,
}
