use serde::{Deserialize, Serialize};

/// A named individual at a provider (CEO, CIO, …).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPerson {
    pub name: String,
    pub role: String,
}

/// An MPS provider (discretionary fund manager) and its descriptive metadata.
///
/// One provider owns zero or more `Portfolio` records; the link is by
/// display name, validated when the catalog is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// Stable identifier, e.g. "vanguard"
    pub id: String,
    /// Display name; portfolios reference this
    pub name: String,
    pub full_name: String,
    pub description: String,
    /// Assets under management, £bn
    pub aum_bn: f64,
    pub established: u16,
    pub headquarters: String,
    /// One of the catalog's investment style tags
    pub investment_style: String,
    pub key_personnel: Vec<KeyPerson>,
    pub strengths: Vec<String>,
    pub considerations: Vec<String>,
    pub regulatory_status: String,
    pub website: String,
}
