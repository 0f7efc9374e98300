pub mod data;
pub mod insights;

pub use insights::InsightCatalog;

use std::collections::HashSet;

use crate::errors::CoreError;
use crate::models::portfolio::Portfolio;
use crate::models::provider::Provider;

/// The static MPS universe: provider metadata plus portfolio records.
///
/// Read-only after construction. There is no relational store behind this:
/// portfolios reference their provider by display name, so the constructor
/// checks referential consistency once at load time and nothing can break
/// it later.
#[derive(Debug, Clone)]
pub struct Catalog {
    providers: Vec<Provider>,
    portfolios: Vec<Portfolio>,
}

impl Catalog {
    /// Build a catalog, validating that every portfolio names a known
    /// provider and that portfolio ids are unique.
    pub fn new(providers: Vec<Provider>, portfolios: Vec<Portfolio>) -> Result<Self, CoreError> {
        let provider_names: HashSet<&str> = providers.iter().map(|p| p.name.as_str()).collect();

        let mut seen_ids = HashSet::new();
        for portfolio in &portfolios {
            if !provider_names.contains(portfolio.provider.as_str()) {
                return Err(CoreError::CatalogIntegrity(format!(
                    "portfolio '{}' references unknown provider '{}'",
                    portfolio.id, portfolio.provider
                )));
            }
            if !seen_ids.insert(portfolio.id.as_str()) {
                return Err(CoreError::CatalogIntegrity(format!(
                    "duplicate portfolio id '{}'",
                    portfolio.id
                )));
            }
        }

        Ok(Self {
            providers,
            portfolios,
        })
    }

    /// The embedded research universe shipped with the library.
    pub fn built_in() -> Result<Self, CoreError> {
        Self::new(data::providers(), data::portfolios())
    }

    // ── Pure reads ──────────────────────────────────────────────────

    #[must_use]
    pub fn portfolios(&self) -> &[Portfolio] {
        &self.portfolios
    }

    #[must_use]
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Look up a portfolio by its id.
    #[must_use]
    pub fn portfolio(&self, id: &str) -> Option<&Portfolio> {
        self.portfolios.iter().find(|p| p.id == id)
    }

    /// Look up a provider by its display name.
    #[must_use]
    pub fn provider(&self, name: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.name == name)
    }

    /// Look up a provider by its stable id (e.g. "vanguard").
    #[must_use]
    pub fn provider_by_id(&self, id: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }

    /// Resolve a list of portfolio ids, preserving the requested order.
    /// Unknown ids are skipped rather than failing the whole lookup.
    #[must_use]
    pub fn portfolios_by_ids(&self, ids: &[&str]) -> Vec<&Portfolio> {
        ids.iter().filter_map(|id| self.portfolio(id)).collect()
    }

    /// All portfolios owned by a provider, in catalog order.
    #[must_use]
    pub fn portfolios_for_provider(&self, provider_name: &str) -> Vec<&Portfolio> {
        self.portfolios
            .iter()
            .filter(|p| p.provider == provider_name)
            .collect()
    }

    /// The adviser platforms the universe covers.
    #[must_use]
    pub fn platforms(&self) -> Vec<String> {
        data::platforms()
    }

    /// The investment style tags the universe covers.
    #[must_use]
    pub fn investment_styles(&self) -> Vec<String> {
        data::investment_styles()
    }
}
