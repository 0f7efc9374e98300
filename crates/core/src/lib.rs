pub mod catalog;
pub mod credentials;
pub mod errors;
pub mod models;
pub mod services;
pub mod stores;

use chrono::Duration;
use uuid::Uuid;

use catalog::{Catalog, InsightCatalog};
use credentials::{CredentialVerifier, StaticVerifier};
use errors::CoreError;
use models::{
    analytics::{DashboardStats, FilterOptions, PeerComparison, ProviderSummary},
    insight::Insight,
    message::Message,
    performance::PerformanceHistory,
    portfolio::Portfolio,
    preferences::{Preferences, PreferencesUpdate},
    provider::Provider,
    subscription::Subscription,
    user::User,
};
use services::{
    analytics_service::AnalyticsService,
    auth_service::{AuthService, DEFAULT_SESSION_TTL_SECS},
    filter_service::{FilterService, PortfolioFilter},
    performance_service::PerformanceService,
};
use stores::{
    message_store::MessageStore, preferences_store::PreferencesStore,
    subscription_store::SubscriptionStore,
};

/// Process-level configuration.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Session lifetime, anchored to login time (fixed window)
    pub session_ttl: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            session_ttl: Duration::seconds(DEFAULT_SESSION_TTL_SECS),
        }
    }
}

/// Main entry point for the Bridge core library.
///
/// Owns the static catalogs, the services that read them, and the mutable
/// in-memory stores. Built once at process start and shared by reference
/// across request handlers: every method takes `&self`, with mutability
/// confined to the per-store mutexes, so the check-then-act sequences
/// inside each store stay atomic under concurrent requests.
///
/// All store state is volatile and resets when the `Bridge` is dropped.
#[must_use]
pub struct Bridge {
    catalog: Catalog,
    insights: InsightCatalog,
    filter_service: FilterService,
    performance_service: PerformanceService,
    analytics_service: AnalyticsService,
    auth: AuthService,
    messages: MessageStore,
    subscriptions: SubscriptionStore,
    preferences: PreferencesStore,
}

impl std::fmt::Debug for Bridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bridge")
            .field("portfolios", &self.catalog.portfolios().len())
            .field("providers", &self.catalog.providers().len())
            .field("insights", &self.insights.len())
            .field("sessions", &self.auth.session_count())
            .field("messages", &self.messages.len())
            .field("subscription_rows", &self.subscriptions.row_count())
            .finish()
    }
}

impl Bridge {
    /// Built-in catalog, demo credential table, default config.
    pub fn new() -> Result<Self, CoreError> {
        Self::with_verifier(Box::new(StaticVerifier::demo()?), BridgeConfig::default())
    }

    /// Built-in catalog with a caller-supplied credential verifier.
    pub fn with_verifier(
        verifier: Box<dyn CredentialVerifier>,
        config: BridgeConfig,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            catalog: Catalog::built_in()?,
            insights: InsightCatalog::built_in(),
            filter_service: FilterService::new(),
            performance_service: PerformanceService::new(),
            analytics_service: AnalyticsService::new(),
            auth: AuthService::with_ttl(verifier, config.session_ttl),
            messages: MessageStore::new(),
            subscriptions: SubscriptionStore::new(),
            preferences: PreferencesStore::new(),
        })
    }

    // ── Catalog ─────────────────────────────────────────────────────

    #[must_use]
    pub fn portfolios(&self) -> &[Portfolio] {
        self.catalog.portfolios()
    }

    #[must_use]
    pub fn providers(&self) -> &[Provider] {
        self.catalog.providers()
    }

    /// A portfolio by id. `NotFound` for an unknown id.
    pub fn portfolio(&self, id: &str) -> Result<&Portfolio, CoreError> {
        self.catalog
            .portfolio(id)
            .ok_or_else(|| CoreError::NotFound(format!("portfolio '{id}'")))
    }

    /// A provider by display name.
    #[must_use]
    pub fn provider(&self, name: &str) -> Option<&Provider> {
        self.catalog.provider(name)
    }

    #[must_use]
    pub fn portfolios_for_provider(&self, provider_name: &str) -> Vec<&Portfolio> {
        self.catalog.portfolios_for_provider(provider_name)
    }

    /// Side-by-side comparison set for a list of portfolio ids. Unknown
    /// ids are skipped; `NotFound` only when nothing resolves.
    pub fn compare_portfolios(&self, ids: &[&str]) -> Result<Vec<&Portfolio>, CoreError> {
        let portfolios = self.catalog.portfolios_by_ids(ids);
        if portfolios.is_empty() {
            return Err(CoreError::NotFound("no matching portfolios".into()));
        }
        Ok(portfolios)
    }

    #[must_use]
    pub fn platforms(&self) -> Vec<String> {
        self.catalog.platforms()
    }

    #[must_use]
    pub fn investment_styles(&self) -> Vec<String> {
        self.catalog.investment_styles()
    }

    // ── Selection ───────────────────────────────────────────────────

    /// Run the filter engine over the universe. Parameters pass through
    /// verbatim from the boundary; the unrestricted `PortfolioFilter`
    /// returns the whole catalog.
    #[must_use]
    pub fn filter_portfolios(&self, filter: &PortfolioFilter) -> Vec<&Portfolio> {
        self.filter_service.filter(&self.catalog, filter)
    }

    #[must_use]
    pub fn filter_options(&self) -> FilterOptions {
        self.analytics_service.filter_options(&self.catalog)
    }

    // ── Performance ─────────────────────────────────────────────────

    /// Simulated monthly performance series for a portfolio, ending today.
    /// Unknown ids yield an empty series. Callers should keep `months`
    /// within 6 to 60.
    pub fn performance_history(
        &self,
        portfolio_id: &str,
        months: u32,
    ) -> Result<PerformanceHistory, CoreError> {
        self.performance_service
            .history(&self.catalog, portfolio_id, months)
    }

    // ── Analytics ───────────────────────────────────────────────────

    pub fn provider_summary(&self, provider_id: &str) -> Result<ProviderSummary, CoreError> {
        self.analytics_service
            .provider_summary(&self.catalog, provider_id)
    }

    pub fn peer_comparison(&self, portfolio_id: &str) -> Result<PeerComparison, CoreError> {
        self.analytics_service
            .peer_comparison(&self.catalog, portfolio_id)
    }

    #[must_use]
    pub fn dashboard(&self) -> DashboardStats {
        self.analytics_service.dashboard(&self.catalog, &self.insights)
    }

    // ── Auth & sessions ─────────────────────────────────────────────

    /// Verify credentials and mint a session in one step.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), CoreError> {
        let user = self.auth.authenticate(email, password).await?;
        let token = self.auth.create_session(user.clone())?;
        Ok((token, user))
    }

    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, CoreError> {
        self.auth.authenticate(email, password).await
    }

    pub fn create_session(&self, user: User) -> Result<String, CoreError> {
        self.auth.create_session(user)
    }

    /// Resolve a bearer token. `Unauthenticated` when absent or expired.
    pub fn get_session(&self, token: &str) -> Result<User, CoreError> {
        self.auth.get_session(token)
    }

    /// Log out. Idempotent.
    pub fn logout(&self, token: &str) {
        self.auth.destroy_session(token);
    }

    pub async fn user_by_id(&self, user_id: &str) -> Option<User> {
        self.auth.user_by_id(user_id).await
    }

    // ── Messaging ───────────────────────────────────────────────────

    /// Send an adviser message, optionally linked to a provider by
    /// (id, name).
    pub fn send_message(
        &self,
        user: &User,
        subject: &str,
        body: &str,
        provider: Option<(&str, &str)>,
    ) -> Result<Message, CoreError> {
        self.messages
            .send(&user.id, &user.name, &user.firm, subject, body, provider)
    }

    #[must_use]
    pub fn messages_for(&self, user_id: &str) -> Vec<Message> {
        self.messages.messages_for(user_id)
    }

    /// A message by id, owner-scoped. `NotFound` when absent or owned by
    /// someone else.
    pub fn message(&self, message_id: Uuid, user_id: &str) -> Result<Message, CoreError> {
        self.messages
            .message(message_id, user_id)
            .ok_or_else(|| CoreError::NotFound(format!("message '{message_id}'")))
    }

    // ── Subscriptions ───────────────────────────────────────────────

    /// Subscribe a user to a provider's range. `NotFound` for an unknown
    /// provider id; idempotent for an existing active subscription.
    pub fn subscribe(&self, user: &User, provider_id: &str) -> Result<Subscription, CoreError> {
        let provider = self
            .catalog
            .provider_by_id(provider_id)
            .ok_or_else(|| CoreError::NotFound(format!("provider '{provider_id}'")))?;
        Ok(self
            .subscriptions
            .subscribe(&user.id, &user.email, &provider.id, &provider.name))
    }

    /// Unsubscribe. `false` when there was no active subscription.
    pub fn unsubscribe(&self, user_id: &str, provider_id: &str) -> bool {
        self.subscriptions.unsubscribe(user_id, provider_id)
    }

    #[must_use]
    pub fn subscriptions_for(&self, user_id: &str) -> Vec<Subscription> {
        self.subscriptions.subscriptions_for(user_id)
    }

    #[must_use]
    pub fn is_subscribed(&self, user_id: &str, provider_id: &str) -> bool {
        self.subscriptions.is_subscribed(user_id, provider_id)
    }

    /// Active subscribers of a provider, used to fan out data-update
    /// alerts. Delivery itself is outside this crate.
    #[must_use]
    pub fn subscribers_of(&self, provider_id: &str) -> Vec<Subscription> {
        self.subscriptions.subscribers_of(provider_id)
    }

    // ── Preferences ─────────────────────────────────────────────────

    #[must_use]
    pub fn preferences_for(&self, user_id: &str) -> Preferences {
        self.preferences.preferences_for(user_id)
    }

    /// Merge a partial preferences update and return the resulting record.
    pub fn update_preferences(&self, user_id: &str, update: PreferencesUpdate) -> Preferences {
        self.preferences.update(user_id, update)
    }

    pub fn set_subscription_alert(
        &self,
        user_id: &str,
        provider_id: &str,
        enabled: bool,
    ) -> Preferences {
        self.preferences
            .set_subscription_alert(user_id, provider_id, enabled)
    }

    /// Whether a data-update alert should go out for this user/provider
    /// pair (default: yes).
    #[must_use]
    pub fn should_alert(&self, user_id: &str, provider_id: &str) -> bool {
        self.preferences.should_alert(user_id, provider_id)
    }

    // ── Insights ────────────────────────────────────────────────────

    /// All insights, newest first.
    #[must_use]
    pub fn insights(&self) -> Vec<&Insight> {
        self.insights.all()
    }

    pub fn insight(&self, id: &str) -> Result<&Insight, CoreError> {
        self.insights
            .insight(id)
            .ok_or_else(|| CoreError::NotFound(format!("insight '{id}'")))
    }

    #[must_use]
    pub fn insights_by_category(&self, category: &str) -> Vec<&Insight> {
        self.insights.by_category(category)
    }

    #[must_use]
    pub fn insight_categories(&self) -> Vec<String> {
        self.insights.categories()
    }

    #[must_use]
    pub fn search_insights(&self, query: &str) -> Vec<&Insight> {
        self.insights.search(query)
    }
}
