// ═══════════════════════════════════════════════════════════════════
// Integration Tests — full adviser journeys through the Bridge facade:
// login, research, shortlist, subscribe, message, preferences, logout
// ═══════════════════════════════════════════════════════════════════

use bridge_core::errors::CoreError;
use bridge_core::services::filter_service::PortfolioFilter;
use bridge_core::Bridge;

#[tokio::test]
async fn full_adviser_journey() {
    let bridge = Bridge::new().unwrap();

    // Login with the demo account
    let (token, user) = bridge.login("demo@bridge.co.uk", "Bridge2026!").await.unwrap();
    assert_eq!(user.id, "user-001");
    assert_eq!(bridge.get_session(&token).unwrap().id, "user-001");

    // Build a shortlist: mid risk, low cost
    let shortlist = bridge.filter_portfolios(&PortfolioFilter {
        risk_min: 4,
        risk_max: 6,
        ocf_max: Some(0.40),
        ..PortfolioFilter::default()
    });
    assert_eq!(shortlist.len(), 5);
    assert!(shortlist.iter().any(|p| p.id == "parmenion-5"));

    // Drill into one candidate
    let portfolio = bridge.portfolio("parmenion-5").unwrap();
    assert_eq!(portfolio.provider, "Parmenion");
    let history = bridge.performance_history("parmenion-5", 36).unwrap();
    assert_eq!(history.points.len(), 36);
    assert!(history.simulated);
    let comparison = bridge.peer_comparison("parmenion-5").unwrap();
    assert_eq!(comparison.peer_count, 4);

    // Subscribe to the provider and ask the research team a question
    let subscription = bridge.subscribe(&user, "parmenion").unwrap();
    assert!(subscription.active);
    assert!(bridge.is_subscribed(&user.id, "parmenion"));

    let message = bridge
        .send_message(
            &user,
            "Parmenion decumulation suitability",
            "How does the risk grade 5 portfolio behave in drawdown?",
            Some(("parmenion", "Parmenion")),
        )
        .unwrap();
    assert_eq!(bridge.messages_for(&user.id).len(), 1);
    assert_eq!(
        bridge.message(message.id, &user.id).unwrap().subject,
        "Parmenion decumulation suitability"
    );

    // Logout invalidates the token
    bridge.logout(&token);
    assert!(matches!(
        bridge.get_session(&token),
        Err(CoreError::Unauthenticated)
    ));
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let bridge = Bridge::new().unwrap();
    let result = bridge.login("demo@bridge.co.uk", "wrong").await;
    assert!(matches!(result, Err(CoreError::InvalidCredentials)));
}

#[tokio::test]
async fn subscribe_validates_the_provider_id() {
    let bridge = Bridge::new().unwrap();
    let (_, user) = bridge.login("demo@bridge.co.uk", "Bridge2026!").await.unwrap();

    let result = bridge.subscribe(&user, "no-such-provider");
    assert!(matches!(result, Err(CoreError::NotFound(_))));
}

#[tokio::test]
async fn subscription_lifecycle_through_the_facade() {
    let bridge = Bridge::new().unwrap();
    let (_, user) = bridge.login("demo@bridge.co.uk", "Bridge2026!").await.unwrap();

    let first = bridge.subscribe(&user, "vanguard").unwrap();
    let again = bridge.subscribe(&user, "vanguard").unwrap();
    assert_eq!(first.id, again.id);

    assert!(bridge.unsubscribe(&user.id, "vanguard"));
    assert!(!bridge.unsubscribe(&user.id, "vanguard"));
    assert!(bridge.subscriptions_for(&user.id).is_empty());

    let fresh = bridge.subscribe(&user, "vanguard").unwrap();
    assert_ne!(fresh.id, first.id);
    assert_eq!(bridge.subscribers_of("vanguard").len(), 1);
}

#[tokio::test]
async fn preferences_survive_merging_updates() {
    use bridge_core::models::preferences::{DisplayUpdate, PreferencesUpdate};

    let bridge = Bridge::new().unwrap();
    let (_, user) = bridge.login("demo@bridge.co.uk", "Bridge2026!").await.unwrap();

    bridge.update_preferences(
        &user.id,
        PreferencesUpdate {
            display: Some(DisplayUpdate {
                default_risk_level: Some(4),
                dark_mode: None,
            }),
            notifications: None,
            subscription_alerts: None,
        },
    );
    bridge.set_subscription_alert(&user.id, "tatton", false);

    let prefs = bridge.preferences_for(&user.id);
    assert_eq!(prefs.display.default_risk_level, 4);
    assert!(!bridge.should_alert(&user.id, "tatton"));
    assert!(bridge.should_alert(&user.id, "vanguard"));
}

#[test]
fn catalog_reads_through_the_facade() {
    let bridge = Bridge::new().unwrap();

    assert_eq!(bridge.portfolios().len(), 17);
    assert_eq!(bridge.providers().len(), 5);
    assert_eq!(bridge.portfolios_for_provider("Tatton").len(), 3);
    assert!(matches!(
        bridge.portfolio("nope"),
        Err(CoreError::NotFound(_))
    ));

    let options = bridge.filter_options();
    assert_eq!(options.risk_ratings, vec![3, 4, 5, 6, 7, 8]);

    let dashboard = bridge.dashboard();
    assert_eq!(dashboard.total_portfolios, 17);
    assert_eq!(dashboard.total_insights, 6);
}

#[test]
fn compare_skips_unknown_ids_and_errors_when_nothing_resolves() {
    let bridge = Bridge::new().unwrap();

    let comparison = bridge
        .compare_portfolios(&["vanguard-ls-60", "not-a-portfolio", "tatton-balanced"])
        .unwrap();
    assert_eq!(comparison.len(), 2);
    assert_eq!(comparison[0].id, "vanguard-ls-60");
    assert_eq!(comparison[1].id, "tatton-balanced");

    assert!(matches!(
        bridge.compare_portfolios(&["not-a-portfolio"]),
        Err(CoreError::NotFound(_))
    ));
    assert!(matches!(
        bridge.compare_portfolios(&[]),
        Err(CoreError::NotFound(_))
    ));
}

#[test]
fn insight_reads_through_the_facade() {
    let bridge = Bridge::new().unwrap();

    assert_eq!(bridge.insights().len(), 6);
    assert_eq!(bridge.insights()[0].id, "insight-006");
    assert_eq!(bridge.insight_categories().len(), 2);
    assert_eq!(bridge.insights_by_category("Regulatory").len(), 1);
    assert!(!bridge.search_insights("mps").is_empty());
    assert!(matches!(
        bridge.insight("insight-404"),
        Err(CoreError::NotFound(_))
    ));

    let summary = bridge.provider_summary("eq").unwrap();
    assert_eq!(summary.portfolio_count, 3);
}
