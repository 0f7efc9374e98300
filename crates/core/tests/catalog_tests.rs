// ═══════════════════════════════════════════════════════════════════
// Catalog Tests — built-in universe integrity, lookups, and the
// insight catalog's listing/search behaviour
// ═══════════════════════════════════════════════════════════════════

use bridge_core::catalog::{Catalog, InsightCatalog};
use bridge_core::errors::CoreError;

mod built_in_universe {
    use super::*;

    #[test]
    fn ships_seventeen_portfolios_from_five_providers() {
        let catalog = Catalog::built_in().unwrap();
        assert_eq!(catalog.portfolios().len(), 17);
        assert_eq!(catalog.providers().len(), 5);
    }

    #[test]
    fn every_portfolio_references_a_known_provider() {
        let catalog = Catalog::built_in().unwrap();
        for portfolio in catalog.portfolios() {
            assert!(
                catalog.provider(&portfolio.provider).is_some(),
                "portfolio {} has dangling provider {}",
                portfolio.id,
                portfolio.provider
            );
        }
    }

    #[test]
    fn portfolio_ids_are_unique() {
        let catalog = Catalog::built_in().unwrap();
        let mut ids: Vec<&str> = catalog.portfolios().iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 17);
    }

    #[test]
    fn lookup_by_id_and_name() {
        let catalog = Catalog::built_in().unwrap();

        let portfolio = catalog.portfolio("parmenion-5").unwrap();
        assert_eq!(portfolio.provider, "Parmenion");
        assert_eq!(portfolio.risk_rating, 5);

        let provider = catalog.provider("Vanguard").unwrap();
        assert_eq!(provider.id, "vanguard");
        assert_eq!(catalog.provider_by_id("eq").unwrap().name, "EQ Investors");

        assert!(catalog.portfolio("no-such-portfolio").is_none());
        assert!(catalog.provider("No Such Provider").is_none());
    }

    #[test]
    fn portfolios_by_ids_skips_unknown_and_keeps_request_order() {
        let catalog = Catalog::built_in().unwrap();

        let resolved =
            catalog.portfolios_by_ids(&["parmenion-5", "no-such-id", "vanguard-ls-20"]);
        let ids: Vec<&str> = resolved.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["parmenion-5", "vanguard-ls-20"]);

        assert!(catalog.portfolios_by_ids(&["nope", "also-nope"]).is_empty());
        assert!(catalog.portfolios_by_ids(&[]).is_empty());
    }

    #[test]
    fn portfolios_for_provider_in_catalog_order() {
        let catalog = Catalog::built_in().unwrap();
        let vanguard = catalog.portfolios_for_provider("Vanguard");
        assert_eq!(vanguard.len(), 5);
        assert_eq!(vanguard[0].id, "vanguard-ls-20");
        assert_eq!(vanguard[4].id, "vanguard-ls-100");
    }

    #[test]
    fn platform_and_style_reference_lists() {
        let catalog = Catalog::built_in().unwrap();
        assert_eq!(catalog.platforms().len(), 8);
        assert_eq!(catalog.investment_styles().len(), 5);
        assert!(catalog.platforms().contains(&"Transact".to_string()));
    }
}

mod construction_validation {
    use super::*;

    fn sample_portfolio(id: &str, provider: &str) -> bridge_core::models::portfolio::Portfolio {
        let catalog = Catalog::built_in().unwrap();
        let mut portfolio = catalog.portfolio("vanguard-ls-60").unwrap().clone();
        portfolio.id = id.to_string();
        portfolio.provider = provider.to_string();
        portfolio
    }

    #[test]
    fn rejects_portfolio_with_unknown_provider() {
        let providers = Catalog::built_in().unwrap().providers().to_vec();
        let portfolios = vec![sample_portfolio("orphan-1", "Ghost Asset Management")];

        let result = Catalog::new(providers, portfolios);
        assert!(matches!(result, Err(CoreError::CatalogIntegrity(_))));
    }

    #[test]
    fn rejects_duplicate_portfolio_ids() {
        let providers = Catalog::built_in().unwrap().providers().to_vec();
        let portfolios = vec![
            sample_portfolio("dup-1", "Vanguard"),
            sample_portfolio("dup-1", "Vanguard"),
        ];

        let result = Catalog::new(providers, portfolios);
        assert!(matches!(result, Err(CoreError::CatalogIntegrity(_))));
    }

    #[test]
    fn accepts_empty_universe() {
        let catalog = Catalog::new(Vec::new(), Vec::new()).unwrap();
        assert!(catalog.portfolios().is_empty());
    }
}

mod insight_catalog {
    use super::*;

    #[test]
    fn ships_six_insights_newest_first() {
        let insights = InsightCatalog::built_in();
        assert_eq!(insights.len(), 6);

        let all = insights.all();
        assert_eq!(all[0].id, "insight-006");
        for pair in all.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn lookup_by_id() {
        let insights = InsightCatalog::built_in();
        let insight = insights.insight("insight-003").unwrap();
        assert!(insight.title.contains("Active Fund Performance"));
        assert!(insights.insight("insight-999").is_none());
    }

    #[test]
    fn categories_in_first_seen_order() {
        let insights = InsightCatalog::built_in();
        assert_eq!(
            insights.categories(),
            vec!["Thematic Analysis".to_string(), "Regulatory".to_string()]
        );
    }

    #[test]
    fn by_category_is_case_insensitive() {
        let insights = InsightCatalog::built_in();
        let regulatory = insights.by_category("regulatory");
        assert_eq!(regulatory.len(), 1);
        assert_eq!(regulatory[0].id, "insight-006");
        assert_eq!(insights.by_category("REGULATORY").len(), 1);
        assert!(insights.by_category("Macro").is_empty());
    }

    #[test]
    fn search_covers_title_summary_and_tags() {
        let insights = InsightCatalog::built_in();

        // Matches in summaries, newest first
        let duty = insights.search("consumer duty");
        assert_eq!(duty.len(), 2);
        assert_eq!(duty[0].id, "insight-006");

        // Tag-only match
        let gap = insights.search("mind-the-gap");
        assert_eq!(gap.len(), 1);
        assert_eq!(gap[0].id, "insight-003");

        assert!(insights.search("cryptocurrency").is_empty());
    }

    #[test]
    fn search_is_case_insensitive_on_query() {
        let insights = InsightCatalog::built_in();
        assert_eq!(
            insights.search("FEES").len(),
            insights.search("fees").len()
        );
    }
}
