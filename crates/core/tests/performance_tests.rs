// ═══════════════════════════════════════════════════════════════════
// Performance Tests — simulated history determinism, shape, and the
// unknown-portfolio edge case
// ═══════════════════════════════════════════════════════════════════

use chrono::{Duration, NaiveDate};

use bridge_core::catalog::Catalog;
use bridge_core::services::performance_service::PerformanceService;

fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod shape {
    use super::*;

    #[test]
    fn thirty_six_months_yields_thirty_six_points() {
        let catalog = Catalog::built_in().unwrap();
        let svc = PerformanceService::new();

        let history = svc
            .history_as_of(&catalog, "vanguard-ls-60", 36, make_date(2026, 8, 1))
            .unwrap();
        assert_eq!(history.portfolio_id, "vanguard-ls-60");
        assert_eq!(history.points.len(), 36);
    }

    #[test]
    fn points_are_oldest_first_ending_one_period_before_as_of() {
        let catalog = Catalog::built_in().unwrap();
        let svc = PerformanceService::new();
        let as_of = make_date(2026, 8, 1);

        let history = svc
            .history_as_of(&catalog, "tatton-balanced", 12, as_of)
            .unwrap();

        for pair in history.points.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        let last = history.points.last().unwrap();
        assert_eq!(last.date, as_of - Duration::days(30));
        let first = history.points.first().unwrap();
        assert_eq!(first.date, as_of - Duration::days(12 * 30));
    }

    #[test]
    fn values_are_rounded_to_two_decimals() {
        let catalog = Catalog::built_in().unwrap();
        let svc = PerformanceService::new();

        let history = svc
            .history_as_of(&catalog, "parmenion-8", 24, make_date(2026, 8, 1))
            .unwrap();
        for point in &history.points {
            assert_eq!(point.value, (point.value * 100.0).round() / 100.0);
            assert_eq!(
                point.monthly_return,
                (point.monthly_return * 100.0).round() / 100.0
            );
        }
    }

    #[test]
    fn every_series_is_flagged_as_simulated() {
        let catalog = Catalog::built_in().unwrap();
        let svc = PerformanceService::new();

        let history = svc
            .history_as_of(&catalog, "7im-balanced", 6, make_date(2026, 8, 1))
            .unwrap();
        assert!(history.simulated);
    }
}

mod determinism {
    use super::*;

    #[test]
    fn same_portfolio_and_window_always_yields_the_same_series() {
        let catalog = Catalog::built_in().unwrap();
        let svc = PerformanceService::new();
        let as_of = make_date(2026, 8, 1);

        let a = svc
            .history_as_of(&catalog, "eq-balanced", 36, as_of)
            .unwrap();
        let b = svc
            .history_as_of(&catalog, "eq-balanced", 36, as_of)
            .unwrap();
        assert_eq!(a.points, b.points);
    }

    #[test]
    fn different_portfolios_yield_different_series() {
        let catalog = Catalog::built_in().unwrap();
        let svc = PerformanceService::new();
        let as_of = make_date(2026, 8, 1);

        let a = svc
            .history_as_of(&catalog, "vanguard-ls-20", 36, as_of)
            .unwrap();
        let b = svc
            .history_as_of(&catalog, "vanguard-ls-100", 36, as_of)
            .unwrap();
        assert_ne!(a.points, b.points);
    }

    #[test]
    fn longer_window_extends_the_same_draw_sequence_length() {
        let catalog = Catalog::built_in().unwrap();
        let svc = PerformanceService::new();
        let as_of = make_date(2026, 8, 1);

        let short = svc
            .history_as_of(&catalog, "tatton-growth", 6, as_of)
            .unwrap();
        let long = svc
            .history_as_of(&catalog, "tatton-growth", 60, as_of)
            .unwrap();
        assert_eq!(short.points.len(), 6);
        assert_eq!(long.points.len(), 60);
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn unknown_portfolio_yields_an_empty_simulated_series() {
        let catalog = Catalog::built_in().unwrap();
        let svc = PerformanceService::new();

        let history = svc
            .history_as_of(&catalog, "no-such-portfolio", 36, make_date(2026, 8, 1))
            .unwrap();
        assert_eq!(history.portfolio_id, "no-such-portfolio");
        assert!(history.is_empty());
        assert!(history.simulated);
    }

    #[test]
    fn zero_months_yields_an_empty_series_for_a_known_portfolio() {
        let catalog = Catalog::built_in().unwrap();
        let svc = PerformanceService::new();

        let history = svc
            .history_as_of(&catalog, "vanguard-ls-60", 0, make_date(2026, 8, 1))
            .unwrap();
        assert!(history.points.is_empty());
    }

    #[test]
    fn history_ending_today_has_the_requested_length() {
        let catalog = Catalog::built_in().unwrap();
        let svc = PerformanceService::new();

        let history = svc.history(&catalog, "parmenion-3", 12).unwrap();
        assert_eq!(history.points.len(), 12);
    }
}
