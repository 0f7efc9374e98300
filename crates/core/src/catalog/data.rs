//! The embedded MPS research universe: 5 providers, 17 model portfolios.
//!
//! This is a point-in-time data snapshot produced by an external ingestion
//! batch job. It is the only data source the library ships with; nothing at
//! runtime mutates it.

use chrono::NaiveDate;

use crate::models::portfolio::{
    AssetAllocation, FundType, GeographicAllocation, Portfolio, TimeHorizon, UnderlyingFund,
};
use crate::models::provider::{KeyPerson, Provider};

/// Adviser platforms covered by the universe.
pub fn platforms() -> Vec<String> {
    strs(&[
        "Transact",
        "Fundment",
        "Quilter",
        "Aegon",
        "abrdn",
        "Parmenion",
        "Aviva",
        "Standard Life",
    ])
}

/// Investment style tags used by provider records.
pub fn investment_styles() -> Vec<String> {
    strs(&["Passive", "Active", "Blended", "ESG/Ethical", "Multi-Manager"])
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn person(name: &str, role: &str) -> KeyPerson {
    KeyPerson {
        name: name.to_string(),
        role: role.to_string(),
    }
}

fn fund(name: &str, weight: f64, fund_type: FundType) -> UnderlyingFund {
    UnderlyingFund {
        name: name.to_string(),
        weight,
        fund_type,
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Provider metadata records.
pub fn providers() -> Vec<Provider> {
    vec![
        Provider {
            id: "vanguard".into(),
            name: "Vanguard".into(),
            full_name: "Vanguard Asset Management".into(),
            description: "Global leader in passive index investing, known for low-cost, \
                          broadly diversified portfolio solutions."
                .into(),
            aum_bn: 42.5,
            established: 1975,
            headquarters: "London / Valley Forge, PA".into(),
            investment_style: "Passive".into(),
            key_personnel: vec![
                person("Tim Buckley", "CEO"),
                person("Sean Hagerty", "Managing Director, Europe"),
            ],
            strengths: strs(&[
                "Industry-leading low costs across all risk profiles",
                "Extremely broad diversification through index-tracking approach",
                "Transparent, rules-based methodology with automatic rebalancing",
                "Consistent tracking of benchmarks with minimal tracking error",
            ]),
            considerations: strs(&[
                "No tactical flexibility – fully strategic allocation",
                "Limited ESG integration in core LifeStrategy range",
                "Single-manager approach with no external fund selection",
                "Currency exposure largely unhedged in equity allocation",
            ]),
            regulatory_status: "FCA Authorised".into(),
            website: "https://www.vanguardinvestor.co.uk".into(),
        },
        Provider {
            id: "7im".into(),
            name: "7IM".into(),
            full_name: "Seven Investment Management".into(),
            description: "Multi-asset specialist combining strategic allocation with active \
                          fund selection and alternatives exposure."
                .into(),
            aum_bn: 18.2,
            established: 2002,
            headquarters: "London".into(),
            investment_style: "Active".into(),
            key_personnel: vec![
                person("Dean Sherwood", "CEO"),
                person("Matthew Sheridan", "CIO"),
            ],
            strengths: strs(&[
                "Active asset allocation provides tactical flexibility",
                "Alternatives allocation adds diversification beyond traditional assets",
                "Strong investment team with institutional pedigree",
                "Comprehensive risk management framework with quarterly rebalancing",
            ]),
            considerations: strs(&[
                "Higher OCF compared to passive alternatives",
                "Active management introduces manager selection risk",
                "Limited platform availability vs peers",
                "Minimum investment threshold may exclude smaller portfolios",
            ]),
            regulatory_status: "FCA Authorised".into(),
            website: "https://www.7im.co.uk".into(),
        },
        Provider {
            id: "tatton".into(),
            name: "Tatton".into(),
            full_name: "Tatton Investment Management".into(),
            description: "Adviser-focused DFM specialising in low-cost passive portfolios \
                          with monthly rebalancing and broad platform coverage."
                .into(),
            aum_bn: 14.8,
            established: 2013,
            headquarters: "London".into(),
            investment_style: "Passive".into(),
            key_personnel: vec![
                person("Lothar Sherwood", "CEO"),
                person("Ricky Chan", "CIO"),
            ],
            strengths: strs(&[
                "Low-cost passive approach with institutional-quality implementation",
                "Monthly rebalancing provides tighter risk management",
                "Excellent platform coverage across major adviser platforms",
                "Strong adviser service model with dedicated support",
            ]),
            considerations: strs(&[
                "Relatively newer entrant compared to established managers",
                "Passive-only approach limits tactical positioning",
                "Portfolio construction relies heavily on Vanguard and iShares funds",
                "Limited alternatives exposure across risk profiles",
            ]),
            regulatory_status: "FCA Authorised".into(),
            website: "https://www.tattonim.com".into(),
        },
        Provider {
            id: "eq".into(),
            name: "EQ Investors".into(),
            full_name: "EQ Investors".into(),
            description: "Specialist ESG/ethical investment manager offering positive impact \
                          portfolios for values-aligned investors."
                .into(),
            aum_bn: 4.2,
            established: 2007,
            headquarters: "London".into(),
            investment_style: "ESG/Ethical".into(),
            key_personnel: vec![
                person("John Spiers", "CEO"),
                person("Damien Lardoux", "Head of Impact Investing"),
            ],
            strengths: strs(&[
                "Deep expertise in ethical and impact investing",
                "Rigorous ESG screening methodology with positive impact focus",
                "Strong narrative for clients with values-driven investment preferences",
                "Differentiated proposition in growing ESG market segment",
            ]),
            considerations: strs(&[
                "Higher OCF due to specialist fund selection",
                "Smaller AUM compared to mainstream providers",
                "ESG universe constraints may limit diversification",
                "Limited platform availability restricts access",
            ]),
            regulatory_status: "FCA Authorised".into(),
            website: "https://www.eqinvestors.co.uk".into(),
        },
        Provider {
            id: "parmenion".into(),
            name: "Parmenion".into(),
            full_name: "Parmenion Investment Management".into(),
            description: "Technology-led investment platform and DFM providing risk-graded \
                          portfolios with integrated adviser tools."
                .into(),
            aum_bn: 9.6,
            established: 2007,
            headquarters: "Bristol".into(),
            investment_style: "Blended".into(),
            key_personnel: vec![
                person("Michael Maydon", "Managing Director"),
                person("Martin Sherwood", "CIO"),
            ],
            strengths: strs(&[
                "Integrated technology platform reduces adviser operational burden",
                "Granular risk grading system across 10 risk levels",
                "Low minimum investment threshold (£1,000) supports smaller portfolios",
                "Blended active/passive approach offers cost-effective active management",
            ]),
            considerations: strs(&[
                "Primarily available on own platform, limiting choice for multi-platform firms",
                "Transact is only major third-party platform supported",
                "Blended approach may underperform in strongly trending markets",
                "Risk grading system differs from industry-standard ATR scales",
            ]),
            regulatory_status: "FCA Authorised".into(),
            website: "https://www.parmenion.co.uk".into(),
        },
    ]
}

/// The portfolio universe, grouped by provider.
pub fn portfolios() -> Vec<Portfolio> {
    let mut universe = Vec::new();
    universe.extend(vanguard());
    universe.extend(seven_im());
    universe.extend(eq_investors());
    universe.extend(tatton());
    universe.extend(parmenion());
    universe
}

fn vanguard() -> Vec<Portfolio> {
    vec![
        Portfolio {
            id: "vanguard-ls-20".into(),
            name: "Vanguard LifeStrategy 20% Equity".into(),
            provider: "Vanguard".into(),
            risk_rating: 3,
            risk_label: "Cautious".into(),
            asset_allocation: AssetAllocation { equity: 20.0, bonds: 80.0, alternatives: 0.0, cash: 0.0 },
            geographic_allocation: GeographicAllocation {
                uk: 18.0, north_america: 32.0, europe: 22.0,
                asia_pacific: 15.0, emerging_markets: 8.0, other: 5.0,
            },
            ocf: 0.22,
            return_1yr: Some(4.2),
            return_3yr: Some(8.1),
            return_5yr: Some(15.3),
            return_ytd: Some(2.1),
            return_since_inception: Some(42.8),
            volatility: 4.8,
            max_drawdown: -8.2,
            sharpe_ratio: 0.72,
            income_yield: 2.1,
            rebalancing: "Automatic".into(),
            min_investment: 500.0,
            platforms: strs(&["Transact", "Fundment", "Quilter", "Aegon", "abrdn"]),
            ethical: false,
            decumulation_suitable: true,
            time_horizons: vec![TimeHorizon::Short, TimeHorizon::Medium, TimeHorizon::Long],
            underlying_funds: vec![
                fund("Vanguard Global Bond Index", 60.0, FundType::Bond),
                fund("Vanguard UK Gilt UCITS ETF", 20.0, FundType::Bond),
                fund("Vanguard FTSE All-World UCITS ETF", 15.0, FundType::Equity),
                fund("Vanguard FTSE 100 UCITS ETF", 5.0, FundType::Equity),
            ],
            inception_date: ymd(2011, 6, 23),
            benchmark: "20% FTSE All-Share / 80% Bloomberg Barclays Global Aggregate".into(),
        },
        Portfolio {
            id: "vanguard-ls-40".into(),
            name: "Vanguard LifeStrategy 40% Equity".into(),
            provider: "Vanguard".into(),
            risk_rating: 4,
            risk_label: "Cautious-Moderate".into(),
            asset_allocation: AssetAllocation { equity: 40.0, bonds: 60.0, alternatives: 0.0, cash: 0.0 },
            geographic_allocation: GeographicAllocation {
                uk: 20.0, north_america: 30.0, europe: 20.0,
                asia_pacific: 16.0, emerging_markets: 9.0, other: 5.0,
            },
            ocf: 0.22,
            return_1yr: Some(6.1),
            return_3yr: Some(12.4),
            return_5yr: Some(22.8),
            return_ytd: Some(3.2),
            return_since_inception: Some(68.4),
            volatility: 6.8,
            max_drawdown: -12.4,
            sharpe_ratio: 0.78,
            income_yield: 1.8,
            rebalancing: "Automatic".into(),
            min_investment: 500.0,
            platforms: strs(&["Transact", "Fundment", "Quilter", "Aegon", "abrdn"]),
            ethical: false,
            decumulation_suitable: true,
            time_horizons: vec![TimeHorizon::Medium, TimeHorizon::Long],
            underlying_funds: vec![
                fund("Vanguard Global Bond Index", 44.0, FundType::Bond),
                fund("Vanguard UK Gilt UCITS ETF", 16.0, FundType::Bond),
                fund("Vanguard FTSE All-World UCITS ETF", 30.0, FundType::Equity),
                fund("Vanguard FTSE 100 UCITS ETF", 10.0, FundType::Equity),
            ],
            inception_date: ymd(2011, 6, 23),
            benchmark: "40% FTSE All-Share / 60% Bloomberg Barclays Global Aggregate".into(),
        },
        Portfolio {
            id: "vanguard-ls-60".into(),
            name: "Vanguard LifeStrategy 60% Equity".into(),
            provider: "Vanguard".into(),
            risk_rating: 5,
            risk_label: "Moderate".into(),
            asset_allocation: AssetAllocation { equity: 60.0, bonds: 40.0, alternatives: 0.0, cash: 0.0 },
            geographic_allocation: GeographicAllocation {
                uk: 22.0, north_america: 28.0, europe: 18.0,
                asia_pacific: 17.0, emerging_markets: 10.0, other: 5.0,
            },
            ocf: 0.22,
            return_1yr: Some(8.4),
            return_3yr: Some(18.2),
            return_5yr: Some(32.5),
            return_ytd: Some(4.6),
            return_since_inception: Some(98.2),
            volatility: 9.8,
            max_drawdown: -18.6,
            sharpe_ratio: 0.85,
            income_yield: 1.6,
            rebalancing: "Automatic".into(),
            min_investment: 500.0,
            platforms: strs(&["Transact", "Fundment", "Quilter", "Aegon", "abrdn"]),
            ethical: false,
            decumulation_suitable: true,
            time_horizons: vec![TimeHorizon::Medium, TimeHorizon::Long],
            underlying_funds: vec![
                fund("Vanguard FTSE All-World UCITS ETF", 45.0, FundType::Equity),
                fund("Vanguard FTSE 100 UCITS ETF", 15.0, FundType::Equity),
                fund("Vanguard Global Bond Index", 28.0, FundType::Bond),
                fund("Vanguard UK Gilt UCITS ETF", 12.0, FundType::Bond),
            ],
            inception_date: ymd(2011, 6, 23),
            benchmark: "60% FTSE All-Share / 40% Bloomberg Barclays Global Aggregate".into(),
        },
        Portfolio {
            id: "vanguard-ls-80".into(),
            name: "Vanguard LifeStrategy 80% Equity".into(),
            provider: "Vanguard".into(),
            risk_rating: 6,
            risk_label: "Moderate-Adventurous".into(),
            asset_allocation: AssetAllocation { equity: 80.0, bonds: 20.0, alternatives: 0.0, cash: 0.0 },
            geographic_allocation: GeographicAllocation {
                uk: 24.0, north_america: 28.0, europe: 16.0,
                asia_pacific: 18.0, emerging_markets: 10.0, other: 4.0,
            },
            ocf: 0.22,
            return_1yr: Some(10.2),
            return_3yr: Some(24.6),
            return_5yr: Some(42.1),
            return_ytd: Some(5.8),
            return_since_inception: Some(132.6),
            volatility: 12.4,
            max_drawdown: -24.2,
            sharpe_ratio: 0.88,
            income_yield: 1.4,
            rebalancing: "Automatic".into(),
            min_investment: 500.0,
            platforms: strs(&["Transact", "Fundment", "Quilter", "Aegon", "abrdn"]),
            ethical: false,
            decumulation_suitable: false,
            time_horizons: vec![TimeHorizon::Long],
            underlying_funds: vec![
                fund("Vanguard FTSE All-World UCITS ETF", 60.0, FundType::Equity),
                fund("Vanguard FTSE 100 UCITS ETF", 20.0, FundType::Equity),
                fund("Vanguard Global Bond Index", 14.0, FundType::Bond),
                fund("Vanguard UK Gilt UCITS ETF", 6.0, FundType::Bond),
            ],
            inception_date: ymd(2011, 6, 23),
            benchmark: "80% FTSE All-Share / 20% Bloomberg Barclays Global Aggregate".into(),
        },
        Portfolio {
            id: "vanguard-ls-100".into(),
            name: "Vanguard LifeStrategy 100% Equity".into(),
            provider: "Vanguard".into(),
            risk_rating: 7,
            risk_label: "Adventurous".into(),
            asset_allocation: AssetAllocation { equity: 100.0, bonds: 0.0, alternatives: 0.0, cash: 0.0 },
            geographic_allocation: GeographicAllocation {
                uk: 24.0, north_america: 30.0, europe: 15.0,
                asia_pacific: 18.0, emerging_markets: 10.0, other: 3.0,
            },
            ocf: 0.22,
            return_1yr: Some(12.4),
            return_3yr: Some(28.6),
            return_5yr: Some(52.1),
            return_ytd: Some(7.2),
            return_since_inception: Some(168.4),
            volatility: 14.2,
            max_drawdown: -32.4,
            sharpe_ratio: 0.92,
            income_yield: 1.2,
            rebalancing: "Automatic".into(),
            min_investment: 500.0,
            platforms: strs(&["Transact", "Fundment", "Quilter", "Aegon", "abrdn"]),
            ethical: false,
            decumulation_suitable: false,
            time_horizons: vec![TimeHorizon::Long],
            underlying_funds: vec![
                fund("Vanguard FTSE All-World UCITS ETF", 58.0, FundType::Equity),
                fund("Vanguard FTSE 100 UCITS ETF", 22.0, FundType::Equity),
                fund("Vanguard Emerging Markets Stock Index", 12.0, FundType::Equity),
                fund("Vanguard FTSE Developed Europe ex-UK", 8.0, FundType::Equity),
            ],
            inception_date: ymd(2011, 6, 23),
            benchmark: "FTSE All-Share".into(),
        },
    ]
}

fn seven_im() -> Vec<Portfolio> {
    vec![
        Portfolio {
            id: "7im-cautious".into(),
            name: "7IM Moderately Cautious".into(),
            provider: "7IM".into(),
            risk_rating: 4,
            risk_label: "Moderately Cautious".into(),
            asset_allocation: AssetAllocation { equity: 35.0, bonds: 55.0, alternatives: 10.0, cash: 0.0 },
            geographic_allocation: GeographicAllocation {
                uk: 22.0, north_america: 26.0, europe: 20.0,
                asia_pacific: 14.0, emerging_markets: 8.0, other: 10.0,
            },
            ocf: 0.54,
            return_1yr: Some(5.8),
            return_3yr: Some(11.2),
            return_5yr: Some(19.8),
            return_ytd: Some(2.8),
            return_since_inception: Some(52.4),
            volatility: 6.2,
            max_drawdown: -10.8,
            sharpe_ratio: 0.71,
            income_yield: 2.2,
            rebalancing: "Quarterly".into(),
            min_investment: 10_000.0,
            platforms: strs(&["Transact", "Quilter", "Aegon"]),
            ethical: false,
            decumulation_suitable: true,
            time_horizons: vec![TimeHorizon::Medium, TimeHorizon::Long],
            underlying_funds: vec![
                fund("7IM UK Equity Value", 12.0, FundType::Equity),
                fund("7IM US Equity Value", 10.0, FundType::Equity),
                fund("7IM International Equity", 13.0, FundType::Equity),
                fund("7IM Sterling Bond", 35.0, FundType::Bond),
                fund("7IM Global Bond", 20.0, FundType::Bond),
                fund("7IM Alternative Strategies", 10.0, FundType::Alternative),
            ],
            inception_date: ymd(2014, 3, 15),
            benchmark: "IA Mixed Investment 20-60% Shares".into(),
        },
        Portfolio {
            id: "7im-balanced".into(),
            name: "7IM Balanced".into(),
            provider: "7IM".into(),
            risk_rating: 5,
            risk_label: "Balanced".into(),
            asset_allocation: AssetAllocation { equity: 55.0, bonds: 35.0, alternatives: 10.0, cash: 0.0 },
            geographic_allocation: GeographicAllocation {
                uk: 20.0, north_america: 28.0, europe: 18.0,
                asia_pacific: 16.0, emerging_markets: 10.0, other: 8.0,
            },
            ocf: 0.54,
            return_1yr: Some(7.6),
            return_3yr: Some(16.8),
            return_5yr: Some(28.4),
            return_ytd: Some(3.8),
            return_since_inception: Some(72.6),
            volatility: 9.4,
            max_drawdown: -16.2,
            sharpe_ratio: 0.79,
            income_yield: 1.8,
            rebalancing: "Quarterly".into(),
            min_investment: 10_000.0,
            platforms: strs(&["Transact", "Quilter", "Aegon"]),
            ethical: false,
            decumulation_suitable: true,
            time_horizons: vec![TimeHorizon::Medium, TimeHorizon::Long],
            underlying_funds: vec![
                fund("7IM UK Equity Value", 18.0, FundType::Equity),
                fund("7IM US Equity Value", 15.0, FundType::Equity),
                fund("7IM International Equity", 22.0, FundType::Equity),
                fund("7IM Sterling Bond", 20.0, FundType::Bond),
                fund("7IM Global Bond", 15.0, FundType::Bond),
                fund("7IM Alternative Strategies", 10.0, FundType::Alternative),
            ],
            inception_date: ymd(2014, 3, 15),
            benchmark: "IA Mixed Investment 40-85% Shares".into(),
        },
        Portfolio {
            id: "7im-adventurous".into(),
            name: "7IM Moderately Adventurous".into(),
            provider: "7IM".into(),
            risk_rating: 6,
            risk_label: "Moderately Adventurous".into(),
            asset_allocation: AssetAllocation { equity: 75.0, bonds: 15.0, alternatives: 10.0, cash: 0.0 },
            geographic_allocation: GeographicAllocation {
                uk: 18.0, north_america: 30.0, europe: 16.0,
                asia_pacific: 18.0, emerging_markets: 12.0, other: 6.0,
            },
            ocf: 0.54,
            return_1yr: Some(9.8),
            return_3yr: Some(22.4),
            return_5yr: Some(38.6),
            return_ytd: Some(5.2),
            return_since_inception: Some(96.8),
            volatility: 12.8,
            max_drawdown: -22.6,
            sharpe_ratio: 0.82,
            income_yield: 1.4,
            rebalancing: "Quarterly".into(),
            min_investment: 10_000.0,
            platforms: strs(&["Transact", "Quilter", "Aegon"]),
            ethical: false,
            decumulation_suitable: false,
            time_horizons: vec![TimeHorizon::Long],
            underlying_funds: vec![
                fund("7IM UK Equity Value", 22.0, FundType::Equity),
                fund("7IM US Equity Value", 20.0, FundType::Equity),
                fund("7IM International Equity", 18.0, FundType::Equity),
                fund("7IM Emerging Markets Equity", 15.0, FundType::Equity),
                fund("7IM Sterling Bond", 10.0, FundType::Bond),
                fund("7IM Alternative Strategies", 10.0, FundType::Alternative),
                fund("7IM Global Bond", 5.0, FundType::Bond),
            ],
            inception_date: ymd(2014, 3, 15),
            benchmark: "IA Flexible Investment".into(),
        },
    ]
}

fn eq_investors() -> Vec<Portfolio> {
    vec![
        Portfolio {
            id: "eq-cautious".into(),
            name: "EQ Positive Impact Cautious".into(),
            provider: "EQ Investors".into(),
            risk_rating: 4,
            risk_label: "Cautious".into(),
            asset_allocation: AssetAllocation { equity: 40.0, bonds: 55.0, alternatives: 5.0, cash: 0.0 },
            geographic_allocation: GeographicAllocation {
                uk: 28.0, north_america: 24.0, europe: 22.0,
                asia_pacific: 12.0, emerging_markets: 8.0, other: 6.0,
            },
            ocf: 0.68,
            return_1yr: Some(5.2),
            return_3yr: Some(10.8),
            return_5yr: Some(18.6),
            return_ytd: Some(2.4),
            return_since_inception: Some(38.2),
            volatility: 6.8,
            max_drawdown: -11.4,
            sharpe_ratio: 0.65,
            income_yield: 1.6,
            rebalancing: "Quarterly".into(),
            min_investment: 5_000.0,
            platforms: strs(&["Transact", "Fundment"]),
            ethical: true,
            decumulation_suitable: true,
            time_horizons: vec![TimeHorizon::Medium, TimeHorizon::Long],
            underlying_funds: vec![
                fund("Impax Environmental Markets", 15.0, FundType::Equity),
                fund("Liontrust Sustainable Future Corporate Bond", 25.0, FundType::Bond),
                fund("Rathbone Ethical Bond", 20.0, FundType::Bond),
                fund("Stewart Investors Worldwide Sustainability", 15.0, FundType::Equity),
                fund("Triodos Pioneer Impact", 10.0, FundType::Equity),
                fund("FP WHEB Sustainability", 10.0, FundType::Bond),
                fund("Greencoat UK Wind", 5.0, FundType::Alternative),
            ],
            inception_date: ymd(2017, 9, 1),
            benchmark: "IA Mixed Investment 20-60% Shares (Ethical)".into(),
        },
        Portfolio {
            id: "eq-balanced".into(),
            name: "EQ Positive Impact Balanced".into(),
            provider: "EQ Investors".into(),
            risk_rating: 5,
            risk_label: "Balanced".into(),
            asset_allocation: AssetAllocation { equity: 60.0, bonds: 35.0, alternatives: 5.0, cash: 0.0 },
            geographic_allocation: GeographicAllocation {
                uk: 26.0, north_america: 26.0, europe: 20.0,
                asia_pacific: 14.0, emerging_markets: 8.0, other: 6.0,
            },
            ocf: 0.68,
            return_1yr: Some(7.4),
            return_3yr: Some(15.2),
            return_5yr: Some(26.4),
            return_ytd: Some(3.4),
            return_since_inception: Some(54.8),
            volatility: 10.2,
            max_drawdown: -17.8,
            sharpe_ratio: 0.72,
            income_yield: 1.2,
            rebalancing: "Quarterly".into(),
            min_investment: 5_000.0,
            platforms: strs(&["Transact", "Fundment"]),
            ethical: true,
            decumulation_suitable: true,
            time_horizons: vec![TimeHorizon::Medium, TimeHorizon::Long],
            underlying_funds: vec![
                fund("Impax Environmental Markets", 20.0, FundType::Equity),
                fund("Stewart Investors Worldwide Sustainability", 20.0, FundType::Equity),
                fund("Liontrust Sustainable Future Corporate Bond", 18.0, FundType::Bond),
                fund("Rathbone Ethical Bond", 12.0, FundType::Bond),
                fund("Triodos Pioneer Impact", 10.0, FundType::Equity),
                fund("Baillie Gifford Positive Change", 10.0, FundType::Equity),
                fund("Greencoat UK Wind", 5.0, FundType::Alternative),
                fund("FP WHEB Sustainability", 5.0, FundType::Bond),
            ],
            inception_date: ymd(2017, 9, 1),
            benchmark: "IA Mixed Investment 40-85% Shares (Ethical)".into(),
        },
        Portfolio {
            id: "eq-adventurous".into(),
            name: "EQ Positive Impact Adventurous".into(),
            provider: "EQ Investors".into(),
            risk_rating: 7,
            risk_label: "Adventurous".into(),
            asset_allocation: AssetAllocation { equity: 90.0, bonds: 5.0, alternatives: 5.0, cash: 0.0 },
            geographic_allocation: GeographicAllocation {
                uk: 22.0, north_america: 28.0, europe: 18.0,
                asia_pacific: 16.0, emerging_markets: 12.0, other: 4.0,
            },
            ocf: 0.68,
            return_1yr: Some(10.2),
            return_3yr: Some(21.8),
            return_5yr: Some(42.2),
            return_ytd: Some(5.6),
            return_since_inception: Some(82.4),
            volatility: 15.4,
            max_drawdown: -28.6,
            sharpe_ratio: 0.78,
            income_yield: 0.6,
            rebalancing: "Quarterly".into(),
            min_investment: 5_000.0,
            platforms: strs(&["Transact", "Fundment"]),
            ethical: true,
            decumulation_suitable: false,
            time_horizons: vec![TimeHorizon::Long],
            underlying_funds: vec![
                fund("Impax Environmental Markets", 25.0, FundType::Equity),
                fund("Baillie Gifford Positive Change", 22.0, FundType::Equity),
                fund("Stewart Investors Worldwide Sustainability", 20.0, FundType::Equity),
                fund("Triodos Pioneer Impact", 13.0, FundType::Equity),
                fund("FP WHEB Sustainability", 10.0, FundType::Equity),
                fund("Greencoat UK Wind", 5.0, FundType::Alternative),
                fund("Rathbone Ethical Bond", 5.0, FundType::Bond),
            ],
            inception_date: ymd(2017, 9, 1),
            benchmark: "IA Flexible Investment (Ethical)".into(),
        },
    ]
}

fn tatton() -> Vec<Portfolio> {
    vec![
        Portfolio {
            id: "tatton-cautious".into(),
            name: "Tatton Passive Cautious".into(),
            provider: "Tatton".into(),
            risk_rating: 3,
            risk_label: "Cautious".into(),
            asset_allocation: AssetAllocation { equity: 25.0, bonds: 70.0, alternatives: 5.0, cash: 0.0 },
            geographic_allocation: GeographicAllocation {
                uk: 25.0, north_america: 24.0, europe: 22.0,
                asia_pacific: 14.0, emerging_markets: 8.0, other: 7.0,
            },
            ocf: 0.30,
            return_1yr: Some(4.6),
            return_3yr: Some(9.2),
            return_5yr: Some(16.8),
            return_ytd: Some(2.2),
            return_since_inception: Some(28.4),
            volatility: 5.2,
            max_drawdown: -9.4,
            sharpe_ratio: 0.74,
            income_yield: 2.4,
            rebalancing: "Monthly".into(),
            min_investment: 5_000.0,
            platforms: strs(&["Transact", "Fundment", "Quilter", "abrdn"]),
            ethical: false,
            decumulation_suitable: true,
            time_horizons: vec![TimeHorizon::Short, TimeHorizon::Medium, TimeHorizon::Long],
            underlying_funds: vec![
                fund("iShares Core UK Gilts UCITS ETF", 35.0, FundType::Bond),
                fund("Vanguard Global Bond Index", 25.0, FundType::Bond),
                fund("iShares Corp Bond 0-5yr UCITS ETF", 10.0, FundType::Bond),
                fund("Vanguard FTSE All-World UCITS ETF", 18.0, FundType::Equity),
                fund("iShares UK Property UCITS ETF", 5.0, FundType::Alternative),
                fund("Vanguard FTSE 100 UCITS ETF", 7.0, FundType::Equity),
            ],
            inception_date: ymd(2015, 1, 12),
            benchmark: "ARC Cautious PCI".into(),
        },
        Portfolio {
            id: "tatton-balanced".into(),
            name: "Tatton Passive Balanced".into(),
            provider: "Tatton".into(),
            risk_rating: 5,
            risk_label: "Balanced".into(),
            asset_allocation: AssetAllocation { equity: 55.0, bonds: 40.0, alternatives: 5.0, cash: 0.0 },
            geographic_allocation: GeographicAllocation {
                uk: 22.0, north_america: 28.0, europe: 18.0,
                asia_pacific: 16.0, emerging_markets: 10.0, other: 6.0,
            },
            ocf: 0.30,
            return_1yr: Some(7.8),
            return_3yr: Some(17.4),
            return_5yr: Some(30.2),
            return_ytd: Some(4.0),
            return_since_inception: Some(58.6),
            volatility: 9.6,
            max_drawdown: -16.8,
            sharpe_ratio: 0.82,
            income_yield: 1.6,
            rebalancing: "Monthly".into(),
            min_investment: 5_000.0,
            platforms: strs(&["Transact", "Fundment", "Quilter", "abrdn"]),
            ethical: false,
            decumulation_suitable: true,
            time_horizons: vec![TimeHorizon::Medium, TimeHorizon::Long],
            underlying_funds: vec![
                fund("Vanguard FTSE All-World UCITS ETF", 35.0, FundType::Equity),
                fund("Vanguard FTSE 100 UCITS ETF", 12.0, FundType::Equity),
                fund("iShares Core UK Gilts UCITS ETF", 20.0, FundType::Bond),
                fund("Vanguard Global Bond Index", 15.0, FundType::Bond),
                fund("iShares Emerging Markets Equity", 8.0, FundType::Equity),
                fund("iShares Corp Bond 0-5yr UCITS ETF", 5.0, FundType::Bond),
                fund("iShares UK Property UCITS ETF", 5.0, FundType::Alternative),
            ],
            inception_date: ymd(2015, 1, 12),
            benchmark: "ARC Balanced Asset PCI".into(),
        },
        Portfolio {
            id: "tatton-growth".into(),
            name: "Tatton Passive Growth".into(),
            provider: "Tatton".into(),
            risk_rating: 7,
            risk_label: "Growth".into(),
            asset_allocation: AssetAllocation { equity: 85.0, bonds: 10.0, alternatives: 5.0, cash: 0.0 },
            geographic_allocation: GeographicAllocation {
                uk: 20.0, north_america: 30.0, europe: 15.0,
                asia_pacific: 18.0, emerging_markets: 12.0, other: 5.0,
            },
            ocf: 0.30,
            return_1yr: Some(11.2),
            return_3yr: Some(26.2),
            return_5yr: Some(48.4),
            return_ytd: Some(6.4),
            return_since_inception: Some(102.6),
            volatility: 14.6,
            max_drawdown: -28.2,
            sharpe_ratio: 0.88,
            income_yield: 1.0,
            rebalancing: "Monthly".into(),
            min_investment: 5_000.0,
            platforms: strs(&["Transact", "Fundment", "Quilter", "abrdn"]),
            ethical: false,
            decumulation_suitable: false,
            time_horizons: vec![TimeHorizon::Long],
            underlying_funds: vec![
                fund("Vanguard FTSE All-World UCITS ETF", 45.0, FundType::Equity),
                fund("Vanguard S&P 500 UCITS ETF", 15.0, FundType::Equity),
                fund("Vanguard FTSE 100 UCITS ETF", 12.0, FundType::Equity),
                fund("iShares Emerging Markets Equity", 13.0, FundType::Equity),
                fund("iShares Core UK Gilts UCITS ETF", 6.0, FundType::Bond),
                fund("Vanguard Global Bond Index", 4.0, FundType::Bond),
                fund("iShares UK Property UCITS ETF", 5.0, FundType::Alternative),
            ],
            inception_date: ymd(2015, 1, 12),
            benchmark: "ARC Equity Risk PCI".into(),
        },
    ]
}

fn parmenion() -> Vec<Portfolio> {
    vec![
        Portfolio {
            id: "parmenion-3".into(),
            name: "Parmenion Risk Grade 3".into(),
            provider: "Parmenion".into(),
            risk_rating: 3,
            risk_label: "Cautious".into(),
            asset_allocation: AssetAllocation { equity: 30.0, bonds: 65.0, alternatives: 5.0, cash: 0.0 },
            geographic_allocation: GeographicAllocation {
                uk: 24.0, north_america: 22.0, europe: 22.0,
                asia_pacific: 14.0, emerging_markets: 10.0, other: 8.0,
            },
            ocf: 0.35,
            return_1yr: Some(4.8),
            return_3yr: Some(9.6),
            return_5yr: Some(17.2),
            return_ytd: Some(2.4),
            return_since_inception: Some(32.8),
            volatility: 5.4,
            max_drawdown: -9.8,
            sharpe_ratio: 0.72,
            income_yield: 2.2,
            rebalancing: "Quarterly".into(),
            min_investment: 1_000.0,
            platforms: strs(&["Transact", "Parmenion"]),
            ethical: false,
            decumulation_suitable: true,
            time_horizons: vec![TimeHorizon::Short, TimeHorizon::Medium, TimeHorizon::Long],
            underlying_funds: vec![
                fund("L&G UK Index Trust", 14.0, FundType::Equity),
                fund("Vanguard Global Bond Index", 30.0, FundType::Bond),
                fund("L&G All Stocks Gilt Index Trust", 20.0, FundType::Bond),
                fund("HSBC FTSE All-World Index", 10.0, FundType::Equity),
                fund("L&G Short Dated Sterling Corp Bond", 15.0, FundType::Bond),
                fund("Royal London Short Duration Global", 6.0, FundType::Equity),
                fund("iShares UK Property UCITS ETF", 5.0, FundType::Alternative),
            ],
            inception_date: ymd(2012, 6, 1),
            benchmark: "ARC Cautious PCI".into(),
        },
        Portfolio {
            id: "parmenion-5".into(),
            name: "Parmenion Risk Grade 5".into(),
            provider: "Parmenion".into(),
            risk_rating: 5,
            risk_label: "Balanced".into(),
            asset_allocation: AssetAllocation { equity: 55.0, bonds: 40.0, alternatives: 5.0, cash: 0.0 },
            geographic_allocation: GeographicAllocation {
                uk: 22.0, north_america: 26.0, europe: 20.0,
                asia_pacific: 16.0, emerging_markets: 10.0, other: 6.0,
            },
            ocf: 0.35,
            return_1yr: Some(7.4),
            return_3yr: Some(16.2),
            return_5yr: Some(28.8),
            return_ytd: Some(3.6),
            return_since_inception: Some(62.4),
            volatility: 9.2,
            max_drawdown: -16.4,
            sharpe_ratio: 0.78,
            income_yield: 1.6,
            rebalancing: "Quarterly".into(),
            min_investment: 1_000.0,
            platforms: strs(&["Transact", "Parmenion"]),
            ethical: false,
            decumulation_suitable: true,
            time_horizons: vec![TimeHorizon::Medium, TimeHorizon::Long],
            underlying_funds: vec![
                fund("Vanguard FTSE All-World UCITS ETF", 28.0, FundType::Equity),
                fund("L&G UK Index Trust", 16.0, FundType::Equity),
                fund("HSBC FTSE All-World Index", 11.0, FundType::Equity),
                fund("Vanguard Global Bond Index", 20.0, FundType::Bond),
                fund("L&G All Stocks Gilt Index Trust", 12.0, FundType::Bond),
                fund("L&G Short Dated Sterling Corp Bond", 8.0, FundType::Bond),
                fund("iShares UK Property UCITS ETF", 5.0, FundType::Alternative),
            ],
            inception_date: ymd(2012, 6, 1),
            benchmark: "ARC Balanced Asset PCI".into(),
        },
        Portfolio {
            id: "parmenion-8".into(),
            name: "Parmenion Risk Grade 8".into(),
            provider: "Parmenion".into(),
            risk_rating: 8,
            risk_label: "Adventurous".into(),
            asset_allocation: AssetAllocation { equity: 95.0, bonds: 0.0, alternatives: 5.0, cash: 0.0 },
            geographic_allocation: GeographicAllocation {
                uk: 18.0, north_america: 30.0, europe: 14.0,
                asia_pacific: 18.0, emerging_markets: 14.0, other: 6.0,
            },
            ocf: 0.35,
            return_1yr: Some(12.8),
            return_3yr: Some(28.4),
            return_5yr: Some(54.2),
            return_ytd: Some(7.4),
            return_since_inception: Some(118.6),
            volatility: 16.2,
            max_drawdown: -34.2,
            sharpe_ratio: 0.86,
            income_yield: 0.8,
            rebalancing: "Quarterly".into(),
            min_investment: 1_000.0,
            platforms: strs(&["Transact", "Parmenion"]),
            ethical: false,
            decumulation_suitable: false,
            time_horizons: vec![TimeHorizon::Long],
            underlying_funds: vec![
                fund("Vanguard FTSE All-World UCITS ETF", 35.0, FundType::Equity),
                fund("L&G UK Index Trust", 15.0, FundType::Equity),
                fund("iShares Emerging Markets Equity", 15.0, FundType::Equity),
                fund("HSBC FTSE All-World Index", 12.0, FundType::Equity),
                fund("Vanguard S&P 500 UCITS ETF", 10.0, FundType::Equity),
                fund("L&G Pacific Index Trust", 8.0, FundType::Equity),
                fund("iShares UK Property UCITS ETF", 5.0, FundType::Alternative),
            ],
            inception_date: ymd(2012, 6, 1),
            benchmark: "ARC Equity Risk PCI".into(),
        },
    ]
}
