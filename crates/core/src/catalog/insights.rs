//! Research insights: static article catalog with category/tag search.

use chrono::NaiveDate;

use crate::models::insight::Insight;

/// Static catalog of research articles and market commentary.
///
/// Read-only; every listing comes back newest first.
#[derive(Debug, Clone)]
pub struct InsightCatalog {
    insights: Vec<Insight>,
}

impl InsightCatalog {
    pub fn new(insights: Vec<Insight>) -> Self {
        Self { insights }
    }

    /// The articles shipped with the library.
    pub fn built_in() -> Self {
        Self::new(built_in_insights())
    }

    /// All insights, newest first.
    #[must_use]
    pub fn all(&self) -> Vec<&Insight> {
        let mut insights: Vec<&Insight> = self.insights.iter().collect();
        insights.sort_by(|a, b| b.date.cmp(&a.date));
        insights
    }

    #[must_use]
    pub fn insight(&self, id: &str) -> Option<&Insight> {
        self.insights.iter().find(|i| i.id == id)
    }

    /// Insights in a category (case-insensitive), newest first.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Insight> {
        let wanted = category.to_lowercase();
        let mut insights: Vec<&Insight> = self
            .insights
            .iter()
            .filter(|i| i.category.to_lowercase() == wanted)
            .collect();
        insights.sort_by(|a, b| b.date.cmp(&a.date));
        insights
    }

    /// Distinct category names, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for insight in &self.insights {
            if !categories.contains(&insight.category) {
                categories.push(insight.category.clone());
            }
        }
        categories
    }

    /// Case-insensitive substring search over title, summary, and tags.
    /// Tags are matched as stored (the built-in set is all lowercase);
    /// only the query, title, and summary are lowercased.
    /// Results come back newest first.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Insight> {
        let q = query.to_lowercase();
        let mut results: Vec<&Insight> = self
            .insights
            .iter()
            .filter(|i| {
                i.title.to_lowercase().contains(&q)
                    || i.summary.to_lowercase().contains(&q)
                    || i.tags.iter().any(|t| t.contains(&q))
            })
            .collect();
        results.sort_by(|a, b| b.date.cmp(&a.date));
        results
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.insights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn built_in_insights() -> Vec<Insight> {
    vec![
        Insight {
            id: "insight-001".into(),
            title: "MPS Selection: A Flawed Formula?".into(),
            category: "Thematic Analysis".into(),
            date: ymd(2026, 1, 10),
            author: "Bridge Research".into(),
            summary: "No correlation exists between past and future MPS performance. \
                      Selecting top performers from the past three years would have \
                      resulted in below-average returns going forward."
                .into(),
            content: "Performance is typically the top priority when advisers select an \
                      MPS provider, yet the data shows no correlation between where a \
                      balanced MPS ranked over one three-year period and where it ranked \
                      over the next. Back-testing the approach of always holding the \
                      previous three-year winner produced below-average returns over the \
                      nine years to the end of 2024.\n\nConcentrated factor exposure, \
                      allocation at the edge of a risk-level range, and differing \
                      strategic asset allocation processes all drive mean reversion — \
                      which is why understanding return drivers matters more than \
                      league tables."
                .into(),
            tags: tags(&["mps-selection", "performance", "back-testing", "consumer-duty"]),
            read_time_minutes: 6,
        },
        Insight {
            id: "insight-002".into(),
            title: "Putting MPS Management Fees into Perspective".into(),
            category: "Thematic Analysis".into(),
            date: ymd(2026, 1, 24),
            author: "Bridge Research".into(),
            summary: "MPS fees make up a small fraction of long-term client returns. \
                      Understanding the depth of the investment process matters more \
                      than headline cost comparisons."
                .into(),
            content: "Over the last 10 years the average balanced MPS generated an \
                      annualised net return of 4.75%, against an average management fee \
                      of 0.18%. The dispersion in outcomes dwarfs the dispersion in \
                      fees: the best annualised net returns were 6.0%, the worst 3.8%.\n\n\
                      Fees should partially reflect the depth of the investment process \
                      underneath the standard process diagram — and providers must \
                      evidence that the decisions that depth enables actually add value."
                .into(),
            tags: tags(&["fees", "cost-analysis", "investment-process", "value-for-money"]),
            read_time_minutes: 5,
        },
        Insight {
            id: "insight-003".into(),
            title: "Active Fund Performance Isn't Necessarily the Problem".into(),
            category: "Thematic Analysis".into(),
            date: ymd(2026, 2, 3),
            author: "Bridge Research".into(),
            summary: "Investor returns often lag fund returns due to poor timing of \
                      buy/sell decisions. Understanding this gap is crucial for \
                      assessing MPS provider fund selection skill."
                .into(),
            content: "Morningstar's Mind the Gap study shows investors earned roughly \
                      6.3% per year over a 10-year period against 7.3% for the average \
                      fund — a persistent shortfall of about 1.1% per year, explained by \
                      return-chasing flows: buy high, sell low.\n\nFor advisers \
                      outsourcing to MPS providers this means digging deeper than \
                      headline numbers: how do underlying funds perform versus \
                      benchmarks, and does the timing of fund selection changes add or \
                      detract from performance?"
                .into(),
            tags: tags(&[
                "active-vs-passive",
                "fund-selection",
                "behavioural-finance",
                "mind-the-gap",
            ]),
            read_time_minutes: 5,
        },
        Insight {
            id: "insight-004".into(),
            title: "The Global vs UK Story in Multi Asset Portfolios".into(),
            category: "Thematic Analysis".into(),
            date: ymd(2026, 2, 7),
            author: "Bridge Research".into(),
            summary: "Global outperformance over UK extends beyond equities into fixed \
                      income, creating a powerful tailwind for globally-biased MPS \
                      propositions."
                .into(),
            content: "Global equities have substantially outpaced their UK counterparts \
                      in recent years — and the story doesn't stop there. Global fixed \
                      income has also materially outperformed UK fixed income, driven by \
                      duration effects, currency tailwinds and a broader opportunity \
                      set rather than higher credit risk.\n\nThe combined effect explains \
                      why many globally biased MPS propositions sit at the top of \
                      performance tables. Much of the return dispersion comes down to \
                      geographic allocation differences rather than genuine skill."
                .into(),
            tags: tags(&[
                "uk-vs-global",
                "asset-allocation",
                "fixed-income",
                "performance-attribution",
            ]),
            read_time_minutes: 5,
        },
        Insight {
            id: "insight-005".into(),
            title: "Why MPS is Preferred Over Multi-Asset Funds".into(),
            category: "Thematic Analysis".into(),
            date: ymd(2026, 2, 10),
            author: "Bridge Research".into(),
            summary: "MPS has overtaken multi-asset funds as the default solution for UK \
                      advisers, driven by superior service, converging costs, and \
                      regulatory alignment under Consumer Duty."
                .into(),
            content: "Model Portfolio Services have overtaken multi-asset funds as the \
                      primary outsourced investment solution. In a 2024 IFA Magazine \
                      poll, 67.7% of advisers said they already use MPS and 89.9% \
                      highlighted service levels as the most important feature.\n\nCosts \
                      have converged — the median MPS management charge now sits around \
                      0.15-0.20% — and the CGT point is largely irrelevant when 90% of \
                      gross sales into models come via ISAs and pensions. The \"S\" in \
                      Managed Portfolio Services now stands for far more than a \
                      collection of funds."
                .into(),
            tags: tags(&[
                "mps-vs-maf",
                "multi-asset",
                "service",
                "consumer-duty",
                "cost-analysis",
            ]),
            read_time_minutes: 7,
        },
        Insight {
            id: "insight-006".into(),
            title: "Consumer Duty and MPS: Why Due Diligence Alone Isn't Enough".into(),
            category: "Regulatory".into(),
            date: ymd(2026, 2, 14),
            author: "Bridge Research".into(),
            summary: "Under Consumer Duty, outsourcing to an MPS doesn't mean outsourcing \
                      responsibility. Advisers need genuine, outcome-focused research \
                      beyond tick-box due diligence."
                .into(),
            content: "Due diligence primarily answers \"is this provider credible and \
                      well-run?\". Consumer Duty asks a different question: \"is this \
                      solution appropriate and delivering good outcomes for my \
                      clients?\". FG22/5 makes clear that firms remain accountable for \
                      customer outcomes throughout the distribution chain.\n\nIn practice \
                      that means evidencing why a particular MPS was selected, which \
                      client segments it suits, how it delivers value, and how outcomes \
                      are monitored — on an ongoing basis, aligned with CIP reviews."
                .into(),
            tags: tags(&["consumer-duty", "regulation", "fca", "due-diligence", "oversight"]),
            read_time_minutes: 6,
        },
    ]
}
