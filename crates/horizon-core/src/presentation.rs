//! Chart and dashboard data for a rendered view of a [`FinancialPlan`].
//!
//! Nothing here draws; it shapes engine output into the series a charting
//! front end plots.

use serde::{Deserialize, Serialize};

use crate::engine::{FinancialPlan, SavingsBurden};
use crate::format::{format_currency, format_percent, format_thousands};
use crate::profile::ClientProfile;
use crate::types::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarMeasure {
    Relative,
    Total,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterfallBar {
    pub label: String,
    pub measure: BarMeasure,
    pub value: Money,
    pub text: String,
}

/// Gross need, plus debt, minus savings, landing on the net need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceWaterfall {
    pub title: String,
    pub bars: Vec<WaterfallBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonBar {
    pub label: String,
    pub value: Money,
}

/// Current savings against the retirement target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalComparison {
    pub title: String,
    pub bars: Vec<ComparisonBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Set when the figure should be shown as a concern.
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub metrics: Vec<Metric>,
    pub insurance_waterfall: InsuranceWaterfall,
    pub capital_comparison: CapitalComparison,
    pub risk_banner: String,
}

pub fn insurance_waterfall(profile: &ClientProfile, plan: &FinancialPlan) -> InsuranceWaterfall {
    let gross = plan.insurance.gross_need;
    let net = plan.insurance.net_need;
    let debt = profile.debt();
    let savings = profile.savings();

    let bar = |label: &str, measure, value, text| WaterfallBar {
        label: label.to_string(),
        measure,
        value,
        text,
    };

    InsuranceWaterfall {
        title: "Liquidity Needs Breakdown".to_string(),
        bars: vec![
            bar("Gross Income Replacement", BarMeasure::Relative, gross, format_thousands(gross)),
            bar("Debt", BarMeasure::Relative, debt, format_thousands(debt)),
            bar(
                "Existing Savings",
                BarMeasure::Relative,
                -savings,
                format!("-{}", format_thousands(savings)),
            ),
            bar("Net Insurance Need", BarMeasure::Total, net, format_thousands(net)),
        ],
    }
}

pub fn capital_comparison(profile: &ClientProfile, plan: &FinancialPlan) -> CapitalComparison {
    CapitalComparison {
        title: format!("The Gap: {}", format_currency(plan.capital_gap)),
        bars: vec![
            ComparisonBar {
                label: "Current Savings".to_string(),
                value: profile.savings(),
            },
            ComparisonBar {
                label: "Target Needed".to_string(),
                value: plan.retirement.target_corpus,
            },
        ],
    }
}

pub fn dashboard(profile: &ClientProfile, plan: &FinancialPlan) -> Dashboard {
    let metrics = vec![
        Metric {
            label: "Insurance Gap".to_string(),
            value: format_currency(plan.insurance.net_need),
            caption: Some("Coverage Needed".to_string()),
            highlight: plan.insurance.net_need > Money::ZERO,
        },
        Metric {
            label: "Retirement Target".to_string(),
            value: format_currency(plan.retirement.target_corpus),
            caption: Some(format!(
                "Adjusted for {} inflation",
                format_percent(profile.inflation_rate())
            )),
            highlight: false,
        },
        Metric {
            label: "Required Monthly Savings".to_string(),
            value: format_currency(plan.monthly_savings_required),
            caption: Some(format!("{} Years to Goal", plan.retirement.years_to_retire)),
            highlight: plan.savings_burden == SavingsBurden::Strained,
        },
    ];

    Dashboard {
        metrics,
        insurance_waterfall: insurance_waterfall(profile, plan),
        capital_comparison: capital_comparison(profile, plan),
        risk_banner: format!("Suggested Risk Profile: {}", plan.risk.label),
    }
}
