use serde::{Deserialize, Serialize};

use crate::engine::FinancialPlan;
use crate::format::format_currency;
use crate::profile::ClientProfile;
use crate::risk::RiskLabel;
use crate::types::Money;

pub const REPORT_TITLE: &str = "Financial Horizon Report";

/// Figures the report narrates. The profile supplies the header echo.
#[derive(Debug, Clone, Copy)]
pub struct ReportFigures {
    pub net_need: Money,
    pub target_corpus: Money,
    pub monthly_req: Money,
    pub risk: RiskLabel,
}

impl From<&FinancialPlan> for ReportFigures {
    fn from(plan: &FinancialPlan) -> Self {
        ReportFigures {
            net_need: plan.insurance.net_need,
            target_corpus: plan.retirement.target_corpus,
            monthly_req: plan.monthly_savings_required,
            risk: plan.risk.label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub lines: Vec<String>,
}

/// Human-readable client report, independent of the byte format it ends up in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub title: String,
    pub sections: Vec<ReportSection>,
}

impl ReportDocument {
    pub fn build(profile: &ClientProfile, figures: &ReportFigures) -> Self {
        let header = ReportSection {
            heading: None,
            lines: vec![
                format!(
                    "Client Age: {} | Retirement Age: {}",
                    profile.age(),
                    profile.retire_age()
                ),
                format!("Annual Income: {}", format_currency(profile.income())),
            ],
        };

        let insurance = ReportSection {
            heading: Some("1. Insurance Analysis".to_string()),
            lines: vec![format!(
                "To replace your income for your {} dependents and clear debts, \
                 you need approximately {} in coverage.",
                profile.dependents(),
                format_currency(figures.net_need)
            )],
        };

        let retirement = ReportSection {
            heading: Some("2. Retirement Forecast".to_string()),
            lines: vec![
                format!(
                    "Adjusting for inflation, your target 'Nest Egg' is {}.",
                    format_currency(figures.target_corpus)
                ),
                format!(
                    "To reach this, your required monthly savings is: {}.",
                    format_currency(figures.monthly_req)
                ),
            ],
        };

        let risk = ReportSection {
            heading: Some("3. Risk Profile".to_string()),
            lines: vec![format!("Assessment: {}", figures.risk)],
        };

        ReportDocument {
            title: REPORT_TITLE.to_string(),
            sections: vec![header, insurance, retirement, risk],
        }
    }

    /// Plain text: title, then each section separated by a blank line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        for section in &self.sections {
            out.push('\n');
            if let Some(heading) = &section.heading {
                out.push_str(heading);
                out.push('\n');
            }
            for line in &section.lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::PlanningAssumptions;
    use crate::engine::FinancialEngine;
    use crate::profile::ProfileInput;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reference_report_text() {
        let engine =
            FinancialEngine::from_input(&ProfileInput::default(), PlanningAssumptions::default())
                .unwrap();
        let plan = engine.plan().unwrap().result;
        let text = ReportDocument::build(engine.profile(), &ReportFigures::from(&plan)).to_text();

        let expected = "\
Financial Horizon Report

Client Age: 35 | Retirement Age: 65
Annual Income: $85,000

1. Insurance Analysis
To replace your income for your 2 dependents and clear debts, you need approximately $933,439 in coverage.

2. Retirement Forecast
Adjusting for inflation, your target 'Nest Egg' is $3,342,998.
To reach this, your required monthly savings is: $2,474.

3. Risk Profile
Assessment: High (Growth Focused)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_negative_requirement_is_printed_as_is() {
        let profile = ClientProfile::from_input(&ProfileInput::default()).unwrap();
        let figures = ReportFigures {
            net_need: dec!(0),
            target_corpus: dec!(1_000_000),
            monthly_req: dec!(-1234.6),
            risk: RiskLabel::Low,
        };
        let doc = ReportDocument::build(&profile, &figures);
        assert_eq!(
            doc.sections[2].lines[1],
            "To reach this, your required monthly savings is: $-1,235."
        );
        assert_eq!(doc.sections[3].lines[0], "Assessment: Low (Preservation Focused)");
    }
}
