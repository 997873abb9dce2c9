use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::assumptions::PlanningAssumptions;
use crate::format::format_currency;
use crate::insurance::{insurance_gap, InsuranceGap};
use crate::profile::{ClientProfile, ProfileInput};
use crate::retirement::{monthly_savings_requirement, retirement_target, RetirementTarget};
use crate::risk::{assess_risk, RiskAssessment, RiskLabel};
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::HorizonResult;

/// Share of gross monthly income above which the savings requirement is
/// flagged as a strain.
const AFFORDABLE_SAVINGS_SHARE: Decimal = dec!(0.2);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavingsBurden {
    /// Under a fifth of gross monthly income.
    Comfortable,
    Strained,
}

/// Every figure the engine produces for one client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialPlan {
    pub insurance: InsuranceGap,
    pub retirement: RetirementTarget,
    pub monthly_savings_required: Money,
    /// Target corpus minus what is already saved.
    pub capital_gap: Money,
    pub savings_burden: SavingsBurden,
    pub risk: RiskAssessment,
}

/// Planning engine for one validated client profile.
///
/// Construction validates both the profile and the policy constants; after
/// that every calculation is a pure function of the stored values.
#[derive(Debug, Clone)]
pub struct FinancialEngine {
    profile: ClientProfile,
    assumptions: PlanningAssumptions,
}

impl FinancialEngine {
    pub fn new(profile: ClientProfile, assumptions: PlanningAssumptions) -> HorizonResult<Self> {
        assumptions.validate()?;
        debug!(
            "engine ready: age {} -> {}, {} dependents",
            profile.age(),
            profile.retire_age(),
            profile.dependents()
        );
        Ok(FinancialEngine {
            profile,
            assumptions,
        })
    }

    /// Validate raw inputs and build an engine in one step.
    pub fn from_input(input: &ProfileInput, assumptions: PlanningAssumptions) -> HorizonResult<Self> {
        let profile = ClientProfile::from_input(input)?;
        Self::new(profile, assumptions)
    }

    pub fn profile(&self) -> &ClientProfile {
        &self.profile
    }

    pub fn assumptions(&self) -> &PlanningAssumptions {
        &self.assumptions
    }

    pub fn calc_insurance_gap(&self) -> HorizonResult<InsuranceGap> {
        insurance_gap(&self.profile, &self.assumptions)
    }

    pub fn calc_retirement_target(&self) -> HorizonResult<RetirementTarget> {
        retirement_target(&self.profile, &self.assumptions)
    }

    pub fn calc_monthly_savings_req(
        &self,
        target_corpus: Money,
        years_to_retire: i64,
    ) -> HorizonResult<Money> {
        monthly_savings_requirement(&self.profile, target_corpus, years_to_retire)
    }

    pub fn get_risk_profile(&self) -> RiskLabel {
        self.risk_assessment().label
    }

    pub fn risk_assessment(&self) -> RiskAssessment {
        assess_risk(&self.profile, &self.assumptions.risk_thresholds)
    }

    fn savings_burden(&self, monthly: Money) -> SavingsBurden {
        let monthly_income = self.profile.income() / dec!(12);
        if monthly < monthly_income * AFFORDABLE_SAVINGS_SHARE {
            SavingsBurden::Comfortable
        } else {
            SavingsBurden::Strained
        }
    }

    /// Run all four calculations in order, feeding the retirement target
    /// into the contribution solve.
    pub fn plan(&self) -> HorizonResult<ComputationOutput<FinancialPlan>> {
        let start = Instant::now();
        let mut warnings = self.profile.out_of_range_warnings();

        let insurance = self.calc_insurance_gap()?;
        let retirement = self.calc_retirement_target()?;
        let monthly =
            self.calc_monthly_savings_req(retirement.target_corpus, retirement.years_to_retire)?;
        let risk = self.risk_assessment();
        let savings_burden = self.savings_burden(monthly);

        if monthly < Decimal::ZERO {
            warnings.push(format!(
                "Existing savings already exceed the target; surplus equivalent to {} per month",
                format_currency(-monthly)
            ));
        }
        if self.profile.income().is_zero() {
            warnings.push("Income is zero; debt ratio computed against a divisor of 1".into());
        }
        if savings_burden == SavingsBurden::Strained {
            warnings.push(format!(
                "Required monthly savings of {} is at least 20% of gross monthly income",
                format_currency(monthly)
            ));
        }

        let plan = FinancialPlan {
            insurance,
            retirement,
            monthly_savings_required: monthly,
            capital_gap: retirement.target_corpus - self.profile.savings(),
            savings_burden,
            risk,
        };

        debug!(
            "plan computed: net insurance need {}, target corpus {}, risk {}",
            plan.insurance.net_need, plan.retirement.target_corpus, plan.risk.label
        );

        let elapsed = start.elapsed().as_micros() as u64;
        Ok(with_metadata(
            "Financial horizon (PV-annuity insurance gap, 4%-rule retirement target, PMT savings, points-based risk)",
            &serde_json::json!({
                "profile": &self.profile,
                "planning_assumptions": &self.assumptions,
                "monthly_rate_convention": "annual_return / 12",
            }),
            warnings,
            elapsed,
            plan,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reference_engine() -> FinancialEngine {
        FinancialEngine::from_input(&ProfileInput::default(), PlanningAssumptions::default())
            .unwrap()
    }

    #[test]
    fn test_reference_plan() {
        let out = reference_engine().plan().unwrap();
        let plan = &out.result;

        assert_eq!(plan.retirement.years_to_retire, 30);
        assert!((plan.retirement.target_corpus - dec!(3_342_998.33)).abs() < dec!(0.01));
        assert!((plan.insurance.gross_need - dec!(948_439.02)).abs() < dec!(0.01));
        assert!((plan.insurance.net_need - dec!(933_439.02)).abs() < dec!(0.01));
        assert!((plan.monthly_savings_required - dec!(2_474.11)).abs() < dec!(0.01));
        assert_eq!(plan.risk.label, RiskLabel::High);
        // 2,474 a month is more than a fifth of 7,083
        assert_eq!(plan.savings_burden, SavingsBurden::Strained);
        assert_eq!(
            plan.capital_gap,
            plan.retirement.target_corpus - dec!(40_000)
        );
        assert_eq!(out.warnings.len(), 1, "warnings: {:?}", out.warnings);
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
    }

    #[test]
    fn test_calculations_are_repeatable() {
        let engine = reference_engine();
        assert_eq!(engine.calc_insurance_gap().unwrap(), engine.calc_insurance_gap().unwrap());
        assert_eq!(
            engine.calc_retirement_target().unwrap(),
            engine.calc_retirement_target().unwrap()
        );
        assert_eq!(engine.get_risk_profile(), RiskLabel::High);
    }

    #[test]
    fn test_invalid_constant_fails_at_construction() {
        let profile = ClientProfile::from_input(&ProfileInput::default()).unwrap();
        let assumptions = PlanningAssumptions {
            insurance_discount_rate: Decimal::ZERO,
            ..Default::default()
        };
        match FinancialEngine::new(profile, assumptions) {
            Err(crate::HorizonError::InvalidConstant { name, .. }) => {
                assert_eq!(name, "insurance_discount_rate")
            }
            other => panic!("expected InvalidConstant, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_profile_fails_at_construction() {
        let input = ProfileInput {
            dependents: 9,
            ..Default::default()
        };
        assert!(FinancialEngine::from_input(&input, PlanningAssumptions::default()).is_err());
    }

    #[test]
    fn test_overridden_withdrawal_rate_flows_through() {
        let engine = FinancialEngine::from_input(
            &ProfileInput::default(),
            PlanningAssumptions {
                safe_withdrawal_rate: dec!(0.05),
                ..Default::default()
            },
        )
        .unwrap();
        let t = engine.calc_retirement_target().unwrap();
        // 20x instead of 25x
        assert!((t.target_corpus - t.future_annual_need * dec!(20)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_surplus_and_strain_warnings() {
        let rich = FinancialEngine::from_input(
            &ProfileInput {
                savings: dec!(20_000_000),
                ..Default::default()
            },
            PlanningAssumptions::default(),
        )
        .unwrap();
        let out = rich.plan().unwrap();
        assert!(out.result.monthly_savings_required < Decimal::ZERO);
        assert_eq!(out.result.savings_burden, SavingsBurden::Comfortable);
        assert!(out.warnings.iter().any(|w| w.starts_with("Existing savings")));

        let late = FinancialEngine::from_input(
            &ProfileInput {
                age: 60,
                retire_age: 65,
                savings: Decimal::ZERO,
                ..Default::default()
            },
            PlanningAssumptions::default(),
        )
        .unwrap();
        let out = late.plan().unwrap();
        assert_eq!(out.result.savings_burden, SavingsBurden::Strained);
        assert!(out.warnings.iter().any(|w| w.contains("20% of gross monthly income")));
    }

    #[test]
    fn test_accepted_extreme_rates_fail_without_panicking() {
        let fast_growth = FinancialEngine::from_input(
            &ProfileInput {
                age: 18,
                retire_age: 80,
                savings: dec!(1_000_000),
                investment_return_pct: dec!(150),
                ..Default::default()
            },
            PlanningAssumptions::default(),
        )
        .unwrap();
        assert!(matches!(
            fast_growth.plan(),
            Err(crate::HorizonError::Overflow { .. })
        ));

        let hyperinflation = FinancialEngine::from_input(
            &ProfileInput {
                age: 18,
                retire_age: 80,
                inflation_rate_pct: dec!(300),
                ..Default::default()
            },
            PlanningAssumptions::default(),
        )
        .unwrap();
        assert!(matches!(
            hyperinflation.calc_retirement_target(),
            Err(crate::HorizonError::Overflow { .. })
        ));
        assert!(hyperinflation.plan().is_err());
    }

    #[test]
    fn test_large_but_representable_rates_still_plan() {
        let engine = FinancialEngine::from_input(
            &ProfileInput {
                age: 18,
                retire_age: 80,
                inflation_rate_pct: dec!(100),
                investment_return_pct: dec!(40),
                ..Default::default()
            },
            PlanningAssumptions::default(),
        )
        .unwrap();
        let out = engine.plan().unwrap();
        assert!(out.result.retirement.target_corpus > Decimal::ZERO);
        assert_eq!(out.warnings.len(), 3, "warnings: {:?}", out.warnings);
    }

    #[test]
    fn test_zero_income_plan_warns() {
        let engine = FinancialEngine::from_input(
            &ProfileInput {
                income: Decimal::ZERO,
                ..Default::default()
            },
            PlanningAssumptions::default(),
        )
        .unwrap();
        let out = engine.plan().unwrap();
        assert_eq!(out.result.retirement.target_corpus, Decimal::ZERO);
        assert!(out.warnings.iter().any(|w| w.starts_with("Income is zero")));
    }

    #[test]
    fn test_plan_serializes_labels_compactly() {
        let out = reference_engine().plan().unwrap();
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["result"]["risk"]["label"], "High");
        assert_eq!(json["result"]["savings_burden"], "Strained");
        assert_eq!(json["assumptions"]["planning_assumptions"]["safe_withdrawal_rate"], "0.04");
    }
}
