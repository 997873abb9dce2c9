use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::HorizonError;
use crate::types::Rate;
use crate::HorizonResult;

pub const SAFE_WITHDRAWAL_RATE: Rate = dec!(0.04);
pub const INCOME_REPLACEMENT_RATIO: Rate = dec!(0.75);
pub const INSURANCE_DISCOUNT_RATE: Rate = dec!(0.03);
pub const DEPENDENT_SUPPORT_YEARS: u32 = 20;

/// Cut-offs for the risk points score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// More years than this earns the full horizon points.
    pub long_horizon_years: i64,
    /// More years than this (up to `long_horizon_years`) earns the middle tier.
    pub medium_horizon_years: i64,
    /// Debt-to-income below this is low leverage.
    pub low_leverage_ratio: Decimal,
    /// Debt-to-income at or above this is high leverage.
    pub high_leverage_ratio: Decimal,
    /// Minimum score labelled High.
    pub high_score: i32,
    /// Minimum score labelled Medium.
    pub medium_score: i32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        RiskThresholds {
            long_horizon_years: 20,
            medium_horizon_years: 10,
            low_leverage_ratio: dec!(0.3),
            high_leverage_ratio: dec!(1.0),
            high_score: 4,
            medium_score: 3,
        }
    }
}

/// Planning policy constants. Not client inputs; overridable for testing and
/// house-view adjustments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningAssumptions {
    /// Fraction of the retirement portfolio withdrawn per year (the "4% rule").
    pub safe_withdrawal_rate: Rate,
    /// Share of current income needed in retirement and by dependents.
    pub income_replacement_ratio: Rate,
    /// Discount rate for the dependents' income-replacement annuity.
    pub insurance_discount_rate: Rate,
    /// Years of support owed to dependents, when there are any.
    pub dependent_support_years: u32,
    pub risk_thresholds: RiskThresholds,
}

impl Default for PlanningAssumptions {
    fn default() -> Self {
        PlanningAssumptions {
            safe_withdrawal_rate: SAFE_WITHDRAWAL_RATE,
            income_replacement_ratio: INCOME_REPLACEMENT_RATIO,
            insurance_discount_rate: INSURANCE_DISCOUNT_RATE,
            dependent_support_years: DEPENDENT_SUPPORT_YEARS,
            risk_thresholds: RiskThresholds::default(),
        }
    }
}

impl PlanningAssumptions {
    pub fn validate(&self) -> HorizonResult<()> {
        if self.safe_withdrawal_rate <= Decimal::ZERO {
            return Err(HorizonError::invalid_constant(
                "safe_withdrawal_rate",
                "must be > 0 (divides the annual need)",
            ));
        }
        if self.insurance_discount_rate <= Decimal::ZERO {
            return Err(HorizonError::invalid_constant(
                "insurance_discount_rate",
                "must be > 0 (divides the annuity factor)",
            ));
        }
        if self.income_replacement_ratio < Decimal::ZERO {
            return Err(HorizonError::invalid_constant(
                "income_replacement_ratio",
                "must be >= 0",
            ));
        }
        if self.dependent_support_years == 0 {
            return Err(HorizonError::invalid_constant(
                "dependent_support_years",
                "must be > 0",
            ));
        }

        let t = &self.risk_thresholds;
        if t.medium_horizon_years >= t.long_horizon_years {
            return Err(HorizonError::invalid_constant(
                "risk_thresholds.medium_horizon_years",
                "must be below long_horizon_years",
            ));
        }
        if t.low_leverage_ratio >= t.high_leverage_ratio {
            return Err(HorizonError::invalid_constant(
                "risk_thresholds.low_leverage_ratio",
                "must be below high_leverage_ratio",
            ));
        }
        if t.medium_score > t.high_score {
            return Err(HorizonError::invalid_constant(
                "risk_thresholds.medium_score",
                "must not exceed high_score",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_valid() {
        let a = PlanningAssumptions::default();
        assert!(a.validate().is_ok());
        assert_eq!(a.safe_withdrawal_rate, dec!(0.04));
        assert_eq!(a.dependent_support_years, 20);
    }

    #[test]
    fn test_zero_discount_rate_is_invalid_constant() {
        let a = PlanningAssumptions {
            insurance_discount_rate: Decimal::ZERO,
            ..Default::default()
        };
        match a.validate() {
            Err(HorizonError::InvalidConstant { name, .. }) => {
                assert_eq!(name, "insurance_discount_rate")
            }
            other => panic!("expected InvalidConstant, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_withdrawal_rate_is_invalid_constant() {
        let a = PlanningAssumptions {
            safe_withdrawal_rate: Decimal::ZERO,
            ..Default::default()
        };
        assert!(matches!(
            a.validate(),
            Err(HorizonError::InvalidConstant { .. })
        ));
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let mut a = PlanningAssumptions::default();
        a.risk_thresholds.low_leverage_ratio = dec!(1.5);
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let a: PlanningAssumptions =
            serde_json::from_str(r#"{ "safe_withdrawal_rate": "0.035" }"#).unwrap();
        assert_eq!(a.safe_withdrawal_rate, dec!(0.035));
        assert_eq!(a.income_replacement_ratio, dec!(0.75));
        assert_eq!(a.risk_thresholds, RiskThresholds::default());
    }
}
