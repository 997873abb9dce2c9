use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assumptions::RiskThresholds;
use crate::profile::ClientProfile;

/// Suggested investment risk tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLabel {
    Low,
    Medium,
    High,
}

impl RiskLabel {
    pub fn description(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Preservation Focused",
            RiskLabel::Medium => "Balanced",
            RiskLabel::High => "Growth Focused",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.description())
    }
}

/// Points breakdown behind a [`RiskLabel`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub label: RiskLabel,
    pub score: i32,
    pub years_to_retire: i64,
    pub debt_ratio: Decimal,
    pub horizon_points: i32,
    pub leverage_points: i32,
}

/// Debt over income; zero income divides by one instead. Saturates at
/// `Decimal::MAX` for ratios too large to represent.
pub fn debt_ratio(debt: Decimal, income: Decimal) -> Decimal {
    let divisor = if income > Decimal::ZERO {
        income
    } else {
        Decimal::ONE
    };
    debt.checked_div(divisor).unwrap_or(Decimal::MAX)
}

fn horizon_points(years: i64, t: &RiskThresholds) -> i32 {
    if years > t.long_horizon_years {
        3
    } else if years > t.medium_horizon_years {
        2
    } else {
        1
    }
}

fn leverage_points(ratio: Decimal, t: &RiskThresholds) -> i32 {
    if ratio < t.low_leverage_ratio {
        2
    } else if ratio < t.high_leverage_ratio {
        1
    } else {
        -1
    }
}

pub fn label_for_score(score: i32, t: &RiskThresholds) -> RiskLabel {
    if score >= t.high_score {
        RiskLabel::High
    } else if score >= t.medium_score {
        RiskLabel::Medium
    } else {
        RiskLabel::Low
    }
}

/// Score time horizon and leverage, then map the total to a label.
pub fn assess_risk(profile: &ClientProfile, thresholds: &RiskThresholds) -> RiskAssessment {
    let years = profile.years_to_retire();
    let ratio = debt_ratio(profile.debt(), profile.income());

    let horizon = horizon_points(years, thresholds);
    let leverage = leverage_points(ratio, thresholds);
    let score = horizon + leverage;

    RiskAssessment {
        label: label_for_score(score, thresholds),
        score,
        years_to_retire: years,
        debt_ratio: ratio,
        horizon_points: horizon,
        leverage_points: leverage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileInput;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn assess(age: u32, retire_age: u32, income: Decimal, debt: Decimal) -> RiskAssessment {
        let input = ProfileInput {
            age,
            retire_age,
            income,
            debt,
            ..Default::default()
        };
        let profile = ClientProfile::from_input(&input).unwrap();
        assess_risk(&profile, &RiskThresholds::default())
    }

    #[test]
    fn test_long_horizon_low_leverage_is_high() {
        let r = assess(40, 61, dec!(100_000), dec!(20_000));
        assert_eq!(r.years_to_retire, 21);
        assert_eq!(r.debt_ratio, dec!(0.2));
        assert_eq!(r.score, 5);
        assert_eq!(r.label, RiskLabel::High);
    }

    #[test]
    fn test_ten_years_moderate_leverage_is_low() {
        let r = assess(50, 60, dec!(100_000), dec!(50_000));
        assert_eq!((r.horizon_points, r.leverage_points), (1, 1));
        // Ten years is not more than ten: bottom horizon tier.
        assert_eq!(r.score, 2);
        assert_eq!(r.label, RiskLabel::Low);
    }

    #[test]
    fn test_eleven_years_moderate_leverage_is_medium() {
        let r = assess(50, 61, dec!(100_000), dec!(50_000));
        assert_eq!(r.score, 3);
        assert_eq!(r.label, RiskLabel::Medium);
    }

    #[test]
    fn test_short_horizon_high_leverage_is_low() {
        let r = assess(60, 65, dec!(100_000), dec!(150_000));
        assert_eq!(r.score, 0);
        assert_eq!(r.label, RiskLabel::Low);
    }

    #[test]
    fn test_twenty_years_is_middle_tier() {
        let r = assess(40, 60, dec!(100_000), dec!(0));
        assert_eq!(r.horizon_points, 2);
        assert_eq!(r.label, RiskLabel::High);
    }

    #[test]
    fn test_leverage_boundaries_inclusive_on_upper_tier() {
        let t = RiskThresholds::default();
        assert_eq!(leverage_points(dec!(0.29), &t), 2);
        assert_eq!(leverage_points(dec!(0.3), &t), 1);
        assert_eq!(leverage_points(dec!(0.99), &t), 1);
        assert_eq!(leverage_points(dec!(1.0), &t), -1);
    }

    #[test]
    fn test_score_boundaries() {
        let t = RiskThresholds::default();
        assert_eq!(label_for_score(4, &t), RiskLabel::High);
        assert_eq!(label_for_score(3, &t), RiskLabel::Medium);
        assert_eq!(label_for_score(2, &t), RiskLabel::Low);
        assert_eq!(label_for_score(-1, &t), RiskLabel::Low);
    }

    #[test]
    fn test_zero_income_divides_by_one() {
        assert_eq!(debt_ratio(dec!(0.5), Decimal::ZERO), dec!(0.5));
        let r = assess(30, 65, Decimal::ZERO, dec!(0.25));
        assert_eq!(r.leverage_points, 2);
        let r = assess(30, 65, Decimal::ZERO, dec!(10));
        assert_eq!(r.leverage_points, -1);
        assert_eq!(r.label, RiskLabel::Low);
    }

    #[test]
    fn test_vanishing_income_saturates_ratio() {
        let ratio = debt_ratio(dec!(1_000_000_000), dec!(0.0000000000000000000001));
        assert_eq!(ratio, Decimal::MAX);
        assert_eq!(leverage_points(ratio, &RiskThresholds::default()), -1);
    }

    #[test]
    fn test_reference_client_is_high() {
        let profile = ClientProfile::from_input(&ProfileInput::default()).unwrap();
        let r = assess_risk(&profile, &RiskThresholds::default());
        assert!(r.debt_ratio < dec!(0.3));
        assert_eq!(r.score, 5);
        assert_eq!(r.label.to_string(), "High (Growth Focused)");
    }

    #[test]
    fn test_label_display_strings() {
        assert_eq!(RiskLabel::Medium.to_string(), "Medium (Balanced)");
        assert_eq!(RiskLabel::Low.to_string(), "Low (Preservation Focused)");
    }
}
