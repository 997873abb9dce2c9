use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::assumptions::PlanningAssumptions;
use crate::error::HorizonError;
use crate::profile::ClientProfile;
use crate::time_value::{compound, pmt};
use crate::types::{Money, Rate};
use crate::HorizonResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Capital needed at retirement ("the Number") and how far away it is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementTarget {
    pub target_corpus: Money,
    pub years_to_retire: i64,
    /// Replacement income in today's money.
    pub current_annual_need: Money,
    /// Replacement income inflated to the retirement year.
    pub future_annual_need: Money,
}

impl RetirementTarget {
    pub const NONE: RetirementTarget = RetirementTarget {
        target_corpus: Decimal::ZERO,
        years_to_retire: 0,
        current_annual_need: Decimal::ZERO,
        future_annual_need: Decimal::ZERO,
    };
}

// ---------------------------------------------------------------------------
// Target corpus
// ---------------------------------------------------------------------------

/// Inflate today's replacement income to the retirement year, then size a
/// portfolio that funds it at the safe withdrawal rate.
///
/// Fails with `Overflow` when the inflated need leaves Decimal's range.
pub fn retirement_target(
    profile: &ClientProfile,
    assumptions: &PlanningAssumptions,
) -> HorizonResult<RetirementTarget> {
    let years_to_retire = profile.years_to_retire();
    if years_to_retire <= 0 {
        return Ok(RetirementTarget::NONE);
    }
    let years = u32::try_from(years_to_retire)
        .map_err(|_| HorizonError::invalid_input("years_to_retire", "horizon is too long"))?;

    let overflow = || HorizonError::overflow("retirement target");
    let current_annual_need = profile
        .income()
        .checked_mul(assumptions.income_replacement_ratio)
        .ok_or_else(overflow)?;
    let future_annual_need = current_annual_need
        .checked_mul(compound(profile.inflation_rate(), years)?)
        .ok_or_else(overflow)?;
    let target_corpus = future_annual_need
        .checked_div(assumptions.safe_withdrawal_rate)
        .ok_or_else(overflow)?;

    Ok(RetirementTarget {
        target_corpus,
        years_to_retire,
        current_annual_need,
        future_annual_need,
    })
}

// ---------------------------------------------------------------------------
// Monthly contribution
// ---------------------------------------------------------------------------

/// Simple division of the annual return, not the geometric monthly equivalent.
pub fn monthly_rate(annual_return: Rate) -> Rate {
    annual_return / dec!(12)
}

/// Level end-of-month deposit that grows current savings to `target_corpus`.
///
/// Savings enter as a negative present value, so the raw payment comes back
/// negative and is flipped. A negative result means savings alone already
/// overshoot the target; it is returned as-is.
pub fn monthly_savings_requirement(
    profile: &ClientProfile,
    target_corpus: Money,
    years_to_retire: i64,
) -> HorizonResult<Money> {
    if years_to_retire <= 0 {
        return Ok(Decimal::ZERO);
    }

    let rate = monthly_rate(profile.investment_return());
    let months = years_to_retire
        .checked_mul(12)
        .and_then(|m| u32::try_from(m).ok())
        .ok_or_else(|| {
            HorizonError::invalid_input("years_to_retire", "too many months to solve for")
        })?;
    let payment = pmt(rate, months, -profile.savings(), target_corpus)?;

    Ok(-payment)
}
