use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assumptions::PlanningAssumptions;
use crate::error::HorizonError;
use crate::profile::ClientProfile;
use crate::time_value::pv_annuity_factor;
use crate::types::Money;
use crate::HorizonResult;

/// Life-insurance coverage need for a client's dependents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsuranceGap {
    /// Coverage still required after debt and existing savings, floored at 0.
    pub net_need: Money,
    /// Present value of the dependents' income replacement.
    pub gross_need: Money,
}

impl InsuranceGap {
    pub const NONE: InsuranceGap = InsuranceGap {
        net_need: Decimal::ZERO,
        gross_need: Decimal::ZERO,
    };
}

/// Income-replacement need for dependents, net of savings and grossed up by debt.
///
/// No dependents means no support horizon at all, so the whole need is zero,
/// regardless of debt. One dependent or five get the same horizon.
pub fn insurance_gap(
    profile: &ClientProfile,
    assumptions: &PlanningAssumptions,
) -> HorizonResult<InsuranceGap> {
    if profile.dependents() == 0 {
        return Ok(InsuranceGap::NONE);
    }

    let overflow = || HorizonError::overflow("insurance gap");
    let pv_factor = pv_annuity_factor(
        assumptions.insurance_discount_rate,
        assumptions.dependent_support_years,
    )?;
    let gross_need = profile
        .income()
        .checked_mul(assumptions.income_replacement_ratio)
        .and_then(|support| support.checked_mul(pv_factor))
        .ok_or_else(overflow)?
        .max(Decimal::ZERO);
    let net_need = gross_need
        .checked_add(profile.debt())
        .and_then(|exposure| exposure.checked_sub(profile.savings()))
        .ok_or_else(overflow)?
        .max(Decimal::ZERO);

    Ok(InsuranceGap {
        net_need,
        gross_need,
    })
}
