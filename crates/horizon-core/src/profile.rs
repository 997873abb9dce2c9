use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::error::HorizonError;
use crate::types::{Money, Percent, Rate};
use crate::HorizonResult;

// ---------------------------------------------------------------------------
// Input-layer bounds
// ---------------------------------------------------------------------------

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 70;
pub const MAX_RETIRE_AGE: u32 = 80;
pub const MAX_DEPENDENTS: u32 = 5;

/// Slider range offered for inflation (percent). Outside it is a warning, not an error.
pub const INFLATION_PCT_RANGE: RangeInclusive<Decimal> = dec!(1.0)..=dec!(10.0);

/// Slider range offered for expected investment return (percent).
pub const RETURN_PCT_RANGE: RangeInclusive<Decimal> = dec!(1.0)..=dec!(12.0);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Raw client inputs as collected from a form, rates in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    pub age: u32,
    pub retire_age: u32,
    pub income: Money,
    pub savings: Money,
    pub debt: Money,
    pub dependents: u32,
    /// Annual inflation in percent (2.5 = 2.5%)
    pub inflation_rate_pct: Percent,
    /// Expected annual investment return in percent (7.0 = 7%)
    pub investment_return_pct: Percent,
}

impl Default for ProfileInput {
    fn default() -> Self {
        ProfileInput {
            age: 35,
            retire_age: 65,
            income: dec!(85_000),
            savings: dec!(40_000),
            debt: dec!(25_000),
            dependents: 2,
            inflation_rate_pct: dec!(2.5),
            investment_return_pct: dec!(7.0),
        }
    }
}

/// Validated client profile. Rates are stored as fractions.
///
/// Immutable once built: fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientProfile {
    age: u32,
    retire_age: u32,
    income: Money,
    savings: Money,
    debt: Money,
    dependents: u32,
    inflation_rate: Rate,
    investment_return: Rate,
}

impl ClientProfile {
    /// Validate raw inputs and normalize percentages into fractions.
    pub fn from_input(input: &ProfileInput) -> HorizonResult<Self> {
        validate(input)?;

        Ok(ClientProfile {
            age: input.age,
            retire_age: input.retire_age,
            income: input.income,
            savings: input.savings,
            debt: input.debt,
            dependents: input.dependents,
            inflation_rate: input.inflation_rate_pct / dec!(100),
            investment_return: input.investment_return_pct / dec!(100),
        })
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn retire_age(&self) -> u32 {
        self.retire_age
    }

    pub fn income(&self) -> Money {
        self.income
    }

    pub fn savings(&self) -> Money {
        self.savings
    }

    pub fn debt(&self) -> Money {
        self.debt
    }

    pub fn dependents(&self) -> u32 {
        self.dependents
    }

    pub fn inflation_rate(&self) -> Rate {
        self.inflation_rate
    }

    pub fn investment_return(&self) -> Rate {
        self.investment_return
    }

    /// Signed so that a profile at (or past) retirement yields zero or less.
    pub fn years_to_retire(&self) -> i64 {
        i64::from(self.retire_age) - i64::from(self.age)
    }

    /// Inputs the form would not have offered. Reported, never rejected.
    pub fn out_of_range_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let inflation_pct = self.inflation_rate * dec!(100);
        if !INFLATION_PCT_RANGE.contains(&inflation_pct) {
            warnings.push(format!(
                "Inflation rate {}% is outside the usual {}%–{}% range",
                inflation_pct.normalize(),
                INFLATION_PCT_RANGE.start(),
                INFLATION_PCT_RANGE.end()
            ));
        }
        let return_pct = self.investment_return * dec!(100);
        if !RETURN_PCT_RANGE.contains(&return_pct) {
            warnings.push(format!(
                "Investment return {}% is outside the usual {}%–{}% range",
                return_pct.normalize(),
                RETURN_PCT_RANGE.start(),
                RETURN_PCT_RANGE.end()
            ));
        }
        warnings
    }

    /// Bypass validation. Only for exercising the defensive paths in tests.
    #[cfg(test)]
    pub(crate) fn unchecked(
        age: u32,
        retire_age: u32,
        income: Money,
        savings: Money,
        debt: Money,
        dependents: u32,
    ) -> Self {
        ClientProfile {
            age,
            retire_age,
            income,
            savings,
            debt,
            dependents,
            inflation_rate: dec!(0.025),
            investment_return: dec!(0.07),
        }
    }
}

impl TryFrom<ProfileInput> for ClientProfile {
    type Error = HorizonError;

    fn try_from(input: ProfileInput) -> HorizonResult<Self> {
        ClientProfile::from_input(&input)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(input: &ProfileInput) -> HorizonResult<()> {
    if !(MIN_AGE..=MAX_AGE).contains(&input.age) {
        return Err(HorizonError::invalid_input(
            "age",
            format!("age must be between {MIN_AGE} and {MAX_AGE}"),
        ));
    }
    if input.retire_age <= input.age {
        return Err(HorizonError::invalid_input(
            "retire_age",
            "retire_age must be greater than age",
        ));
    }
    if input.retire_age > MAX_RETIRE_AGE {
        return Err(HorizonError::invalid_input(
            "retire_age",
            format!("retire_age must be at most {MAX_RETIRE_AGE}"),
        ));
    }
    for (field, value) in [
        ("income", input.income),
        ("savings", input.savings),
        ("debt", input.debt),
    ] {
        if value < Decimal::ZERO {
            return Err(HorizonError::invalid_input(field, format!("{field} must be >= 0")));
        }
    }
    if input.dependents > MAX_DEPENDENTS {
        return Err(HorizonError::invalid_input(
            "dependents",
            format!("dependents must be between 0 and {MAX_DEPENDENTS}"),
        ));
    }
    for (field, pct) in [
        ("inflation_rate_pct", input.inflation_rate_pct),
        ("investment_return_pct", input.investment_return_pct),
    ] {
        if pct <= dec!(-100) {
            return Err(HorizonError::invalid_input(
                field,
                "rate must be greater than -100%",
            ));
        }
    }
    Ok(())
}
