use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::HorizonError;
use crate::types::{Money, Rate};
use crate::HorizonResult;

fn checked_mul(a: Decimal, b: Decimal, context: &str) -> HorizonResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| HorizonError::overflow(context))
}

fn checked_add(a: Decimal, b: Decimal, context: &str) -> HorizonResult<Decimal> {
    a.checked_add(b).ok_or_else(|| HorizonError::overflow(context))
}

fn checked_div(a: Decimal, b: Decimal, context: &str) -> HorizonResult<Decimal> {
    if b.is_zero() {
        return Err(HorizonError::DivisionByZero {
            context: context.into(),
        });
    }
    a.checked_div(b).ok_or_else(|| HorizonError::overflow(context))
}

/// Compute (1 + r)^n by repeated squaring on Decimal (no powd drift).
///
/// Growth past Decimal's range is an `Overflow` error. Shrinking factors
/// bottom out at zero.
pub fn compound(rate: Rate, n: u32) -> HorizonResult<Decimal> {
    let mut base = Decimal::ONE + rate;
    let mut result = Decimal::ONE;
    let mut exp = n;
    while exp > 0 {
        if exp & 1 == 1 {
            result = checked_mul(result, base, "compound growth factor")?;
        }
        exp >>= 1;
        if exp > 0 {
            base = checked_mul(base, base, "compound growth factor")?;
        }
    }
    Ok(result)
}

/// Present value factor of an ordinary annuity: (1 - (1+r)^-n) / r
pub fn pv_annuity_factor(rate: Rate, n: u32) -> HorizonResult<Decimal> {
    if rate <= dec!(-1) {
        return Err(HorizonError::invalid_input(
            "rate",
            "Discount rate must be greater than -100%",
        ));
    }
    if rate.is_zero() {
        return Err(HorizonError::DivisionByZero {
            context: "PV annuity factor (zero discount rate)".into(),
        });
    }

    let factor = compound(rate, n)?;
    let discount = checked_div(Decimal::ONE, factor, "PV annuity discount")?;
    checked_div(Decimal::ONE - discount, rate, "PV annuity factor")
}

/// Future Value
pub fn fv(rate: Rate, nper: u32, pmt: Money, present_value: Money) -> HorizonResult<Money> {
    if rate.is_zero() {
        let paid = checked_mul(pmt, Decimal::from(nper), "FV payments")?;
        return Ok(-checked_add(present_value, paid, "FV")?);
    }

    let factor = compound(rate, nper)?;
    let annuity_factor = checked_div(factor - Decimal::ONE, rate, "FV annuity factor")?;

    let grown = checked_mul(present_value, factor, "FV present value growth")?;
    let paid = checked_mul(pmt, annuity_factor, "FV payments")?;
    Ok(-checked_add(grown, paid, "FV")?)
}

/// Payment (PMT), end-of-period, spreadsheet sign convention.
pub fn pmt(rate: Rate, nper: u32, present_value: Money, future_value: Money) -> HorizonResult<Money> {
    if nper == 0 {
        return Err(HorizonError::invalid_input(
            "nper",
            "Number of periods must be > 0",
        ));
    }

    if rate.is_zero() {
        let total = checked_add(present_value, future_value, "PMT")?;
        return Ok(-total / Decimal::from(nper));
    }

    let factor = compound(rate, nper)?;
    let annuity_factor = checked_div(factor - Decimal::ONE, rate, "PMT annuity factor")?;
    let grown = checked_mul(present_value, factor, "PMT present value growth")?;
    let total = checked_add(grown, future_value, "PMT")?;

    Ok(-checked_div(total, annuity_factor, "PMT annuity factor")?)
}
