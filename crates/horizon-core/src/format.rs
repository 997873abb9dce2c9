use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

/// Round to whole units, ties to even.
fn whole_units(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

/// Insert a comma every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

fn grouped(value: Decimal) -> String {
    let rounded = whole_units(value);
    let digits = rounded.abs().trunc().to_string();
    if rounded < Decimal::ZERO {
        format!("-{}", group_thousands(&digits))
    } else {
        group_thousands(&digits)
    }
}

/// Whole-unit currency with thousands separators: `$1,234,568`.
///
/// The sign follows the currency symbol (`$-1,234`), as the report has always
/// printed it.
pub fn format_currency(value: Money) -> String {
    format!("${}", grouped(value))
}

/// Value in whole thousands for chart labels: `$948k`. No separators.
pub fn format_thousands(value: Money) -> String {
    let rounded = whole_units(value / dec!(1000));
    if rounded.is_zero() {
        "$0k".to_string()
    } else {
        format!("${}k", rounded.trunc())
    }
}

/// Fraction as a percentage with one decimal place: `0.025` → `2.5%`.
pub fn format_percent(rate: Rate) -> String {
    let pct = (rate * dec!(100)).round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven);
    format!("{:.1}%", pct)
}
