//! Closed-form compound growth formulas
//!
//! FV = PV * (1 + r)^n + PMT * [((1 + r)^n - 1) / r]
//!
//! where r is the monthly rate and PMT is paid at the end of each month.
//! With r = 0 this is PV + PMT * n, computed without context rounding.
//! Every function returns `None` when an intermediate value leaves the
//! decimal range.

use rust_decimal::Decimal;

use crate::decimal::MathContext;

/// (1 + r)^n
pub fn compound_factor(monthly_rate: Decimal, months: u32, mc: &MathContext) -> Option<Decimal> {
    mc.pow(Decimal::ONE + monthly_rate, months)
}

/// Future value of one unit paid at the end of each of `months` months.
/// Degenerates to `months` when the rate is zero.
pub fn annuity_factor(
    monthly_rate: Decimal,
    months: u32,
    compound: Decimal,
    mc: &MathContext,
) -> Option<Decimal> {
    if monthly_rate > Decimal::ZERO {
        mc.div(compound - Decimal::ONE, monthly_rate)
    } else {
        Some(Decimal::from(months))
    }
}

/// Nominal value after `months` months of growth and contributions
pub fn future_value(
    present_value: Decimal,
    monthly_payment: Decimal,
    monthly_rate: Decimal,
    months: u32,
    mc: &MathContext,
) -> Option<Decimal> {
    if months == 0 {
        return Some(present_value);
    }
    if monthly_rate.is_zero() {
        return monthly_payment
            .checked_mul(Decimal::from(months))
            .and_then(|paid| present_value.checked_add(paid));
    }

    let compound = compound_factor(monthly_rate, months, mc)?;
    let from_principal = mc.mul(present_value, compound)?;
    let factor = annuity_factor(monthly_rate, months, compound, mc)?;
    let from_payments = mc.mul(monthly_payment, factor)?;

    mc.add(from_principal, from_payments)
}

/// Whole years elapsed at a month index; inflation steps once per year
pub fn whole_years_elapsed(month: u32) -> u32 {
    month / 12
}

/// Deflate a nominal value by whole years of inflation
pub fn inflation_adjusted(
    nominal: Decimal,
    annual_inflation: Decimal,
    month: u32,
    mc: &MathContext,
) -> Option<Decimal> {
    let years = whole_years_elapsed(month);
    if years == 0 || annual_inflation.is_zero() {
        return Some(nominal);
    }
    let factor = mc.pow(Decimal::ONE + annual_inflation, years)?;
    mc.div(nominal, factor)
}
