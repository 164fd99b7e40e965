//! Decimal math context for currency projections
//!
//! Intermediate rates and growth factors are rounded to a fixed number of
//! significant digits (half-up) after every operation, so that compounding
//! over hundreds of months does not drift. Currency amounts are rounded to
//! cents, half-up, at the point they leave the engine.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use crate::config::ConfigError;

/// Half-up rounding (ties away from zero)
pub const HALF_UP: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Decimal places carried by every currency amount
pub const CURRENCY_SCALE: u32 = 2;

/// Smallest significant-digit precision the engine accepts
pub const MIN_PRECISION: u32 = 10;

/// Largest precision a `Decimal` can represent
pub const MAX_PRECISION: u32 = 28;

/// Default precision for intermediate results
pub const DEFAULT_PRECISION: u32 = 16;

/// Significant-digit rounding context applied to intermediate results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathContext {
    precision: u32,
}

impl MathContext {
    /// Create a context with the given number of significant digits,
    /// which must lie in `[MIN_PRECISION, MAX_PRECISION]`
    pub fn new(precision: u32) -> Result<Self, ConfigError> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
            return Err(ConfigError::Precision(precision));
        }
        Ok(Self { precision })
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Round to the context precision
    pub fn round(&self, value: Decimal) -> Decimal {
        if value.is_zero() {
            return Decimal::ZERO;
        }
        value
            .round_sf_with_strategy(self.precision, HALF_UP)
            .unwrap_or(value)
    }

    pub fn add(&self, lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
        lhs.checked_add(rhs).map(|v| self.round(v))
    }

    pub fn sub(&self, lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
        lhs.checked_sub(rhs).map(|v| self.round(v))
    }

    pub fn mul(&self, lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
        lhs.checked_mul(rhs).map(|v| self.round(v))
    }

    /// Division; `None` on overflow or a zero divisor
    pub fn div(&self, lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
        lhs.checked_div(rhs).map(|v| self.round(v))
    }

    /// Integer power, `base^exp`
    pub fn pow(&self, base: Decimal, exp: u32) -> Option<Decimal> {
        if exp == 0 {
            return Some(Decimal::ONE);
        }
        base.checked_powi(i64::from(exp)).map(|v| self.round(v))
    }

    /// Convert an annual percentage (e.g. `7` for 7%) to a monthly fraction
    pub fn monthly_rate(&self, annual_percent: Decimal) -> Option<Decimal> {
        let annual = self.div(annual_percent, Decimal::ONE_HUNDRED)?;
        self.div(annual, Decimal::from(12u32))
    }

    /// Convert an annual percentage to a fraction (e.g. `2` -> `0.02`)
    pub fn fraction(&self, percent: Decimal) -> Option<Decimal> {
        self.div(percent, Decimal::ONE_HUNDRED)
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Round a monetary amount to cents (half-up) and pin the scale to two places
pub fn to_currency(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(CURRENCY_SCALE, HALF_UP);
    rounded.rescale(CURRENCY_SCALE);
    rounded
}

/// Convert a sampled `f64` into a decimal, treating non-finite draws as zero
pub fn from_sample(sample: f64) -> Decimal {
    Decimal::from_f64(sample).unwrap_or(Decimal::ZERO)
}
