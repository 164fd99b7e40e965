//! Error types for goal validation and projection

use rust_decimal::Decimal;
use thiserror::Error;

/// Goal parameters rejected before any calculation starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("goal name is required")]
    BlankName,

    #[error("target amount must be greater than 0 (got {0})")]
    NonPositiveTarget(Decimal),

    #[error("{field} must be non-negative (got {value})")]
    Negative { field: &'static str, value: Decimal },

    #[error("{field} must be below {max} percent (got {value})")]
    RateOutOfRange {
        field: &'static str,
        value: Decimal,
        max: Decimal,
    },

    #[error("time horizon must be at least 1 month")]
    HorizonTooShort,

    #[error("time horizon of {months} months exceeds the maximum of {max}")]
    HorizonTooLong { months: u32, max: u32 },
}

/// Failure of a projection, solve or simulation call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid goal: {0}")]
    Validation(#[from] ValidationError),

    /// A value left the representable decimal range
    #[error("decimal overflow at month {month}")]
    Overflow { month: u32 },

    #[error("projection produced no points")]
    EmptyProjection,
}

pub type EngineResult<T> = Result<T, EngineError>;
