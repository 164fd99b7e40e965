//! Goal insights: required contribution, growth totals, completion probability

mod solver;
mod monte_carlo;

pub use solver::{required_monthly_contribution, solve_contribution};
pub use monte_carlo::{CompletionEstimator, DEFAULT_TRIALS, RETURN_FLOOR_PERCENT, VOLATILITY_RATIO};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::to_currency;
use crate::error::{EngineError, EngineResult};
use crate::goal::Goal;
use crate::projection::ProjectionResult;

/// Summary of where a goal ends up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInsights {
    pub required_monthly_contribution: Decimal,
    pub projected_final_value: Decimal,
    pub inflation_adjusted_final_value: Decimal,
    /// Final value minus the starting amount
    pub projected_growth: Decimal,
    pub total_contributions: Decimal,
    pub total_interest_earned: Decimal,
    /// Percentage of simulated paths reaching the target (0-100)
    pub completion_probability: f64,
}

impl GoalInsights {
    /// Assemble insights from a finished projection and the two standalone
    /// calculations
    pub fn from_projection(
        goal: &Goal,
        projection: &ProjectionResult,
        required_contribution: Decimal,
        completion_probability: f64,
    ) -> EngineResult<Self> {
        let last = projection.final_point().ok_or(EngineError::EmptyProjection)?;

        Ok(Self {
            required_monthly_contribution: to_currency(required_contribution),
            projected_final_value: last.projected_value,
            inflation_adjusted_final_value: last.inflation_adjusted_value,
            projected_growth: to_currency(last.projected_value - goal.current_amount),
            total_contributions: last.cumulative_contribution,
            total_interest_earned: last.interest_earned,
            completion_probability,
        })
    }

    /// Whether the current plan contributes at least what the target needs
    pub fn on_track(&self, goal: &Goal) -> bool {
        goal.monthly_contribution >= self.required_monthly_contribution
    }
}
