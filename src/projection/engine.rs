//! Core projection engine for monthly goal growth projections

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use crate::config::{ConfigError, EngineConfig};
use crate::decimal::{to_currency, MathContext};
use crate::error::{EngineError, EngineResult};
use crate::goal::Goal;
use super::growth::{future_value, inflation_adjusted};
use super::points::{ProjectionPoint, ProjectionResult};
use super::state::ProjectionState;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionConfig {
    /// Calendar date of month 0
    pub start_date: NaiveDate,

    /// Rounding context for rates and growth factors
    pub math: MathContext,
}

impl ProjectionConfig {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            math: MathContext::default(),
        }
    }

    pub fn from_engine_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            start_date: config.resolved_start_date(),
            math: config.math_context()?,
        })
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::new(EngineConfig::default().resolved_start_date())
    }
}

/// Rates derived once per goal
#[derive(Debug, Clone, Copy)]
struct GrowthRates {
    /// Monthly nominal return as a fraction
    monthly_return: Decimal,
    /// Annual inflation as a fraction
    annual_inflation: Decimal,
}

impl GrowthRates {
    fn from_goal(goal: &Goal, mc: &MathContext) -> EngineResult<Self> {
        let overflow = EngineError::Overflow { month: 0 };
        Ok(Self {
            monthly_return: mc.monthly_rate(goal.expected_return_rate).ok_or(overflow.clone())?,
            annual_inflation: mc.fraction(goal.inflation_rate).ok_or(overflow)?,
        })
    }
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project a goal month by month, from month 0 through its horizon
    pub fn project_goal(&self, goal: &Goal) -> EngineResult<ProjectionResult> {
        goal.validate()?;

        let mc = &self.config.math;
        let rates = GrowthRates::from_goal(goal, mc)?;
        let months = goal.time_horizon_months;

        let mut result = ProjectionResult::with_capacity(goal.name.clone(), months as usize + 1);
        let mut state = ProjectionState::start();

        result.add_point(self.calculate_month(goal, &rates, &state)?);

        for month in 1..=months {
            state
                .advance(goal.monthly_contribution)
                .ok_or(EngineError::Overflow { month })?;
            result.add_point(self.calculate_month(goal, &rates, &state)?);
        }

        log::debug!(
            "projected goal '{}' over {} months: final value {}",
            goal.name,
            months,
            result.final_point().map(|p| p.projected_value).unwrap_or_default()
        );

        Ok(result)
    }

    /// Calculate the projection point for the state's month
    fn calculate_month(
        &self,
        goal: &Goal,
        rates: &GrowthRates,
        state: &ProjectionState,
    ) -> EngineResult<ProjectionPoint> {
        let mc = &self.config.math;
        let month = state.month;
        let overflow = || EngineError::Overflow { month };

        let nominal = future_value(
            goal.current_amount,
            goal.monthly_contribution,
            rates.monthly_return,
            month,
            mc,
        )
        .ok_or_else(overflow)?;

        let real = inflation_adjusted(nominal, rates.annual_inflation, month, mc)
            .ok_or_else(overflow)?;

        let principal = state.principal(goal.current_amount).ok_or_else(overflow)?;
        let interest = nominal.checked_sub(principal).ok_or_else(overflow)?;

        Ok(ProjectionPoint {
            month_index: month,
            date: self.date_of(month).ok_or_else(overflow)?,
            projected_value: to_currency(nominal),
            inflation_adjusted_value: to_currency(real),
            cumulative_contribution: to_currency(state.cumulative_contribution),
            interest_earned: to_currency(interest),
        })
    }

    /// Calendar date of a month index (end-of-month dates are clamped)
    fn date_of(&self, month: u32) -> Option<NaiveDate> {
        self.config.start_date.checked_add_months(Months::new(month))
    }
}
