//! Projection output structures

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Projected position of a goal at one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    /// Months since the start (0 = today)
    pub month_index: u32,
    pub date: NaiveDate,

    // Currency amounts, 2 dp
    pub projected_value: Decimal,
    pub inflation_adjusted_value: Decimal,
    pub cumulative_contribution: Decimal,
    pub interest_earned: Decimal,
}

/// Complete projection for one goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Name of the projected goal
    pub goal_name: String,

    /// One point per month, month 0 through the horizon
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionResult {
    pub fn new(goal_name: impl Into<String>) -> Self {
        Self {
            goal_name: goal_name.into(),
            points: Vec::new(),
        }
    }

    pub fn with_capacity(goal_name: impl Into<String>, capacity: usize) -> Self {
        Self {
            goal_name: goal_name.into(),
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at the end of the horizon
    pub fn final_point(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    /// Point at a given month index
    pub fn at_month(&self, month_index: u32) -> Option<&ProjectionPoint> {
        self.points.get(month_index as usize)
    }
}
