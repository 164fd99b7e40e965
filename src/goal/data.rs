//! Financial goal record and its validation rules

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Longest horizon the engine will project (100 years)
pub const MAX_HORIZON_MONTHS: u32 = 1200;

/// Rates are percentages stored with five digits and two decimals
pub const MAX_RATE_PERCENT: Decimal = dec!(1000);

/// A financial goal and the assumptions used to project it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Display name of the goal
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Amount the goal should reach by the end of the horizon
    pub target_amount: Decimal,

    /// Starting principal
    pub current_amount: Decimal,

    /// Deposit made at the end of every month
    pub monthly_contribution: Decimal,

    /// Number of months to project
    pub time_horizon_months: u32,

    /// Expected annual nominal return, in percent (7 = 7%)
    pub expected_return_rate: Decimal,

    /// Expected annual inflation, in percent
    pub inflation_rate: Decimal,

    /// Calendar date the user wants to reach the target by (informational)
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

impl Goal {
    /// Create a goal with the required fields
    pub fn new(
        name: impl Into<String>,
        target_amount: Decimal,
        current_amount: Decimal,
        monthly_contribution: Decimal,
        time_horizon_months: u32,
        expected_return_rate: Decimal,
        inflation_rate: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            target_amount,
            current_amount,
            monthly_contribution,
            time_horizon_months,
            expected_return_rate,
            inflation_rate,
            target_date: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_target_date(mut self, target_date: NaiveDate) -> Self {
        self.target_date = Some(target_date);
        self
    }

    /// Copy of this goal with a different expected return (for sensitivity runs)
    pub fn with_return_rate(&self, expected_return_rate: Decimal) -> Self {
        Self {
            expected_return_rate,
            ..self.clone()
        }
    }

    /// Copy of this goal with a different monthly contribution
    pub fn with_contribution(&self, monthly_contribution: Decimal) -> Self {
        Self {
            monthly_contribution,
            ..self.clone()
        }
    }

    /// Check every range constraint; the first violation is returned
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        if self.target_amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveTarget(self.target_amount));
        }

        non_negative("currentAmount", self.current_amount)?;
        non_negative("monthlyContribution", self.monthly_contribution)?;
        non_negative("expectedReturnRate", self.expected_return_rate)?;
        non_negative("inflationRate", self.inflation_rate)?;
        below_rate_cap("expectedReturnRate", self.expected_return_rate)?;
        below_rate_cap("inflationRate", self.inflation_rate)?;

        if self.time_horizon_months == 0 {
            return Err(ValidationError::HorizonTooShort);
        }
        if self.time_horizon_months > MAX_HORIZON_MONTHS {
            return Err(ValidationError::HorizonTooLong {
                months: self.time_horizon_months,
                max: MAX_HORIZON_MONTHS,
            });
        }

        Ok(())
    }
}

fn non_negative(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

fn below_rate_cap(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value >= MAX_RATE_PERCENT {
        return Err(ValidationError::RateOutOfRange {
            field,
            value,
            max: MAX_RATE_PERCENT,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_goal() -> Goal {
        Goal::new("House deposit", dec!(50000), dec!(5000), dec!(500), 60, dec!(7), dec!(2.5))
    }

    #[test]
    fn test_valid_goal() {
        assert_eq!(sample_goal().validate(), Ok(()));
    }

    #[test]
    fn test_zero_amounts_and_rates_are_allowed() {
        let goal = Goal::new("Cash", dec!(1), Decimal::ZERO, Decimal::ZERO, 1, Decimal::ZERO, Decimal::ZERO);
        assert_eq!(goal.validate(), Ok(()));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut goal = sample_goal();
        goal.name = "   ".to_string();
        assert_eq!(goal.validate(), Err(ValidationError::BlankName));
    }

    #[test]
    fn test_target_must_be_positive() {
        let mut goal = sample_goal();
        goal.target_amount = Decimal::ZERO;
        assert_eq!(goal.validate(), Err(ValidationError::NonPositiveTarget(Decimal::ZERO)));
    }

    #[test]
    fn test_negative_values_rejected() {
        let goal = sample_goal().with_contribution(dec!(-1));
        assert_eq!(
            goal.validate(),
            Err(ValidationError::Negative { field: "monthlyContribution", value: dec!(-1) })
        );

        let goal = sample_goal().with_return_rate(dec!(-0.5));
        assert!(matches!(
            goal.validate(),
            Err(ValidationError::Negative { field: "expectedReturnRate", .. })
        ));
    }

    #[test]
    fn test_horizon_bounds() {
        let mut goal = sample_goal();
        goal.time_horizon_months = 0;
        assert_eq!(goal.validate(), Err(ValidationError::HorizonTooShort));

        goal.time_horizon_months = MAX_HORIZON_MONTHS + 1;
        assert!(matches!(goal.validate(), Err(ValidationError::HorizonTooLong { .. })));
    }

    #[test]
    fn test_rate_cap() {
        let goal = sample_goal().with_return_rate(dec!(1000));
        assert!(matches!(goal.validate(), Err(ValidationError::RateOutOfRange { .. })));
        assert!(sample_goal().with_return_rate(dec!(999.99)).validate().is_ok());
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = r#"{
            "name": "Retirement",
            "targetAmount": "250000",
            "currentAmount": 10000,
            "monthlyContribution": 750.50,
            "timeHorizonMonths": 240,
            "expectedReturnRate": 6.5,
            "inflationRate": 2,
            "targetDate": "2045-06-30"
        }"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.target_amount, dec!(250000));
        assert_eq!(goal.monthly_contribution, dec!(750.50));
        assert_eq!(goal.time_horizon_months, 240);
        assert_eq!(goal.description, None);
        assert_eq!(goal.target_date, NaiveDate::from_ymd_opt(2045, 6, 30));
    }

    #[test]
    fn test_json_missing_field_is_an_error() {
        let json = r#"{ "name": "Car", "targetAmount": 100 }"#;
        assert!(serde_json::from_str::<Goal>(json).is_err());
    }
}
