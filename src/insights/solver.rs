//! Required monthly contribution to reach a target
//!
//! Inverts the future-value formula for the payment:
//! PMT = (FV - PV * (1 + r)^n) / [((1 + r)^n - 1) / r]

use rust_decimal::Decimal;

use crate::decimal::MathContext;
use crate::error::{EngineError, EngineResult};
use crate::goal::Goal;
use crate::projection::growth::{annuity_factor, compound_factor};

/// Monthly contribution that brings the goal exactly to its target at the
/// horizon, at full context precision. Zero when principal growth alone
/// already reaches the target.
pub fn required_monthly_contribution(goal: &Goal, mc: &MathContext) -> EngineResult<Decimal> {
    goal.validate()?;

    let months = goal.time_horizon_months;
    let overflow = || EngineError::Overflow { month: months };
    let monthly_rate = mc.monthly_rate(goal.expected_return_rate).ok_or_else(overflow)?;

    solve_contribution(goal.target_amount, goal.current_amount, monthly_rate, months, mc)
        .ok_or_else(overflow)
}

/// Solve for the level payment over `months` months
pub fn solve_contribution(
    target: Decimal,
    present_value: Decimal,
    monthly_rate: Decimal,
    months: u32,
    mc: &MathContext,
) -> Option<Decimal> {
    if months == 0 {
        return target.checked_sub(present_value);
    }

    let compound = compound_factor(monthly_rate, months, mc)?;
    let from_principal = mc.mul(present_value, compound)?;
    let remaining = mc.sub(target, from_principal)?;

    if remaining <= Decimal::ZERO {
        return Some(Decimal::ZERO);
    }

    let factor = annuity_factor(monthly_rate, months, compound, mc)?;
    mc.div(remaining, factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::to_currency;
    use crate::projection::{ProjectionConfig, ProjectionEngine};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn engine() -> ProjectionEngine {
        ProjectionEngine::new(ProjectionConfig::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()))
    }

    #[test]
    fn test_reference_contribution() {
        let goal = Goal::new("Fund", dec!(10000), dec!(1000), dec!(100), 12, dec!(6), dec!(2));
        let required = required_monthly_contribution(&goal, &MathContext::default()).unwrap();
        assert_eq!(to_currency(required), dec!(724.60));
    }

    #[test]
    fn test_feeding_back_reaches_target() {
        let mc = MathContext::default();
        let goals = [
            Goal::new("Fund", dec!(10000), dec!(1000), Decimal::ZERO, 12, dec!(6), dec!(2)),
            Goal::new("House", dec!(50000), dec!(5000), Decimal::ZERO, 24, dec!(12), dec!(3)),
            Goal::new("Retire", dec!(1000000), dec!(20000), Decimal::ZERO, 480, dec!(7.25), dec!(2.5)),
            Goal::new("Cash", dec!(3600), Decimal::ZERO, Decimal::ZERO, 36, Decimal::ZERO, Decimal::ZERO),
        ];

        for goal in goals {
            let required = required_monthly_contribution(&goal, &mc).unwrap();
            assert!(required > Decimal::ZERO);

            let projection = engine().project_goal(&goal.with_contribution(required)).unwrap();
            let final_value = projection.final_point().unwrap().projected_value;
            let diff = (final_value - goal.target_amount).abs();
            assert!(diff <= dec!(0.01), "{}: final {} vs target {}", goal.name, final_value, goal.target_amount);
        }
    }

    #[test]
    fn test_zero_rate_divides_by_months() {
        let goal = Goal::new("Cash", dec!(3600), dec!(600), dec!(0), 30, Decimal::ZERO, Decimal::ZERO);
        let required = required_monthly_contribution(&goal, &MathContext::default()).unwrap();
        assert_eq!(required, dec!(100));
    }

    #[test]
    fn test_principal_growth_already_enough() {
        let mc = MathContext::default();
        let exact = Goal::new("Met", dec!(1000), dec!(1000), dec!(50), 12, Decimal::ZERO, dec!(2));
        assert_eq!(required_monthly_contribution(&exact, &mc).unwrap(), Decimal::ZERO);

        let below = Goal::new("Below", dec!(1050), dec!(1000), dec!(50), 12, dec!(6), dec!(2));
        assert_eq!(required_monthly_contribution(&below, &mc).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_zero_months_is_plain_difference() {
        let mc = MathContext::default();
        assert_eq!(solve_contribution(dec!(500), dec!(200), dec!(0.01), 0, &mc), Some(dec!(300)));
        assert_eq!(solve_contribution(dec!(100), dec!(200), dec!(0.01), 0, &mc), Some(dec!(-100)));
    }

    #[test]
    fn test_invalid_goal_is_rejected() {
        let goal = Goal::new("Bad", dec!(-1), dec!(0), dec!(0), 12, dec!(5), dec!(2));
        let err = required_monthly_contribution(&goal, &MathContext::default()).unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }
}
