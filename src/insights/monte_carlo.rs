//! Monte Carlo estimate of the probability of reaching a goal
//!
//! Each trial walks the goal month by month with an annual return drawn from
//! a normal distribution centred on the expected return, with a standard
//! deviation of 30% of that return. A trial succeeds when its final value
//! meets or exceeds the target.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::decimal::{from_sample, MathContext};
use crate::error::EngineResult;
use crate::goal::Goal;

/// Trials per estimate unless configured otherwise
pub const DEFAULT_TRIALS: u32 = 1000;

/// Standard deviation of the sampled return, as a fraction of the mean
pub const VOLATILITY_RATIO: Decimal = dec!(0.3);

/// Lowest annual return (percent) a sample may take
pub const RETURN_FLOOR_PERCENT: Decimal = dec!(-99);

/// Estimates completion probability by simulating randomized growth paths
#[derive(Debug, Clone)]
pub struct CompletionEstimator {
    trials: u32,
    math: MathContext,
}

impl CompletionEstimator {
    pub fn new(trials: u32, math: MathContext) -> Self {
        Self {
            trials: trials.max(1),
            math,
        }
    }

    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// Percentage (0-100) of trials that reach the target, drawing from `rng`
    pub fn estimate<R: Rng + ?Sized>(&self, goal: &Goal, rng: &mut R) -> EngineResult<f64> {
        goal.validate()?;

        let mean = goal.expected_return_rate;
        let std_dev = self.math.round(mean * VOLATILITY_RATIO);

        let successes = (0..self.trials)
            .filter(|_| self.run_trial(goal, mean, std_dev, rng) >= goal.target_amount)
            .count();

        let probability = successes as f64 / self.trials as f64 * 100.0;
        log::debug!(
            "goal '{}': {}/{} trials reached target ({:.1}%)",
            goal.name,
            successes,
            self.trials,
            probability
        );

        Ok(probability)
    }

    /// Estimate with a generator seeded from `seed`
    pub fn estimate_seeded(&self, goal: &Goal, seed: u64) -> EngineResult<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.estimate(goal, &mut rng)
    }

    /// Estimate with a freshly seeded generator, independent of other calls
    pub fn estimate_from_entropy(&self, goal: &Goal) -> EngineResult<f64> {
        let mut rng = StdRng::from_entropy();
        self.estimate(goal, &mut rng)
    }

    /// Simulate one path and return its terminal value.
    /// Values too large to represent saturate at `Decimal::MAX`.
    fn run_trial<R: Rng + ?Sized>(
        &self,
        goal: &Goal,
        mean: Decimal,
        std_dev: Decimal,
        rng: &mut R,
    ) -> Decimal {
        let mc = &self.math;
        let mut value = goal.current_amount;

        for _ in 0..goal.time_horizon_months {
            let z: f64 = StandardNormal.sample(rng);
            let sampled = (mean + mc.round(std_dev * from_sample(z))).max(RETURN_FLOOR_PERCENT);
            let monthly_rate = mc.monthly_rate(sampled).unwrap_or(Decimal::ZERO);

            let next = if monthly_rate.is_zero() {
                value.checked_add(goal.monthly_contribution)
            } else {
                mc.mul(value, Decimal::ONE + monthly_rate)
                    .and_then(|grown| mc.add(grown, goal.monthly_contribution))
            };
            value = next.unwrap_or(Decimal::MAX);
        }

        value
    }
}

impl Default for CompletionEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_TRIALS, MathContext::default())
    }
}
