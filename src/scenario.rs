//! Goal planner for single goals and batch runs
//!
//! Builds the projection engine and completion estimator once from an
//! `EngineConfig`, then answers projection, solve and insight queries for any
//! number of goals.

use rand::Rng;
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::{ConfigError, EngineConfig};
use crate::error::EngineResult;
use crate::goal::Goal;
use crate::insights::{required_monthly_contribution, CompletionEstimator, GoalInsights};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Projection and insights for one goal
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalAnalysis {
    pub goal: Goal,
    pub projection: ProjectionResult,
    pub insights: GoalInsights,
}

/// Pre-configured planner for efficient batch projections
///
/// # Example
/// ```ignore
/// let planner = GoalPlanner::new(EngineConfig::default())?;
/// let analysis = planner.analyze(&goal)?;
/// println!("{:.1}%", analysis.insights.completion_probability);
/// ```
#[derive(Debug, Clone)]
pub struct GoalPlanner {
    config: EngineConfig,
    engine: ProjectionEngine,
    estimator: CompletionEstimator,
}

impl GoalPlanner {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let engine = ProjectionEngine::new(ProjectionConfig::from_engine_config(&config)?);
        let estimator = CompletionEstimator::new(config.monte_carlo_trials, config.math_context()?);

        Ok(Self {
            config,
            engine,
            estimator,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn project(&self, goal: &Goal) -> EngineResult<ProjectionResult> {
        self.engine.project_goal(goal)
    }

    pub fn required_contribution(&self, goal: &Goal) -> EngineResult<Decimal> {
        required_monthly_contribution(goal, &self.engine.config().math)
    }

    /// Completion probability using the configured seed, or fresh entropy
    pub fn completion_probability(&self, goal: &Goal) -> EngineResult<f64> {
        self.probability_for(goal, 0)
    }

    pub fn completion_probability_with<R: Rng + ?Sized>(&self, goal: &Goal, rng: &mut R) -> EngineResult<f64> {
        self.estimator.estimate(goal, rng)
    }

    /// Full projection plus insights for a goal
    pub fn analyze(&self, goal: &Goal) -> EngineResult<GoalAnalysis> {
        self.analyze_indexed(goal, 0)
    }

    /// Same as [`analyze`](Self::analyze) with a caller-supplied generator
    pub fn analyze_with<R: Rng + ?Sized>(&self, goal: &Goal, rng: &mut R) -> EngineResult<GoalAnalysis> {
        let probability = self.estimator.estimate(goal, rng)?;
        self.assemble(goal, probability)
    }

    /// Analyze many goals in parallel; results keep the input order.
    /// With a configured seed, goal `i` uses seed `seed + i`.
    pub fn run_batch(&self, goals: &[Goal]) -> Vec<EngineResult<GoalAnalysis>> {
        log::info!("analyzing {} goals", goals.len());

        let results: Vec<_> = goals
            .par_iter()
            .enumerate()
            .map(|(index, goal)| self.analyze_indexed(goal, index as u64))
            .collect();

        let failures = results.iter().filter(|r| r.is_err()).count();
        if failures > 0 {
            log::warn!("{} of {} goals failed", failures, goals.len());
        }

        results
    }

    /// Analyze a goal under several expected return rates (percent)
    pub fn run_rate_scenarios(&self, goal: &Goal, return_rates: &[Decimal]) -> Vec<EngineResult<GoalAnalysis>> {
        let variants: Vec<Goal> = return_rates
            .iter()
            .map(|&rate| goal.with_return_rate(rate))
            .collect();
        self.run_batch(&variants)
    }

    fn analyze_indexed(&self, goal: &Goal, index: u64) -> EngineResult<GoalAnalysis> {
        let probability = self.probability_for(goal, index)?;
        self.assemble(goal, probability)
    }

    fn probability_for(&self, goal: &Goal, index: u64) -> EngineResult<f64> {
        match self.config.seed {
            Some(seed) => self.estimator.estimate_seeded(goal, seed.wrapping_add(index)),
            None => self.estimator.estimate_from_entropy(goal),
        }
    }

    fn assemble(&self, goal: &Goal, probability: f64) -> EngineResult<GoalAnalysis> {
        let projection = self.project(goal)?;
        let required = self.required_contribution(goal)?;
        let insights = GoalInsights::from_projection(goal, &projection, required, probability)?;

        Ok(GoalAnalysis {
            goal: goal.clone(),
            projection,
            insights,
        })
    }
}
