//! Goal Projection - compound-growth projection engine for personal financial goals
//!
//! This library provides:
//! - Month-by-month projections with inflation adjustment
//! - Required monthly contribution to reach a target
//! - Monte Carlo completion probability
//! - CSV and text report exports
//! - Batch and return-rate scenario runs

pub mod config;
pub mod decimal;
pub mod error;
pub mod goal;
pub mod projection;
pub mod insights;
pub mod export;
pub mod scenario;

// Re-export commonly used types
pub use config::EngineConfig;
pub use error::{EngineError, ValidationError};
pub use goal::Goal;
pub use projection::{ProjectionEngine, ProjectionConfig, ProjectionPoint, ProjectionResult};
pub use insights::{CompletionEstimator, GoalInsights};
pub use scenario::{GoalAnalysis, GoalPlanner};
