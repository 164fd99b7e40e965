//! Engine configuration
//!
//! Every field has a default, so a JSON config file only needs the keys it
//! wants to override:
//!
//! ```json
//! { "precision": 20, "monteCarloTrials": 5000, "seed": 42 }
//! ```

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

use crate::decimal::{MathContext, DEFAULT_PRECISION};
use crate::insights::DEFAULT_TRIALS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("precision must be between 10 and 28 significant digits (got {0})")]
    Precision(u32),

    #[error("monte carlo trial count must be at least 1")]
    NoTrials,

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration shared by the projection engine and the estimator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Date of month 0; today when absent
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// Significant digits for intermediate rates and factors
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Number of Monte Carlo paths per estimate
    #[serde(default = "default_trials")]
    pub monte_carlo_trials: u32,

    /// Fixed RNG seed for reproducible estimates; fresh entropy per call when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_precision() -> u32 { DEFAULT_PRECISION }
fn default_trials() -> u32 { DEFAULT_TRIALS }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            start_date: None,
            precision: DEFAULT_PRECISION,
            monte_carlo_trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Load a config from a JSON file and validate it
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.math_context()?;
        if self.monte_carlo_trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        Ok(())
    }

    pub fn math_context(&self) -> Result<MathContext, ConfigError> {
        MathContext::new(self.precision)
    }

    /// Resolve the date of month 0
    pub fn resolved_start_date(&self) -> NaiveDate {
        self.start_date.unwrap_or_else(|| Local::now().date_naive())
    }
}
