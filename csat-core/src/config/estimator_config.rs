//! Estimator configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the estimation subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Confidence level for interval estimation, in the open interval
    /// (0, 1). Default: 0.95.
    pub confidence_level: Option<f64>,
    /// Total surveys sent out, with or without response. Default: assume
    /// the population equals the observed sample size.
    pub total_population: Option<u64>,
}

impl EstimatorConfig {
    /// Returns the effective confidence level, defaulting to 0.95.
    pub fn effective_confidence_level(&self) -> f64 {
        self.confidence_level.unwrap_or(0.95)
    }
}
