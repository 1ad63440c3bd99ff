//! Core types for CSAT estimation.

use serde::{Deserialize, Serialize};

use csat_core::config::EstimatorConfig;
use csat_core::errors::EstimateError;

/// Lowest rating on the survey scale.
pub const MIN_RATING: u8 = 1;
/// Highest rating on the survey scale.
pub const MAX_RATING: u8 = 5;
/// Lowest rating counted as satisfied (top-two-box).
pub const SATISFIED_RATING: u8 = 4;

/// Response counts for a five-level survey, indexed by rating 1..=5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingHistogram {
    counts: [u64; 5],
}

impl RatingHistogram {
    /// Create a histogram from counts ordered by rating 1..=5.
    pub fn new(counts: [u64; 5]) -> Self {
        Self { counts }
    }

    /// Create a histogram from (rating, count) pairs.
    ///
    /// The ratings must be unique and span exactly 1..=5.
    pub fn from_pairs(pairs: &[(u8, u64)]) -> Result<Self, EstimateError> {
        if pairs.len() != 5 {
            return Err(EstimateError::InvalidHistogram(format!(
                "expected 5 rating levels, got {}",
                pairs.len()
            )));
        }
        let mut counts: [Option<u64>; 5] = [None; 5];
        for &(rating, count) in pairs {
            if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(EstimateError::InvalidHistogram(format!(
                    "rating {rating} is outside 1..=5"
                )));
            }
            let slot = &mut counts[(rating - MIN_RATING) as usize];
            if slot.is_some() {
                return Err(EstimateError::InvalidHistogram(format!(
                    "duplicate rating {rating}"
                )));
            }
            *slot = Some(count);
        }
        // 5 unique in-range ratings fill every slot
        Ok(Self {
            counts: counts.map(|c| c.unwrap_or(0)),
        })
    }

    /// Number of responses at `rating`. Zero for ratings outside 1..=5.
    pub fn count(&self, rating: u8) -> u64 {
        if (MIN_RATING..=MAX_RATING).contains(&rating) {
            self.counts[(rating - MIN_RATING) as usize]
        } else {
            0
        }
    }

    /// Total number of responses.
    pub fn sample_size(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterate over (rating, count) pairs in rating order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| (MIN_RATING + i as u8, count))
    }
}

/// Stage-one output: the two CSAT point estimates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointEstimate {
    /// Count-weighted mean rating, in [1, 5].
    pub score: f64,
    /// Fraction of respondents rating 4 or 5, in [0, 1].
    pub percent: f64,
}

/// A symmetric confidence interval around a point estimate.
///
/// `low <= center <= high` by construction. The bounds are not clamped to
/// the natural range of the metric; callers must not assume they are.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IntervalEstimate {
    pub center: f64,
    pub low: f64,
    pub high: f64,
}

impl IntervalEstimate {
    /// Build a symmetric interval around `center`.
    pub fn symmetric(center: f64, margin: f64) -> Self {
        Self {
            center,
            low: center - margin,
            high: center + margin,
        }
    }

    /// Half-width of the interval.
    pub fn margin(&self) -> f64 {
        self.center - self.low
    }

    /// Full width of the interval.
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Stage-two output: t-intervals for both metrics plus the parameters
/// stage three must reuse verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalSummary {
    /// Sample size minus one.
    pub degrees_freedom: u64,
    /// Two-sided coverage the intervals were built for.
    pub confidence_level: f64,
    /// Interval for the mean rating.
    pub score: IntervalEstimate,
    /// Interval for the top-two-box fraction.
    pub percent: IntervalEstimate,
    /// Standard error of the mean rating.
    pub std_error_score: f64,
    /// Binomial-proportion standard error of the percent.
    pub std_error_percent: f64,
}

/// Stage-three output: intervals recomputed with the finite population
/// correction applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectedSummary {
    /// Population size the correction was computed against.
    pub total_population: u64,
    /// Effective multiplier actually applied (floor-clamped, never zero
    /// or NaN).
    pub factor: f64,
    /// Corrected interval for the mean rating.
    pub score: IntervalEstimate,
    /// Corrected interval for the top-two-box fraction.
    pub percent: IntervalEstimate,
}

/// Request-scoped estimation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationConfig {
    /// Two-sided coverage for interval estimation, in the open (0, 1).
    pub confidence_level: f64,
    /// Total surveys sent out. `None` means "assume the population equals
    /// the observed sample size".
    pub total_population: Option<u64>,
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
            total_population: None,
        }
    }
}

impl EstimationConfig {
    /// Build a request config from the file-level estimator config.
    pub fn from_estimator_config(config: &EstimatorConfig) -> Self {
        Self {
            confidence_level: config.effective_confidence_level(),
            total_population: config.total_population,
        }
    }
}

/// One full pipeline run over a survey snapshot.
///
/// The interval sections are `None` when the sample cannot support them;
/// the point estimates stay valid regardless.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationReport {
    pub sample_size: u64,
    pub confidence_level: f64,
    pub point: PointEstimate,
    pub interval: Option<IntervalSummary>,
    pub corrected: Option<CorrectedSummary>,
}

impl EstimationReport {
    /// Serialize the report for a consuming shell (UI, API, CLI).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
