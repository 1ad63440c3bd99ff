//! Symmetric t-distribution confidence intervals.
//!
//! Uses T-distribution quantiles via `statrs`.

use statrs::distribution::{ContinuousCDF, StudentsT};

use csat_core::errors::EstimateError;

use super::types::{IntervalEstimate, IntervalSummary, PointEstimate, RatingHistogram};

/// Compute symmetric t-intervals for the score and percent estimates.
///
/// The score interval uses the unbiased sample variance of individual
/// ratings recovered from the grouped counts; the percent interval uses the
/// binomial-proportion standard error under the normal approximation.
/// Bounds are not clamped to the natural range of either metric.
pub fn interval_estimate(
    histogram: &RatingHistogram,
    point: &PointEstimate,
    confidence_level: f64,
) -> Result<IntervalSummary, EstimateError> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(EstimateError::InvalidConfidenceLevel(confidence_level));
    }
    let sample_size = histogram.sample_size();
    if sample_size < 2 {
        return Err(EstimateError::InsufficientSample { sample_size });
    }
    let n = sample_size as f64;
    let degrees_freedom = sample_size - 1;
    let df = degrees_freedom as f64;

    // Unbiased variance of the individual ratings (Bessel's correction:
    // divide by n - 1, not n), computed from the grouped counts.
    let squared_dev: f64 = histogram
        .iter()
        .map(|(rating, count)| {
            let diff = rating as f64 - point.score;
            diff * diff * count as f64
        })
        .sum();
    let variance = squared_dev / df;

    let std_error_score = (variance / n).sqrt();
    let std_error_percent = (point.percent * (1.0 - point.percent) / n).sqrt();

    let t = t_critical(confidence_level, df)?;

    Ok(IntervalSummary {
        degrees_freedom,
        confidence_level,
        score: IntervalEstimate::symmetric(point.score, t * std_error_score),
        percent: IntervalEstimate::symmetric(point.percent, t * std_error_percent),
        std_error_score,
        std_error_percent,
    })
}

/// Two-sided critical value: the Student's t quantile at
/// `1 - (1 - level) / 2` for the given degrees of freedom.
///
/// Construction or evaluation failures surface as errors; there is no
/// fallback value.
pub(crate) fn t_critical(
    confidence_level: f64,
    degrees_freedom: f64,
) -> Result<f64, EstimateError> {
    let t_dist = StudentsT::new(0.0, 1.0, degrees_freedom)
        .map_err(|e| EstimateError::Quantile(e.to_string()))?;
    let t = t_dist.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0);
    if t.is_finite() {
        Ok(t)
    } else {
        Err(EstimateError::Quantile(format!(
            "non-finite quantile for level {confidence_level} with {degrees_freedom} degrees of freedom"
        )))
    }
}
