//! Point estimation — weighted mean score and top-two-box percent.

use csat_core::errors::EstimateError;

use super::types::{PointEstimate, RatingHistogram, SATISFIED_RATING};

/// Compute the CSAT point estimates for a histogram.
///
/// `score` is the count-weighted mean rating; `percent` is the fraction of
/// respondents rating 4 or 5. An empty histogram is an error: the mean is
/// undefined and no fallback value is fabricated.
pub fn point_estimate(histogram: &RatingHistogram) -> Result<PointEstimate, EstimateError> {
    let sample_size = histogram.sample_size();
    if sample_size == 0 {
        return Err(EstimateError::EmptySample);
    }
    let n = sample_size as f64;

    let weighted_sum: u64 = histogram.iter().map(|(r, c)| r as u64 * c).sum();
    let satisfied: u64 = histogram
        .iter()
        .filter(|&(r, _)| r >= SATISFIED_RATING)
        .map(|(_, c)| c)
        .sum();

    Ok(PointEstimate {
        score: weighted_sum as f64 / n,
        percent: satisfied as f64 / n,
    })
}
