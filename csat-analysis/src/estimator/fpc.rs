//! Finite population correction for sampling without replacement.

use csat_core::errors::EstimateError;

use super::interval::t_critical;
use super::types::{CorrectedSummary, IntervalEstimate, IntervalSummary};

/// Floor for the effective correction multiplier.
///
/// A population no larger than the sample drives the raw factor to zero, or
/// through a negative radicand to NaN. The margin then conceptually
/// collapses to the point estimate, but a literal zero or NaN must never
/// reach display code, so the multiplier is clamped here. The exact value
/// only needs to be small and positive.
pub const FPC_FLOOR: f64 = 1e-8;

/// Correction factor `sqrt((N - n) / (N - 1))`, clamped to [`FPC_FLOOR`].
///
/// Degenerate populations (N ≤ 1, N ≤ n) are an expected edge case, not an
/// error: the factor floors instead of going to zero, negative, or NaN.
pub fn correction_factor(total_population: u64, sample_size: u64) -> f64 {
    if total_population <= 1 {
        return FPC_FLOOR;
    }
    let population = total_population as f64;
    let n = sample_size as f64;
    let radicand = (population - n) / (population - 1.0);
    if radicand <= 0.0 || !radicand.is_finite() {
        return FPC_FLOOR;
    }
    let factor = radicand.sqrt();
    if factor.is_finite() {
        factor.max(FPC_FLOOR)
    } else {
        FPC_FLOOR
    }
}

/// Recompute both margins with the correction factor applied.
///
/// Reuses the degrees of freedom and confidence level recorded in the
/// stage-two summary, so the critical value matches the uncorrected
/// intervals exactly.
pub fn apply_correction(
    summary: &IntervalSummary,
    sample_size: u64,
    total_population: u64,
) -> Result<CorrectedSummary, EstimateError> {
    let factor = correction_factor(total_population, sample_size);
    let t = t_critical(summary.confidence_level, summary.degrees_freedom as f64)?;

    Ok(CorrectedSummary {
        total_population,
        factor,
        score: IntervalEstimate::symmetric(
            summary.score.center,
            t * summary.std_error_score * factor,
        ),
        percent: IntervalEstimate::symmetric(
            summary.percent.center,
            t * summary.std_error_percent * factor,
        ),
    })
}
