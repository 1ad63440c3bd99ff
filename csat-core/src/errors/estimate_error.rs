//! Estimation errors.

/// Errors that can occur during CSAT estimation.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    /// The histogram has zero responses; the mean is undefined.
    #[error("Empty sample: histogram has no responses")]
    EmptySample,

    /// Fewer than 2 responses; zero degrees of freedom leaves the
    /// t-distribution undefined. Point estimates are still valid.
    #[error("Insufficient sample: interval estimation needs at least 2 responses, got {sample_size}")]
    InsufficientSample { sample_size: u64 },

    /// Confidence level outside the open interval (0, 1).
    #[error("Confidence level {0} is outside the open interval (0, 1)")]
    InvalidConfidenceLevel(f64),

    /// Histogram construction from pairs with ratings not exactly 1..=5.
    #[error("Invalid histogram: {0}")]
    InvalidHistogram(String),

    /// The t-distribution quantile could not be computed.
    #[error("t-distribution quantile failed: {0}")]
    Quantile(String),
}
