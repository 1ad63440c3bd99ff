//! Estimation engine for CSAT surveys: point estimates, t-distribution
//! confidence intervals, and finite population correction.
//!
//! The engine is a linear three-stage pure pipeline. Each stage is a free
//! function consuming the previous stage's outputs, and
//! [`estimator::CsatEstimator`] wires them together for callers that want a
//! single report per survey snapshot.

pub mod estimator;

pub use estimator::{
    CsatEstimator, EstimationConfig, EstimationReport, PointEstimate, RatingHistogram,
};
