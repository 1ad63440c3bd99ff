//! CSAT estimation — a three-stage pure pipeline.
//!
//! Stage order, each stage consuming the previous stage's outputs plus new
//! configuration:
//! - Point estimation → weighted mean score + top-two-box percent
//! - Interval estimation → symmetric t-intervals for both metrics
//! - Finite population correction → shrunk intervals when sampling a known
//!   finite population without replacement

pub mod fpc;
pub mod interval;
pub mod pipeline;
pub mod point;
pub mod types;

pub use fpc::FPC_FLOOR;
pub use pipeline::CsatEstimator;
pub use types::{
    CorrectedSummary, EstimationConfig, EstimationReport, IntervalEstimate, IntervalSummary,
    PointEstimate, RatingHistogram,
};
