//! Three-stage estimation pipeline.

use tracing::debug;

use csat_core::errors::EstimateError;

use super::types::{
    CorrectedSummary, EstimationConfig, EstimationReport, IntervalSummary, RatingHistogram,
};
use super::{fpc, interval, point};

/// Stateless orchestrator for the three estimation stages.
///
/// Every call recomputes from scratch; identical inputs produce
/// bit-identical reports.
#[derive(Debug, Clone, Default)]
pub struct CsatEstimator {
    config: EstimationConfig,
}

impl CsatEstimator {
    /// Create an estimator with the given request parameters.
    pub fn new(config: EstimationConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline, degrading gracefully on small samples.
    ///
    /// An empty histogram is an error. A single response still yields the
    /// point estimates; the interval sections are omitted from the report
    /// instead of discarding it.
    pub fn estimate(
        &self,
        histogram: &RatingHistogram,
    ) -> Result<EstimationReport, EstimateError> {
        let mut report = self.point_stage(histogram)?;
        match self.interval_stages(histogram, &report) {
            Ok((summary, corrected)) => {
                report.interval = Some(summary);
                report.corrected = Some(corrected);
                Ok(report)
            }
            Err(EstimateError::InsufficientSample { sample_size }) => {
                debug!(sample_size, "sample too small for intervals, returning point estimates only");
                Ok(report)
            }
            Err(e) => Err(e),
        }
    }

    /// Run the full pipeline, surfacing `InsufficientSample` instead of
    /// degrading to a point-only report.
    pub fn estimate_strict(
        &self,
        histogram: &RatingHistogram,
    ) -> Result<EstimationReport, EstimateError> {
        let mut report = self.point_stage(histogram)?;
        let (summary, corrected) = self.interval_stages(histogram, &report)?;
        report.interval = Some(summary);
        report.corrected = Some(corrected);
        Ok(report)
    }

    fn point_stage(
        &self,
        histogram: &RatingHistogram,
    ) -> Result<EstimationReport, EstimateError> {
        let sample_size = histogram.sample_size();
        let point = point::point_estimate(histogram)?;
        debug!(
            sample_size,
            score = point.score,
            percent = point.percent,
            "point estimates computed"
        );
        Ok(EstimationReport {
            sample_size,
            confidence_level: self.config.confidence_level,
            point,
            interval: None,
            corrected: None,
        })
    }

    fn interval_stages(
        &self,
        histogram: &RatingHistogram,
        report: &EstimationReport,
    ) -> Result<(IntervalSummary, CorrectedSummary), EstimateError> {
        let summary =
            interval::interval_estimate(histogram, &report.point, self.config.confidence_level)?;
        debug!(
            degrees_freedom = summary.degrees_freedom,
            score_margin = summary.score.margin(),
            percent_margin = summary.percent.margin(),
            "t-intervals computed"
        );

        let population = self.config.total_population.unwrap_or(report.sample_size);
        let corrected = fpc::apply_correction(&summary, report.sample_size, population)?;
        debug!(
            population,
            factor = corrected.factor,
            "finite population correction applied"
        );
        Ok((summary, corrected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::fpc::FPC_FLOOR;

    fn reference() -> RatingHistogram {
        RatingHistogram::new([2, 1, 2, 3, 2])
    }

    #[test]
    fn test_full_pipeline_reference_values() {
        let estimator = CsatEstimator::new(EstimationConfig {
            confidence_level: 0.95,
            total_population: Some(100),
        });
        let report = estimator.estimate(&reference()).unwrap();

        assert_eq!(report.sample_size, 10);
        assert!((report.point.score - 3.3).abs() < 1e-12);
        assert!((report.point.percent - 0.5).abs() < 1e-12);

        let summary = report.interval.expect("interval section");
        assert_eq!(summary.degrees_freedom, 9);

        let corrected = report.corrected.expect("corrected section");
        assert_eq!(corrected.total_population, 100);
        assert!(corrected.score.margin() < summary.score.margin());
    }

    #[test]
    fn test_single_response_degrades_to_point_only() {
        let estimator = CsatEstimator::default();
        let report = estimator
            .estimate(&RatingHistogram::new([0, 0, 0, 0, 1]))
            .unwrap();
        assert_eq!(report.sample_size, 1);
        assert_eq!(report.point.score, 5.0);
        assert!(report.interval.is_none());
        assert!(report.corrected.is_none());
    }

    #[test]
    fn test_single_response_strict_is_error() {
        let estimator = CsatEstimator::default();
        let err = estimator
            .estimate_strict(&RatingHistogram::new([0, 0, 0, 0, 1]))
            .unwrap_err();
        assert!(matches!(
            err,
            EstimateError::InsufficientSample { sample_size: 1 }
        ));
    }

    #[test]
    fn test_empty_histogram_is_error_in_both_modes() {
        let estimator = CsatEstimator::default();
        let empty = RatingHistogram::new([0; 5]);
        assert!(matches!(
            estimator.estimate(&empty),
            Err(EstimateError::EmptySample)
        ));
        assert!(matches!(
            estimator.estimate_strict(&empty),
            Err(EstimateError::EmptySample)
        ));
    }

    #[test]
    fn test_invalid_confidence_level_not_masked_by_degrade() {
        let estimator = CsatEstimator::new(EstimationConfig {
            confidence_level: 1.0,
            total_population: None,
        });
        let err = estimator.estimate(&reference()).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidConfidenceLevel(_)));
    }

    #[test]
    fn test_population_defaults_to_sample_size() {
        // With no population configured, N == n and the correction floors.
        let estimator = CsatEstimator::default();
        let report = estimator.estimate(&reference()).unwrap();
        let corrected = report.corrected.expect("corrected section");
        assert_eq!(corrected.total_population, 10);
        assert_eq!(corrected.factor, FPC_FLOOR);
    }
}
