//! End-to-end tests for the estimation pipeline.

use csat_analysis::estimator::{CsatEstimator, EstimationConfig, RatingHistogram, FPC_FLOOR};
use csat_core::config::CsatConfig;
use csat_core::errors::EstimateError;

/// The survey {1, 5, 3, 4, 5, 2, 1, 4, 3, 4} as a histogram.
fn reference() -> RatingHistogram {
    RatingHistogram::new([2, 1, 2, 3, 2])
}

#[test]
fn test_full_pipeline_with_known_population() {
    let estimator = CsatEstimator::new(EstimationConfig {
        confidence_level: 0.95,
        total_population: Some(100),
    });
    let report = estimator.estimate(&reference()).unwrap();

    assert_eq!(report.sample_size, 10);
    assert!((report.point.score - 3.3).abs() < 1e-12);
    assert!((report.point.percent - 0.5).abs() < 1e-12);

    let summary = report.interval.as_ref().expect("interval section");
    assert_eq!(summary.degrees_freedom, 9);
    assert!((summary.score.low - 2.241637).abs() < 1e-3);
    assert!((summary.score.high - 4.358363).abs() < 1e-3);

    let corrected = report.corrected.as_ref().expect("corrected section");
    assert_eq!(corrected.total_population, 100);
    // sqrt((100 - 10) / 99)
    assert!((corrected.factor - (90.0f64 / 99.0).sqrt()).abs() < 1e-12);
    assert!(corrected.score.margin() < summary.score.margin());
    assert!(corrected.percent.margin() < summary.percent.margin());
}

#[test]
fn test_point_estimates_survive_interval_failure() {
    let estimator = CsatEstimator::default();
    let single = RatingHistogram::new([0, 0, 1, 0, 0]);

    let report = estimator.estimate(&single).unwrap();
    assert_eq!(report.point.score, 3.0);
    assert_eq!(report.point.percent, 0.0);
    assert!(report.interval.is_none());
    assert!(report.corrected.is_none());

    // The strict variant surfaces the same condition as an error instead.
    let err = estimator.estimate_strict(&single).unwrap_err();
    assert!(matches!(
        err,
        EstimateError::InsufficientSample { sample_size: 1 }
    ));
}

#[test]
fn test_default_population_floors_the_correction() {
    let estimator = CsatEstimator::default();
    let report = estimator.estimate(&reference()).unwrap();
    let corrected = report.corrected.expect("corrected section");
    assert_eq!(corrected.total_population, report.sample_size);
    assert_eq!(corrected.factor, FPC_FLOOR);
    assert!(corrected.score.margin() > 0.0);
    assert!(corrected.score.margin().is_finite());
}

#[test]
fn test_report_serializes_for_display() {
    let estimator = CsatEstimator::new(EstimationConfig {
        confidence_level: 0.90,
        total_population: Some(500),
    });
    let report = estimator.estimate(&reference()).unwrap();
    let json = report.to_json().unwrap();

    assert!(json.contains("\"sample_size\": 10"));
    assert!(json.contains("\"score\""));
    assert!(json.contains("\"corrected\""));

    // serde_json renders non-finite floats as null; the floored degenerate
    // setup must not produce any.
    let floored = CsatEstimator::default().estimate(&reference()).unwrap();
    assert!(!floored.to_json().unwrap().contains("null"));
}

#[test]
fn test_request_config_from_file_config() {
    let file_config = CsatConfig::from_toml(
        r#"
[estimator]
confidence_level = 0.80
total_population = 2000
"#,
    )
    .unwrap();
    let config = EstimationConfig::from_estimator_config(&file_config.estimator);
    let report = CsatEstimator::new(config).estimate(&reference()).unwrap();

    assert!((report.confidence_level - 0.80).abs() < 1e-12);
    assert_eq!(report.corrected.unwrap().total_population, 2000);
}

#[test]
fn test_wider_interval_at_higher_confidence() {
    let narrow = CsatEstimator::new(EstimationConfig {
        confidence_level: 0.80,
        total_population: None,
    })
    .estimate(&reference())
    .unwrap();
    let wide = CsatEstimator::new(EstimationConfig {
        confidence_level: 0.99,
        total_population: None,
    })
    .estimate(&reference())
    .unwrap();

    let narrow_margin = narrow.interval.unwrap().score.margin();
    let wide_margin = wide.interval.unwrap().score.margin();
    assert!(wide_margin > narrow_margin);
}
