//! Estimation pipeline benchmarks.
//!
//! The histogram is always five buckets, so the variable cost is the
//! t-quantile evaluation as the degrees of freedom grow.
//! Run with: cargo bench -p csat-analysis --bench estimator_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use csat_analysis::estimator::{CsatEstimator, EstimationConfig, RatingHistogram};

fn full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimator");

    for scale in [1u64, 100, 10_000] {
        let histogram =
            RatingHistogram::new([2 * scale, scale, 2 * scale, 3 * scale, 2 * scale]);
        let estimator = CsatEstimator::new(EstimationConfig {
            confidence_level: 0.95,
            total_population: Some(histogram.sample_size() * 10),
        });

        group.bench_with_input(
            BenchmarkId::new("full_pipeline", histogram.sample_size()),
            &histogram,
            |b, h| {
                b.iter(|| estimator.estimate(h).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, full_pipeline);
criterion_main!(benches);
