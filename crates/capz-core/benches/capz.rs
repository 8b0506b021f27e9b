//! Benchmarks for CAPZ estimation
//!
//! Tests performance of the block design matrix assembly and the normal
//! equations solve across problem sizes.

use capz_core::CommonPoleZero;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;

/// Create synthetic multi-channel impulse responses with two damped
/// sinusoid modes per channel
fn create_test_responses(n: usize, m: usize) -> Array2<f64> {
    Array2::from_shape_fn((m, n), |(i, t)| {
        let t = t as f64;
        let damp = (-t / (12.0 + i as f64)).exp();
        damp * ((0.6 + 0.15 * i as f64) * t).sin()
            + 0.4 * damp * ((1.7 - 0.05 * i as f64) * t + 0.2).cos()
            + 0.1 / (t + 1.0)
    })
}

fn bench_capz_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("capz_fit");
    group.sample_size(10); // Reduce sample size for slower benchmarks

    for n in [64, 128, 256].iter() {
        let h_r = create_test_responses(*n, 4);

        for p in [4usize, 8].iter() {
            let id = BenchmarkId::new(format!("{}samples", n), p);

            group.bench_with_input(id, p, |b, &p| {
                b.iter(|| {
                    let mut est = CommonPoleZero::new();
                    est.fit(black_box(&h_r), *n, 4, p, 2)
                        .expect("benchmark fit should succeed");
                    est
                })
            });
        }
    }

    group.finish();
}

fn bench_capz_channels(c: &mut Criterion) {
    let mut group = c.benchmark_group("capz_channels");
    group.sample_size(10);

    for m in [2, 8, 16].iter() {
        let h_r = create_test_responses(128, *m);

        group.bench_with_input(BenchmarkId::from_parameter(m), m, |b, &m| {
            b.iter(|| {
                let mut est = CommonPoleZero::new();
                est.fit(black_box(&h_r), 128, m, 6, 2)
                    .expect("benchmark fit should succeed");
                est
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_capz_fit, bench_capz_channels);
criterion_main!(benches);
