//! Benchmarks for movavg engines
//!
//! Run with: cargo bench --features full

// Require all features for benchmarks
#[cfg(not(all(feature = "batch", feature = "streaming", feature = "harness")))]
compile_error!("Benchmarks require all features. Run: cargo bench --features full");

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use movavg::batch::{self, Strategy};
use movavg::dataset;
use movavg::streaming::{DequeMovingAverage, RingMovingAverage};

const SERIES_LEN: usize = 100_000;
const PERIODS: [usize; 3] = [7, 100, 1_000];

// ============================================================================
// Batch Benchmarks
// ============================================================================

fn bench_batch(c: &mut Criterion) {
    let values = dataset::generate(SERIES_LEN);
    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(SERIES_LEN as u64));
    group.sample_size(20);

    for period in PERIODS {
        group.bench_with_input(BenchmarkId::new("naive", period), &period, |b, &p| {
            b.iter(|| batch::naive(black_box(&values), p).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("naive_lanes", period), &period, |b, &p| {
            b.iter(|| batch::naive_lanes(black_box(&values), p).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("online", period), &period, |b, &p| {
            b.iter(|| batch::online(black_box(&values), p).unwrap());
        });
    }

    group.finish();
}

// ============================================================================
// Streaming Benchmarks
// ============================================================================

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");
    group.throughput(Throughput::Elements(1));

    for period in PERIODS {
        group.bench_function(BenchmarkId::new("ring_update", period), |b| {
            let mut ma = RingMovingAverage::new(period);
            let mut i = 0u64;
            b.iter(|| {
                black_box(ma.update(dataset::value_at(i)));
                i = i.wrapping_add(1);
            });
        });

        group.bench_function(BenchmarkId::new("deque_update", period), |b| {
            let mut ma = DequeMovingAverage::new(period);
            let mut i = 0u64;
            b.iter(|| {
                black_box(ma.update(dataset::value_at(i)));
                i = i.wrapping_add(1);
            });
        });
    }

    group.finish();
}

// ============================================================================
// Strategy Benchmarks
// ============================================================================

fn bench_strategies(c: &mut Criterion) {
    let values = dataset::generate(SERIES_LEN);
    let mut group = c.benchmark_group("strategy");
    group.throughput(Throughput::Elements(SERIES_LEN as u64));
    group.sample_size(20);

    for strategy in Strategy::ALL {
        group.bench_function(strategy.name(), |b| {
            b.iter(|| strategy.compute(black_box(&values), 7).unwrap());
        });
    }

    group.finish();
}

// ============================================================================
// Main
// ============================================================================

criterion_group!(benches, bench_batch, bench_streaming, bench_strategies);

criterion_main!(benches);
