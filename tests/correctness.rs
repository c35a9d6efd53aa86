//! Correctness and invariant tests for movavg
//!
//! These tests check that every engine computes the same averages, that the
//! streaming engines report readiness exactly when a window fills, and that
//! their state stays bounded by the window length. They complement the unit
//! tests in each module by focusing on properties that must always hold.
//!
//! Run with: cargo test --test correctness --features full

// Require all engine families and the harness
#[cfg(not(all(
    feature = "std",
    feature = "batch",
    feature = "streaming",
    feature = "harness"
)))]
compile_error!(
    "Correctness tests require all features. Run: cargo test --test correctness --features full"
);

use assert_approx_eq::assert_approx_eq;
use proptest::prelude::*;
use proptest::strategy::Strategy as _;

use movavg::batch::{self, Strategy};
use movavg::dataset;
use movavg::harness::{self, HarnessError, DEFAULT_TOLERANCE};
use movavg::streaming::{DequeMovingAverage, MovingAverageExt, RingMovingAverage};
use movavg::traits::{WindowAccumulator, WindowError};

const SEVEN: [f64; 7] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];

/// Non-empty series with a window length that fits it
fn series_and_period() -> impl proptest::strategy::Strategy<Value = (Vec<f64>, usize)> {
    prop::collection::vec(-1_000.0f64..1_000.0, 1..300).prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 1..=len)
    })
}

/// Integer-valued series, whose window sums are exact in f64
fn integer_series_and_period() -> impl proptest::strategy::Strategy<Value = (Vec<f64>, usize)> {
    prop::collection::vec(-10_000i32..10_000, 1..300).prop_flat_map(|ints| {
        let len = ints.len();
        let values = ints.into_iter().map(f64::from).collect::<Vec<_>>();
        (Just(values), 1..=len)
    })
}

// ============================================================================
// Batch engines
// ============================================================================

mod batch_engines {
    use super::*;

    #[test]
    fn window_of_three() {
        let expected = vec![2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(batch::naive(&SEVEN, 3).unwrap(), expected);
        assert_eq!(batch::online(&SEVEN, 3).unwrap(), expected);
        assert_eq!(batch::naive_lanes(&SEVEN, 3).unwrap(), expected);
    }

    #[test]
    fn window_of_whole_sequence() {
        assert_eq!(batch::naive(&SEVEN, 7).unwrap(), vec![4.0]);
        assert_eq!(batch::online(&SEVEN, 7).unwrap(), vec![4.0]);
    }

    #[test]
    fn window_longer_than_data_produces_nothing() {
        for strategy in Strategy::ALL {
            assert_eq!(
                strategy.compute(&SEVEN, 8),
                Err(WindowError::PeriodExceedsLength { period: 8, len: 7 }),
                "{} must fail before producing output",
                strategy
            );
        }
    }

    #[test]
    fn large_long_window_agrees() {
        let values = dataset::generate(12_000);
        let naive = batch::naive(&values, 5_000).unwrap();
        let online = batch::online(&values, 5_000).unwrap();

        assert_eq!(naive.len(), 12_000 - 5_000 + 1);
        assert_eq!(naive, online);
    }

    proptest! {
        #[test]
        fn online_matches_naive((values, period) in series_and_period()) {
            let naive = batch::naive(&values, period).unwrap();
            let online = batch::online(&values, period).unwrap();

            prop_assert_eq!(naive.len(), values.len() - period + 1);
            prop_assert_eq!(naive.len(), online.len());
            for (n, o) in naive.iter().zip(&online) {
                prop_assert!((n - o).abs() < 1e-6, "{} vs {}", n, o);
            }
        }

        #[test]
        fn lanes_match_naive((values, period) in series_and_period()) {
            let naive = batch::naive(&values, period).unwrap();
            let lanes = batch::naive_lanes(&values, period).unwrap();
            prop_assert!(movavg::math::max_abs_diff(&naive, &lanes) < 1e-6);
            prop_assert!(movavg::math::sum_abs_diff(&naive, &lanes) < 1e-4);
        }

        #[test]
        fn integer_series_agree_exactly((values, period) in integer_series_and_period()) {
            let reference = batch::naive(&values, period).unwrap();
            for strategy in Strategy::ALL {
                prop_assert_eq!(&strategy.compute(&values, period).unwrap(), &reference);
            }
        }
    }
}

// ============================================================================
// Streaming engines
// ============================================================================

mod streaming_engines {
    use super::*;

    #[test]
    fn emits_pending_then_averages() {
        let mut ma = RingMovingAverage::new(2);
        let out: Vec<_> = [10.0, 20.0, 30.0].into_iter().map(|v| ma.update(v)).collect();
        assert_eq!(out, vec![None, Some(15.0), Some(25.0)]);
    }

    #[test]
    fn pending_count_is_period_minus_one() {
        for period in 1..=20 {
            let out: Vec<_> = dataset::series(50).moving_average(period).collect();
            let pending = out.iter().filter(|v| v.is_none()).count();

            assert_eq!(out.len(), 50);
            assert_eq!(pending, period - 1);
            assert!(out[..period - 1].iter().all(Option::is_none));
            assert!(out[period - 1..].iter().all(Option::is_some));
        }
    }

    #[test]
    fn short_stream_never_emits() {
        let mut ma = RingMovingAverage::new(5);
        for v in [1.0, 2.0, 3.0, 4.0] {
            assert_eq!(ma.update(v), None);
            assert!(!ma.is_ready());
        }
        assert_eq!(ma.update(5.0), Some(3.0));
        assert!(ma.is_ready());
    }

    #[test]
    fn zero_average_is_distinct_from_pending() {
        let out = batch::aligned(&[-1.0, 1.0, -1.0, 1.0], 2).unwrap();
        assert_eq!(out, vec![None, Some(0.0), Some(0.0), Some(0.0)]);
    }

    #[test]
    fn clear_restores_initial_behaviour() {
        let mut ring = RingMovingAverage::new(3);
        let mut deque = DequeMovingAverage::new(3);
        for v in 0..10 {
            ring.update(v as f64);
            deque.update(v as f64);
        }

        ring.clear();
        deque.clear();

        assert!(ring.is_empty());
        assert!(deque.is_empty());
        assert_eq!(ring.average(), None);
        assert_eq!(ring.update(3.0), None);
        assert_eq!(ring.update(6.0), None);
        assert_eq!(ring.update(9.0), Some(6.0));
    }

    #[test]
    fn integer_samples_average_exactly() {
        let averages: Vec<f64> = (1i64..=7).moving_averages(3).collect();
        assert_eq!(averages, vec![2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn generated_series_last_average() {
        // last window of 7 over 1..=10_000 holds one full weekly cycle
        let values = dataset::generate(10_000);
        let last = values.iter().copied().moving_averages(7).last().unwrap();
        let expected = values[values.len() - 7..].iter().sum::<f64>() / 7.0;
        assert_approx_eq!(last, expected, 1e-9);
    }

    proptest! {
        #[test]
        fn ring_matches_batch((values, period) in series_and_period()) {
            let expected = batch::naive(&values, period).unwrap();
            let streamed: Vec<f64> = values.iter().copied().moving_averages(period).collect();

            prop_assert_eq!(streamed.len(), values.len() - period + 1);
            for (b, s) in expected.iter().zip(&streamed) {
                prop_assert!((b - s).abs() < 1e-6, "{} vs {}", b, s);
            }
        }

        #[test]
        fn ring_and_deque_agree((values, period) in series_and_period()) {
            let mut ring = RingMovingAverage::new(period);
            let mut deque = DequeMovingAverage::new(period);
            for &v in &values {
                prop_assert_eq!(ring.update(v), deque.update(v));
            }
            prop_assert_eq!(WindowAccumulator::count(&ring), values.len() as u64);
        }
    }
}

// ============================================================================
// Memory bound
// ============================================================================

mod memory {
    use super::*;

    fn state_after(len: usize, period: usize) -> usize {
        let mut ma = RingMovingAverage::new(period);
        for v in dataset::series(len) {
            ma.update(v);
        }
        assert_eq!(ma.count(), len as u64);
        ma.size_bytes()
    }

    #[test]
    fn ring_state_independent_of_stream_length() {
        for period in [1, 7, 5_000] {
            assert_eq!(state_after(10, period), state_after(10_000_000, period));
        }
    }

    #[test]
    fn ring_state_scales_with_period() {
        let small = state_after(100, 7);
        let large = state_after(100, 5_000);
        assert_eq!(large - small, (5_000 - 7) * std::mem::size_of::<f64>());
    }

    #[test]
    fn deque_state_bounded_by_period() {
        let mut ma = DequeMovingAverage::new(64);
        let mut sizes = Vec::new();
        for (i, v) in dataset::series(100_000).enumerate() {
            ma.update(v);
            if i % 10_000 == 0 {
                sizes.push(ma.size_bytes());
            }
        }
        assert!(sizes.windows(2).all(|w| w[0] == w[1]));
    }
}

// ============================================================================
// Harness
// ============================================================================

mod comparison {
    use super::*;

    #[test]
    fn all_strategies_agree_on_generated_series() {
        let values = dataset::generate(5_000);
        for period in [1, 7, 500, 5_000] {
            let comparison =
                harness::run_comparison(&values, period, &Strategy::ALL, DEFAULT_TOLERANCE)
                    .unwrap();
            assert_eq!(comparison.reference.len(), 5_000 - period + 1);
            for agreement in &comparison.agreements {
                assert_eq!(agreement.max_abs_diff, 0.0, "{}", agreement.label);
            }
        }
    }

    #[test]
    fn csv_stream_matches_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("time_series.csv");
        let values = dataset::generate(2_000);
        dataset::write_csv(&path, &values).unwrap();

        let loaded = dataset::read_csv(&path).unwrap();
        assert_eq!(loaded, values);

        let reference = batch::online(&loaded, 7).unwrap();
        let (streamed, measurement) = harness::measure_csv_stream(&path, 7).unwrap();

        harness::verify_agreement("csv", &reference, &streamed, DEFAULT_TOLERANCE).unwrap();
        assert_eq!(measurement.inputs, 2_000);
        assert_eq!(measurement.last, reference.last().copied());
    }

    #[test]
    fn malformed_dataset_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.csv");
        std::fs::write(&path, "value\n1\n2\nthree\n4\n").unwrap();

        let err = harness::measure_csv_stream(&path, 2).unwrap_err();
        assert!(matches!(
            err,
            HarnessError::Dataset(dataset::DatasetError::Record { line: Some(4), .. })
        ));
    }

    #[test]
    fn mismatch_is_reported() {
        let reference = batch::naive(&SEVEN, 3).unwrap();
        let mut broken = reference.clone();
        broken[4] += 1e-3;

        let err =
            harness::verify_agreement("broken", &reference, &broken, DEFAULT_TOLERANCE)
                .unwrap_err();
        assert!(matches!(err, HarnessError::ValueMismatch { index: 4, .. }));
        assert!(err.to_string().contains("window 4"));
    }
}
