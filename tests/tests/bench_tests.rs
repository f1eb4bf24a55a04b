//! Integration tests for the throughput benchmark

use std::time::Duration;

use kemcheck::prelude::*;
use kemcheck_tests::{FrozenClock, StepClock, StubProvider};

#[test]
fn test_bench_kyber512_is_positive_and_finite() {
    let ops = bench("Kyber512", 200).unwrap();
    assert!(ops > 0.0);
    assert!(ops.is_finite());
}

#[test]
fn test_bench_zero_iterations_rejected_before_open() {
    let provider = StubProvider::honest();
    let clock = StepClock::new(Duration::from_secs(1));

    let err = bench_with(&provider, &clock, "Kyber512", 0).unwrap_err();

    assert!(matches!(err, Error::InvalidParameter { context: "bench", .. }));
    assert_eq!(provider.opened(), 0);
    assert_eq!(clock.readings(), 0);
}

#[test]
fn test_bench_arithmetic_with_stub() {
    let provider = StubProvider::honest();
    let clock = StepClock::new(Duration::from_millis(500));

    let report = bench_with(&provider, &clock, "Kyber512", 200).unwrap();

    assert_eq!(report.iterations, 200);
    assert_eq!(report.elapsed, Duration::from_millis(500));
    assert_eq!(report.ops_per_sec, 400.0);
    assert_eq!(provider.keygens(), 200);
    assert_eq!(clock.readings(), 2);
    assert_eq!(provider.opened(), 1);
    assert_eq!(provider.live(), 0);
}

#[test]
fn test_bench_zero_elapsed_rejected_and_context_closed() {
    let provider = StubProvider::honest();

    let err = bench_with(&provider, &FrozenClock, "Kyber512", 5).unwrap_err();

    assert!(matches!(err, Error::InvalidParameter { context: "bench", .. }));
    assert_eq!(provider.keygens(), 5);
    assert_eq!(provider.live(), 0);
}

#[test]
fn test_bench_unsupported_mechanism() {
    let provider = StubProvider::honest();
    let err = bench_with(&provider, &MonotonicClock::new(), "NotAnAlgorithm", 10).unwrap_err();
    assert_eq!(err, Error::unsupported("NotAnAlgorithm"));
}

#[test]
fn test_bench_report_line() {
    let provider = StubProvider::honest();
    let clock = StepClock::new(Duration::from_millis(40));

    let report = bench_with(&provider, &clock, "Kyber512", 200).unwrap();

    assert_eq!(report.to_string(), "~5000.0 keygens/sec (rough, single-thread)");
}
