//! Keypair-generation throughput
//!
//! One context, `iterations` back-to-back keypair generations, one pair of
//! timestamps. This is a single noisy sample; the criterion benches in
//! `kemcheck-kem` are the calibrated measurement.

use std::time::{Duration, Instant};

use kemcheck_api::error::validation;
use kemcheck_api::{KemProvider, Result};
use kemcheck_kem::{KemContext, SystemProvider};
use tracing::{info, warn};

/// Monotonic time source
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin
    fn now(&self) -> Duration;
}

/// Clock backed by [`std::time::Instant`]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Outcome of one throughput sample
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BenchReport {
    pub mechanism: String,
    pub iterations: u64,
    pub elapsed: Duration,
    pub ops_per_sec: f64,
}

/// Keygens per second for `mechanism` on the default provider and clock
pub fn bench(mechanism: &str, iterations: u64) -> Result<f64> {
    let report = bench_with(&SystemProvider::new(), &MonotonicClock::new(), mechanism, iterations)?;
    Ok(report.ops_per_sec)
}

/// Time `iterations` keypair generations on `provider`.
///
/// Zero iterations are rejected before a context is opened. A sample whose
/// elapsed time is zero on `clock` is rejected instead of dividing by zero,
/// so a returned rate is always positive and finite.
pub fn bench_with<P, C>(
    provider: &P,
    clock: &C,
    mechanism: &str,
    iterations: u64,
) -> Result<BenchReport>
where
    P: KemProvider + ?Sized,
    C: Clock + ?Sized,
{
    if iterations == 0 {
        warn!(mechanism, "refusing to benchmark zero iterations");
    }
    validation::parameter(iterations > 0, "bench", "iterations must be positive")?;

    let mut ctx = KemContext::open(provider, mechanism)?;

    let start = clock.now();
    for _ in 0..iterations {
        ctx.generate_keypair()?;
    }
    let end = clock.now();

    ctx.close();

    let elapsed = end.saturating_sub(start);
    let seconds = elapsed.as_secs_f64();
    validation::parameter(
        seconds > 0.0,
        "bench",
        "elapsed time is below the clock resolution; increase iterations",
    )?;

    let ops_per_sec = iterations as f64 / seconds;
    info!(mechanism, iterations, ?elapsed, ops_per_sec, "keygen throughput sampled");

    Ok(BenchReport {
        mechanism: mechanism.to_string(),
        iterations,
        elapsed,
        ops_per_sec,
    })
}
