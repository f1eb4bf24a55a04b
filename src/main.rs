//! `kemcheck`: enumerate the enabled Kyber mechanisms, round-trip Kyber512
//! once and print a rough keygen throughput.
//!
//! Takes no arguments. Diagnostics go to stderr; stdout carries the three
//! report lines only.

use std::io;
use std::process::ExitCode;

use kemcheck::harness::{exit_code, run, HarnessConfig, MonotonicClock};
use kemcheck::kem::SystemProvider;
use tracing::error;

fn main() -> ExitCode {
    let config = HarnessConfig::default();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(&config, &SystemProvider::new(), &MonotonicClock::new(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "kemcheck failed");
            ExitCode::from(exit_code(&err))
        }
    }
}
