//! The fixed harness sequence

use std::io::Write;

use kemcheck_api::{Error, KemProvider, Result};
use tracing::debug;

use crate::bench::{bench_with, Clock};
use crate::config::HarnessConfig;
use crate::enumerate::{filter_family, list_enabled_kem_names_with};
use crate::report::MechanismList;
use crate::roundtrip::roundtrip_with;

/// Enumerate, round-trip and bench, writing one line per step to `out`.
///
/// Each line is flushed before the next step starts, so a failure leaves
/// the lines of the completed steps in `out`.
pub fn run<P, C, W>(config: &HarnessConfig, provider: &P, clock: &C, out: &mut W) -> Result<()>
where
    P: KemProvider + ?Sized,
    C: Clock + ?Sized,
    W: Write + ?Sized,
{
    config.validate()?;
    debug!(?config, "starting harness run");

    let enabled = list_enabled_kem_names_with(provider)?;
    let family = filter_family(&enabled, &config.family);
    writeln!(out, "{}", MechanismList { family: &config.family, names: &family })?;
    out.flush()?;

    let roundtrip = roundtrip_with(provider, &config.mechanism)?;
    writeln!(out, "{}", roundtrip)?;
    out.flush()?;

    let throughput = bench_with(provider, clock, &config.mechanism, config.iterations)?;
    writeln!(out, "{}", throughput)?;
    out.flush()?;

    Ok(())
}

/// Process exit status for a failed run
///
/// A shared-secret mismatch gets its own status because it indicts the
/// provider rather than the input.
pub fn exit_code(err: &Error) -> u8 {
    if err.is_fatal() {
        2
    } else {
        1
    }
}
