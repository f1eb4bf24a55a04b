//! The kemcheck harness
//!
//! Three steps, run in order by [`run`]:
//!
//! 1. [`enumerate`]: list the enabled mechanisms and filter them by family.
//! 2. [`roundtrip`]: one client/server encapsulate-decapsulate exchange,
//!    checked for shared-secret agreement.
//! 3. [`bench`]: a single wall-clock sample of keypair generations per
//!    second.
//!
//! Every step takes its provider explicitly (`*_with` variants) so tests
//! can substitute a stub; the plain functions use
//! [`kemcheck_kem::SystemProvider`].

pub mod bench;
pub mod config;
pub mod enumerate;
pub mod report;
pub mod roundtrip;
pub mod run;

pub use bench::{bench, bench_with, BenchReport, Clock, MonotonicClock};
pub use config::HarnessConfig;
pub use enumerate::{filter_family, list_enabled_kem_names, list_enabled_kem_names_with};
pub use report::MechanismList;
pub use roundtrip::{roundtrip, roundtrip_with, verify_family, RoundTripReport};
pub use run::{exit_code, run};
