//! # kemcheck
//!
//! A smoke test and rough microbenchmark for lattice-based key encapsulation
//! mechanisms, built on existing provider crates.
//!
//! ## Features
//!
//! - `kyber` (default): Kyber round 3 through PQClean
//! - `ml-kem` (default): ML-KEM (FIPS 203) through RustCrypto
//! - `serde`: `Serialize` for parameters and reports
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`kemcheck-api`]: Provider traits, error taxonomy, byte types
//! - [`kemcheck-params`]: Published mechanism sizes and harness defaults
//! - [`kemcheck-kem`]: Provider backends and scoped contexts
//! - [`kemcheck-harness`]: Enumeration, round-trip, throughput, report

pub use kemcheck_api as api;
pub use kemcheck_harness as harness;
pub use kemcheck_kem as kem;
pub use kemcheck_params as params;

/// Common imports for kemcheck users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export the provider boundary
    pub use crate::api::{Ciphertext, KemParams, KemProvider, KemSession, PublicKey, SharedSecret};
    pub use crate::kem::{list_enabled_kem_mechanisms, open_kem_context, KemContext, SystemProvider};

    // Re-export the harness operations
    pub use crate::harness::{
        bench, bench_with, filter_family, list_enabled_kem_names, roundtrip, roundtrip_with,
        BenchReport, Clock, HarnessConfig, MonotonicClock, RoundTripReport,
    };
}
