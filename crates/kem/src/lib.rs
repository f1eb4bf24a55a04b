//! Provider boundary for the kemcheck harness
//!
//! This crate binds the `kemcheck_api` traits to real KEM implementations.
//! Which mechanisms are "enabled" is decided at compile time by cargo
//! features:
//!
//! - `kyber`: `Kyber512`, `Kyber768`, `Kyber1024` (PQClean, via `pqcrypto-kyber`)
//! - `ml-kem`: `ML-KEM-512`, `ML-KEM-768`, `ML-KEM-1024` (RustCrypto `ml-kem`)
//!
//! Contexts are opened through [`open_kem_context`] or
//! [`KemContext::open`] and released exactly once when they go out of
//! scope.

pub mod context;
pub mod provider;
pub mod rng;

#[cfg(feature = "kyber")]
mod kyber;
#[cfg(feature = "ml-kem")]
mod mlkem;

// Re-exports
pub use context::KemContext;
pub use provider::{list_enabled_kem_mechanisms, open_kem_context, SystemProvider};
pub use rng::SessionRng;
