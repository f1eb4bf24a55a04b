//! Public API traits and types for kemcheck
//!
//! This crate describes the boundary between the harness and the
//! cryptographic provider: the error taxonomy, the byte sequences exchanged
//! across the boundary, and the `KemProvider` / `KemSession` traits a
//! provider implements.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::{KemProvider, KemSession};

pub use kemcheck_params::KemParams;
