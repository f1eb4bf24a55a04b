//! Traits describing the provider boundary

pub mod kem;

pub use kem::{KemProvider, KemSession};
