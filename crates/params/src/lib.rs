//! Constant values for the kemcheck harness
//!
//! This crate holds the published sizes of every KEM mechanism the harness
//! knows about, together with the defaults of the fixed harness run. It has
//! no behaviour of its own.

pub mod harness;
pub mod pqc;

pub use harness::{DEFAULT_FAMILY, DEFAULT_ITERATIONS, DEFAULT_MECHANISM};
pub use pqc::{KemParams, ALL_MECHANISMS};
