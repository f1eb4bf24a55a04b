//! Test doubles for the kemcheck harness
//!
//! The real providers make the round-trip and throughput checks
//! non-deterministic. These doubles give tests full control: a provider
//! whose secrets can be made to disagree and whose context lifecycle is
//! counted, and a clock that advances by a fixed step.

pub mod clock;
pub mod stub;

pub use clock::{FrozenClock, StepClock};
pub use stub::{Behaviour, StubProvider};
