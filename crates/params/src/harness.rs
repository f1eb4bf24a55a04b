//! Defaults for the fixed harness run

/// Family substring used to filter the enabled mechanism list
pub const DEFAULT_FAMILY: &str = "Kyber";

/// Mechanism exercised by the round-trip and the throughput loop
pub const DEFAULT_MECHANISM: &str = "Kyber512";

/// Number of keypair generations timed by the throughput loop
pub const DEFAULT_ITERATIONS: u64 = 200;
