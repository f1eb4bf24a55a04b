//! The three report lines printed by the binary

use core::fmt;

use crate::bench::BenchReport;
use crate::roundtrip::RoundTripReport;

/// Filtered mechanism list, printed as `Kyber KEMs: ["Kyber512", ...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MechanismList<'a> {
    pub family: &'a str,
    pub names: &'a [String],
}

impl fmt::Display for MechanismList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} KEMs: {:?}", self.family, self.names)
    }
}

impl fmt::Display for RoundTripReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} OK | pk={} bytes, ct={} bytes, ss={} bytes",
            self.mechanism, self.public_key_len, self.ciphertext_len, self.shared_secret_len
        )
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~{:.1} keygens/sec (rough, single-thread)", self.ops_per_sec)
    }
}
