//! Constants for post-quantum key encapsulation mechanisms

pub mod kyber;
pub mod ml_kem;

pub use kyber::{KYBER1024, KYBER512, KYBER768};
pub use ml_kem::{ML_KEM_1024, ML_KEM_512, ML_KEM_768};

/// Published parameters of one KEM mechanism
///
/// All sizes are in bytes. They are fixed by the mechanism definition and
/// never computed by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KemParams {
    /// Mechanism name as reported by the provider
    pub name: &'static str,

    /// Family the mechanism belongs to
    pub family: &'static str,

    /// NIST PQC security category
    pub nist_level: u8,

    /// Size of public key in bytes
    pub public_key_size: usize,

    /// Size of secret key in bytes
    pub secret_key_size: usize,

    /// Size of ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of shared secret in bytes
    pub shared_secret_size: usize,
}

/// Every mechanism the harness knows, in provider order
pub const ALL_MECHANISMS: [&KemParams; 6] = [
    &KYBER512,
    &KYBER768,
    &KYBER1024,
    &ML_KEM_512,
    &ML_KEM_768,
    &ML_KEM_1024,
];

impl KemParams {
    /// Look up a mechanism by its exact name
    pub fn by_name(name: &str) -> Option<&'static KemParams> {
        ALL_MECHANISMS.iter().copied().find(|p| p.name == name)
    }
}
