//! Constants for the Kyber key encapsulation mechanism (round 3)

use super::KemParams;

/// Family name shared by all Kyber variants
pub const KYBER_FAMILY: &str = "Kyber";

/// Kyber shared secret size, identical for every security level
pub const KYBER_SS_BYTES: usize = 32;

/// Kyber-512 parameters
pub const KYBER512: KemParams = KemParams {
    name: "Kyber512",
    family: KYBER_FAMILY,
    nist_level: 1,
    public_key_size: 800,
    secret_key_size: 1632,
    ciphertext_size: 768,
    shared_secret_size: KYBER_SS_BYTES,
};

/// Kyber-768 parameters
pub const KYBER768: KemParams = KemParams {
    name: "Kyber768",
    family: KYBER_FAMILY,
    nist_level: 3,
    public_key_size: 1184,
    secret_key_size: 2400,
    ciphertext_size: 1088,
    shared_secret_size: KYBER_SS_BYTES,
};

/// Kyber-1024 parameters
pub const KYBER1024: KemParams = KemParams {
    name: "Kyber1024",
    family: KYBER_FAMILY,
    nist_level: 5,
    public_key_size: 1568,
    secret_key_size: 3168,
    ciphertext_size: 1568,
    shared_secret_size: KYBER_SS_BYTES,
};
