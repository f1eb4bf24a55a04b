//! Constants for ML-KEM (FIPS 203)
//!
//! The byte sizes match Kyber round 3; the mechanisms differ in how the
//! shared secret is derived, so the two are reported as separate families.

use super::KemParams;

/// Family name shared by all ML-KEM parameter sets
pub const ML_KEM_FAMILY: &str = "ML-KEM";

/// ML-KEM shared secret size
pub const ML_KEM_SS_BYTES: usize = 32;

/// ML-KEM-512 parameters
pub const ML_KEM_512: KemParams = KemParams {
    name: "ML-KEM-512",
    family: ML_KEM_FAMILY,
    nist_level: 1,
    public_key_size: 800,
    secret_key_size: 1632,
    ciphertext_size: 768,
    shared_secret_size: ML_KEM_SS_BYTES,
};

/// ML-KEM-768 parameters
pub const ML_KEM_768: KemParams = KemParams {
    name: "ML-KEM-768",
    family: ML_KEM_FAMILY,
    nist_level: 3,
    public_key_size: 1184,
    secret_key_size: 2400,
    ciphertext_size: 1088,
    shared_secret_size: ML_KEM_SS_BYTES,
};

/// ML-KEM-1024 parameters
pub const ML_KEM_1024: KemParams = KemParams {
    name: "ML-KEM-1024",
    family: ML_KEM_FAMILY,
    nist_level: 5,
    public_key_size: 1568,
    secret_key_size: 3168,
    ciphertext_size: 1568,
    shared_secret_size: ML_KEM_SS_BYTES,
};
