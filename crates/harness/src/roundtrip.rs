//! Round-trip verification
//!
//! Two independent contexts on the same mechanism play server and client.
//! The server generates a keypair, the client encapsulates against the
//! server's public key, and the server decapsulates. Both parties must end
//! up with the same shared secret; anything else means the provider cannot
//! be trusted and is reported as `CorrectnessViolation`.

use kemcheck_api::{Error, KemProvider, Result};
use kemcheck_kem::{KemContext, SystemProvider};
use tracing::{error, info};

use crate::enumerate::{filter_family, list_enabled_kem_names_with};

/// Byte lengths observed during one successful round-trip
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoundTripReport {
    pub mechanism: String,
    pub public_key_len: usize,
    pub ciphertext_len: usize,
    pub shared_secret_len: usize,
}

/// Run one round-trip on the default provider
pub fn roundtrip(mechanism: &str) -> Result<RoundTripReport> {
    roundtrip_with(&SystemProvider::new(), mechanism)
}

/// Run one round-trip on `provider`.
///
/// Both contexts are closed on every exit path, including a mismatch.
pub fn roundtrip_with<P: KemProvider + ?Sized>(provider: &P, mechanism: &str) -> Result<RoundTripReport> {
    let mut client = KemContext::open(provider, mechanism)?;
    let mut server = KemContext::open(provider, mechanism)?;

    let public_key = server.generate_keypair()?;
    let (ciphertext, client_secret) = client.encapsulate(&public_key)?;
    let server_secret = server.decapsulate(&ciphertext)?;

    // SharedSecret equality is constant-time
    if client_secret != server_secret {
        error!(mechanism, "shared secrets differ after decapsulation");
        return Err(Error::correctness(mechanism));
    }

    let report = RoundTripReport {
        mechanism: mechanism.to_string(),
        public_key_len: public_key.len(),
        ciphertext_len: ciphertext.len(),
        shared_secret_len: client_secret.len(),
    };

    server.close();
    client.close();

    info!(
        mechanism,
        pk = report.public_key_len,
        ct = report.ciphertext_len,
        ss = report.shared_secret_len,
        "round-trip ok"
    );
    Ok(report)
}

/// Round-trip every enabled mechanism of `family`, stopping at the first failure
pub fn verify_family<P: KemProvider + ?Sized>(
    provider: &P,
    family: &str,
) -> Result<Vec<RoundTripReport>> {
    let names = filter_family(&list_enabled_kem_names_with(provider)?, family);
    names
        .iter()
        .map(|name| roundtrip_with(provider, name))
        .collect()
}
