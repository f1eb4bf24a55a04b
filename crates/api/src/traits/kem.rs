// File: crates/api/src/traits/kem.rs

//! Trait definitions for the cryptographic provider boundary
//!
//! A provider answers two questions: which KEM mechanisms are enabled, and
//! how to open a session bound to one of them. A session is the state
//! behind one KEM context; it retains the private key of the last generated
//! keypair so decapsulation needs only the ciphertext.

use crate::types::{Ciphertext, PublicKey, SharedSecret};
use crate::Result;
use kemcheck_params::KemParams;

/// One provider-side KEM context bound to a single mechanism.
///
/// Sessions are used by one thread of control at a time; every call blocks
/// until the provider returns.
pub trait KemSession {
    /// Published parameters of the bound mechanism.
    fn params(&self) -> &'static KemParams;

    /// Generate a keypair, returning the public key and retaining the
    /// private key inside the session. A later call replaces the retained
    /// key.
    fn generate_keypair(&mut self) -> Result<PublicKey>;

    /// Encapsulate a fresh shared secret against `public_key`.
    fn encapsulate(&mut self, public_key: &PublicKey) -> Result<(Ciphertext, SharedSecret)>;

    /// Decapsulate `ciphertext` with the retained private key.
    ///
    /// Fails with `ProviderError` if no keypair has been generated.
    fn decapsulate(&mut self, ciphertext: &Ciphertext) -> Result<SharedSecret>;

    /// Release provider resources. Called exactly once per session.
    fn close(&mut self) {}
}

/// Capability query and session factory for a cryptographic provider.
pub trait KemProvider {
    /// Names of the enabled mechanisms, in provider-defined order.
    fn enabled_mechanisms(&self) -> Result<Vec<String>>;

    /// Open a session bound to `mechanism`.
    ///
    /// Fails with `UnsupportedMechanism` when the name is unknown or
    /// disabled.
    fn open(&self, mechanism: &str) -> Result<Box<dyn KemSession>>;
}

impl<P: KemProvider + ?Sized> KemProvider for &P {
    fn enabled_mechanisms(&self) -> Result<Vec<String>> {
        (**self).enabled_mechanisms()
    }

    fn open(&self, mechanism: &str) -> Result<Box<dyn KemSession>> {
        (**self).open(mechanism)
    }
}
