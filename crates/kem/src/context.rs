//! Scoped KEM contexts
//!
//! A [`KemContext`] owns one provider session. The session's `close` runs
//! exactly once: either through [`KemContext::close`] or when the context is
//! dropped, which covers early returns through `?` and unwinding panics.

use kemcheck_api::{Ciphertext, KemParams, KemProvider, KemSession, PublicKey, Result, SharedSecret};
use tracing::debug;

/// A KEM context bound to one mechanism name
pub struct KemContext {
    mechanism: String,
    session: Box<dyn KemSession>,
    closed: bool,
}

impl KemContext {
    /// Open a context on `provider`.
    ///
    /// Nothing is allocated when the provider rejects the name.
    pub fn open<P: KemProvider + ?Sized>(provider: &P, mechanism: &str) -> Result<Self> {
        let session = provider.open(mechanism)?;
        debug!(mechanism, "KEM context opened");
        Ok(Self {
            mechanism: mechanism.to_string(),
            session,
            closed: false,
        })
    }

    /// Mechanism name this context is bound to
    pub fn mechanism(&self) -> &str {
        &self.mechanism
    }

    /// Published parameters of the bound mechanism
    pub fn params(&self) -> &'static KemParams {
        self.session.params()
    }

    /// Generate a keypair; the private key stays in the context
    pub fn generate_keypair(&mut self) -> Result<PublicKey> {
        self.session.generate_keypair()
    }

    /// Encapsulate against `public_key`
    pub fn encapsulate(&mut self, public_key: &PublicKey) -> Result<(Ciphertext, SharedSecret)> {
        self.session.encapsulate(public_key)
    }

    /// Decapsulate with the retained private key
    pub fn decapsulate(&mut self, ciphertext: &Ciphertext) -> Result<SharedSecret> {
        self.session.decapsulate(ciphertext)
    }

    /// Release the context now
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.session.close();
        debug!(mechanism = %self.mechanism, "KEM context closed");
    }
}

impl Drop for KemContext {
    fn drop(&mut self) {
        self.release();
    }
}

impl core::fmt::Debug for KemContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KemContext")
            .field("mechanism", &self.mechanism)
            .field("closed", &self.closed)
            .finish()
    }
}
