//! Stub provider with a counted context lifecycle
//!
//! The "cryptography" here is deliberately trivial: the shared secret is
//! carried in the clear at the front of the ciphertext. Only lengths and
//! agreement matter to the harness.

use std::cell::Cell;
use std::rc::Rc;

use kemcheck_api::{
    Ciphertext, Error, KemParams, KemProvider, KemSession, PublicKey, Result, SharedSecret,
};
use kemcheck_params::pqc::KYBER512;

/// How stub sessions behave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Behaviour {
    /// Both parties agree
    #[default]
    Honest,
    /// Decapsulation derives a different secret
    MismatchedSecrets,
    /// Keypair generation fails inside the provider
    FailingKeygen,
}

#[derive(Debug, Default)]
struct Counters {
    opened: Cell<usize>,
    closed: Cell<usize>,
    keygens: Cell<u64>,
}

/// Provider exposing a single mechanism, `Kyber512`, with Kyber512 sizes
#[derive(Debug, Clone, Default)]
pub struct StubProvider {
    behaviour: Behaviour,
    counters: Rc<Counters>,
}

impl StubProvider {
    pub fn new(behaviour: Behaviour) -> Self {
        Self { behaviour, counters: Rc::default() }
    }

    pub fn honest() -> Self {
        Self::new(Behaviour::Honest)
    }

    /// Sessions opened so far
    pub fn opened(&self) -> usize {
        self.counters.opened.get()
    }

    /// Sessions closed so far
    pub fn closed(&self) -> usize {
        self.counters.closed.get()
    }

    /// Sessions opened and not yet closed
    pub fn live(&self) -> usize {
        self.opened() - self.closed()
    }

    /// Keypairs generated across all sessions
    pub fn keygens(&self) -> u64 {
        self.counters.keygens.get()
    }
}

impl KemProvider for StubProvider {
    fn enabled_mechanisms(&self) -> Result<Vec<String>> {
        Ok(vec![KYBER512.name.to_string()])
    }

    fn open(&self, mechanism: &str) -> Result<Box<dyn KemSession>> {
        if mechanism != KYBER512.name {
            return Err(Error::unsupported(mechanism));
        }
        self.counters.opened.set(self.counters.opened.get() + 1);
        Ok(Box::new(StubSession {
            behaviour: self.behaviour,
            counters: self.counters.clone(),
            secret_key: None,
        }))
    }
}

struct StubSession {
    behaviour: Behaviour,
    counters: Rc<Counters>,
    secret_key: Option<u8>,
}

impl KemSession for StubSession {
    fn params(&self) -> &'static KemParams {
        &KYBER512
    }

    fn generate_keypair(&mut self) -> Result<PublicKey> {
        if self.behaviour == Behaviour::FailingKeygen {
            return Err(Error::provider(KYBER512.name, "keypair", "stub allocation failure"));
        }
        let n = self.counters.keygens.get();
        self.counters.keygens.set(n + 1);

        let tag = n as u8;
        self.secret_key = Some(tag);
        Ok(PublicKey::from(vec![tag; KYBER512.public_key_size]))
    }

    fn encapsulate(&mut self, public_key: &PublicKey) -> Result<(Ciphertext, SharedSecret)> {
        let tag = public_key.as_ref()[0];
        let mut ct = vec![tag; KYBER512.ciphertext_size];
        ct[..KYBER512.shared_secret_size].fill(tag ^ 0x5A);
        let ss = SharedSecret::new(&ct[..KYBER512.shared_secret_size]);
        Ok((Ciphertext::from(ct), ss))
    }

    fn decapsulate(&mut self, ciphertext: &Ciphertext) -> Result<SharedSecret> {
        if self.secret_key.is_none() {
            return Err(Error::provider(KYBER512.name, "decapsulate", "no keypair"));
        }
        let mut ss = ciphertext.as_ref()[..KYBER512.shared_secret_size].to_vec();
        if self.behaviour == Behaviour::MismatchedSecrets {
            ss[0] ^= 1;
        }
        Ok(SharedSecret::from(ss))
    }

    fn close(&mut self) {
        self.secret_key = None;
        self.counters.closed.set(self.counters.closed.get() + 1);
    }
}
