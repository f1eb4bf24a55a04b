//! Mechanism registry and the default provider

use core::cell::Cell;

use kemcheck_api::{Error, KemParams, KemProvider, KemSession, Result};
use tracing::{debug, warn};

use crate::context::KemContext;
use crate::rng::SessionRng;

/// One compiled-in mechanism
struct Backend {
    params: &'static KemParams,
    open: fn(SessionRng) -> Box<dyn KemSession>,
}

/// Every backend enabled by cargo features, in provider order
#[allow(unused_mut)]
fn backends() -> Vec<Backend> {
    let mut backends = Vec::new();

    #[cfg(feature = "kyber")]
    {
        use crate::kyber::{Kyber1024Session, Kyber512Session, Kyber768Session};
        use kemcheck_params::pqc::{KYBER1024, KYBER512, KYBER768};

        backends.push(Backend { params: &KYBER512, open: |_| Kyber512Session::open() });
        backends.push(Backend { params: &KYBER768, open: |_| Kyber768Session::open() });
        backends.push(Backend { params: &KYBER1024, open: |_| Kyber1024Session::open() });
    }

    #[cfg(feature = "ml-kem")]
    {
        use crate::mlkem::{open_1024, open_512, open_768};
        use kemcheck_params::pqc::{ML_KEM_1024, ML_KEM_512, ML_KEM_768};

        backends.push(Backend { params: &ML_KEM_512, open: open_512 });
        backends.push(Backend { params: &ML_KEM_768, open: open_768 });
        backends.push(Backend { params: &ML_KEM_1024, open: open_1024 });
    }

    backends
}

fn find_backend(mechanism: &str) -> Option<Backend> {
    backends().into_iter().find(|b| b.params.name == mechanism)
}

/// Provider backed by the compiled-in KEM implementations.
///
/// By default sessions draw from operating-system randomness. A seeded
/// provider keys ChaCha20 with the seed and gives the n-th session it opens
/// stream n, so a fixed sequence of opens is reproducible and no two
/// (seed, session) pairs share a stream. Kyber sessions always use system randomness.
#[derive(Debug, Default)]
pub struct SystemProvider {
    seed: Option<u64>,
    opened: Cell<u64>,
}

impl SystemProvider {
    /// Provider using operating-system randomness
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider whose RNG-parameterised sessions are reproducible
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            opened: Cell::new(0),
        }
    }

    fn next_rng(&self) -> SessionRng {
        let index = self.opened.get();
        self.opened.set(index.wrapping_add(1));
        match self.seed {
            Some(seed) => SessionRng::seeded_stream(seed, index),
            None => SessionRng::os(),
        }
    }
}

impl KemProvider for SystemProvider {
    fn enabled_mechanisms(&self) -> Result<Vec<String>> {
        Ok(backends()
            .into_iter()
            .map(|b| b.params.name.to_string())
            .collect())
    }

    fn open(&self, mechanism: &str) -> Result<Box<dyn KemSession>> {
        let Some(backend) = find_backend(mechanism) else {
            warn!(mechanism, "requested KEM mechanism is not enabled");
            return Err(Error::unsupported(mechanism));
        };

        debug!(mechanism, nist_level = backend.params.nist_level, "opening KEM session");
        Ok((backend.open)(self.next_rng()))
    }
}

/// Names of the KEM mechanisms enabled in this build
pub fn list_enabled_kem_mechanisms() -> Result<Vec<String>> {
    SystemProvider::new().enabled_mechanisms()
}

/// Open a scoped context on the default provider
pub fn open_kem_context(mechanism: &str) -> Result<KemContext> {
    KemContext::open(&SystemProvider::new(), mechanism)
}
