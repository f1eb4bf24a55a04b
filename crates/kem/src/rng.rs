//! Randomness source for RNG-parameterised backends

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaChaRng;

/// RNG owned by one session.
///
/// `Os` draws from the operating system; `Seeded` replays a ChaCha20
/// stream so that keys are reproducible across runs.
pub enum SessionRng {
    Os(OsRng),
    Seeded(ChaChaRng),
}

impl SessionRng {
    /// Operating-system randomness
    pub fn os() -> Self {
        SessionRng::Os(OsRng)
    }

    /// Deterministic ChaCha20 stream derived from `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::seeded_stream(seed, 0)
    }

    /// Stream `stream` of the ChaCha20 key derived from `seed`
    pub fn seeded_stream(seed: u64, stream: u64) -> Self {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        rng.set_stream(stream);
        SessionRng::Seeded(rng)
    }
}

impl RngCore for SessionRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            SessionRng::Os(rng) => rng.next_u32(),
            SessionRng::Seeded(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            SessionRng::Os(rng) => rng.next_u64(),
            SessionRng::Seeded(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            SessionRng::Os(rng) => rng.fill_bytes(dest),
            SessionRng::Seeded(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            SessionRng::Os(rng) => rng.try_fill_bytes(dest),
            SessionRng::Seeded(rng) => rng.try_fill_bytes(dest),
        }
    }
}

impl CryptoRng for SessionRng {}
