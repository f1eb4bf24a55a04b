// kem/src/mlkem/mod.rs

//! ML-KEM (FIPS 203) backend.
//!
//! Wraps the RustCrypto `ml-kem` crate. Unlike PQClean it takes its
//! randomness from the caller, so each session owns a [`SessionRng`].

use kemcheck_api::error::validation;
use kemcheck_api::{Ciphertext, Error, KemParams, KemSession, PublicKey, Result, SharedSecret};
use kemcheck_params::pqc::{ML_KEM_1024, ML_KEM_512, ML_KEM_768};
use ml_kem::kem::{Decapsulate, Encapsulate};
use ml_kem::{Encoded, EncodedSizeUser, KemCore, MlKem1024, MlKem512, MlKem768};

use crate::rng::SessionRng;

/// Session generic over one ML-KEM parameter set
pub(crate) struct MlKemSession<K: KemCore> {
    params: &'static KemParams,
    rng: SessionRng,
    decapsulation_key: Option<K::DecapsulationKey>,
}

impl<K: KemCore> MlKemSession<K> {
    fn new(params: &'static KemParams, rng: SessionRng) -> Self {
        Self {
            params,
            rng,
            decapsulation_key: None,
        }
    }
}

pub(crate) fn open_512(rng: SessionRng) -> Box<dyn KemSession> {
    Box::new(MlKemSession::<MlKem512>::new(&ML_KEM_512, rng))
}

pub(crate) fn open_768(rng: SessionRng) -> Box<dyn KemSession> {
    Box::new(MlKemSession::<MlKem768>::new(&ML_KEM_768, rng))
}

pub(crate) fn open_1024(rng: SessionRng) -> Box<dyn KemSession> {
    Box::new(MlKemSession::<MlKem1024>::new(&ML_KEM_1024, rng))
}

impl<K: KemCore> KemSession for MlKemSession<K> {
    fn params(&self) -> &'static KemParams {
        self.params
    }

    fn generate_keypair(&mut self) -> Result<PublicKey> {
        let (dk, ek) = K::generate(&mut self.rng);
        self.decapsulation_key = Some(dk);
        Ok(PublicKey::new(&ek.as_bytes()))
    }

    fn encapsulate(&mut self, public_key: &PublicKey) -> Result<(Ciphertext, SharedSecret)> {
        validation::length("encapsulate", public_key.len(), self.params.public_key_size)?;
        let encoded = <Encoded<K::EncapsulationKey>>::try_from(public_key.as_ref())
            .map_err(|_| Error::provider(self.params.name, "encapsulate", "malformed public key"))?;
        let ek = K::EncapsulationKey::from_bytes(&encoded);

        let (ct, ss) = ek
            .encapsulate(&mut self.rng)
            .map_err(|_| Error::provider(self.params.name, "encapsulate", "encapsulation failed"))?;
        Ok((Ciphertext::new(&ct), SharedSecret::new(&ss)))
    }

    fn decapsulate(&mut self, ciphertext: &Ciphertext) -> Result<SharedSecret> {
        let dk = self.decapsulation_key.as_ref().ok_or_else(|| {
            Error::provider(self.params.name, "decapsulate", "no keypair generated in this context")
        })?;
        validation::length("decapsulate", ciphertext.len(), self.params.ciphertext_size)?;
        let ct = <ml_kem::Ciphertext<K>>::try_from(ciphertext.as_ref())
            .map_err(|_| Error::provider(self.params.name, "decapsulate", "malformed ciphertext"))?;

        let ss = dk
            .decapsulate(&ct)
            .map_err(|_| Error::provider(self.params.name, "decapsulate", "decapsulation failed"))?;
        Ok(SharedSecret::new(&ss))
    }

    fn close(&mut self) {
        self.decapsulation_key = None;
    }
}
