// kem/src/kyber/mod.rs

//! Kyber (round 3) backend.
//!
//! Delegates every operation to the PQClean implementation shipped in
//! `pqcrypto-kyber`. PQClean draws its own randomness from the operating
//! system, so these sessions ignore any seed the provider was built with.

use kemcheck_api::error::validation;
use kemcheck_api::{Ciphertext, Error, KemParams, KemSession, PublicKey, Result, SharedSecret};
use kemcheck_params::pqc::{KYBER1024, KYBER512, KYBER768};
use pqcrypto_kyber::{kyber1024, kyber512, kyber768};
use pqcrypto_traits::kem::{Ciphertext as _, PublicKey as _, SharedSecret as _};

macro_rules! kyber_session {
    ($session:ident, $variant:ident, $params:ident) => {
        /// Session backed by PQClean
        pub(crate) struct $session {
            secret_key: Option<$variant::SecretKey>,
        }

        impl $session {
            pub(crate) fn open() -> Box<dyn KemSession> {
                Box::new(Self { secret_key: None })
            }
        }

        impl KemSession for $session {
            fn params(&self) -> &'static KemParams {
                &$params
            }

            fn generate_keypair(&mut self) -> Result<PublicKey> {
                let (pk, sk) = $variant::keypair();
                self.secret_key = Some(sk);
                Ok(PublicKey::new(pk.as_bytes()))
            }

            fn encapsulate(
                &mut self,
                public_key: &PublicKey,
            ) -> Result<(Ciphertext, SharedSecret)> {
                validation::length("encapsulate", public_key.len(), $variant::public_key_bytes())?;
                let pk = $variant::PublicKey::from_bytes(public_key.as_ref()).map_err(|e| {
                    Error::provider($params.name, "encapsulate", format!("{:?}", e))
                })?;

                // PQClean returns the secret first
                let (ss, ct) = $variant::encapsulate(&pk);
                Ok((Ciphertext::new(ct.as_bytes()), SharedSecret::new(ss.as_bytes())))
            }

            fn decapsulate(&mut self, ciphertext: &Ciphertext) -> Result<SharedSecret> {
                let sk = self.secret_key.as_ref().ok_or_else(|| {
                    Error::provider($params.name, "decapsulate", "no keypair generated in this context")
                })?;
                validation::length("decapsulate", ciphertext.len(), $variant::ciphertext_bytes())?;
                let ct = $variant::Ciphertext::from_bytes(ciphertext.as_ref()).map_err(|e| {
                    Error::provider($params.name, "decapsulate", format!("{:?}", e))
                })?;

                let ss = $variant::decapsulate(&ct, sk);
                Ok(SharedSecret::new(ss.as_bytes()))
            }

            fn close(&mut self) {
                self.secret_key = None;
            }
        }
    };
}

kyber_session!(Kyber512Session, kyber512, KYBER512);
kyber_session!(Kyber768Session, kyber768, KYBER768);
kyber_session!(Kyber1024Session, kyber1024, KYBER1024);
