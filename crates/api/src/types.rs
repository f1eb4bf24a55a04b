//! Byte sequences exchanged across the provider boundary
//!
//! Lengths are mechanism-defined; the harness never computes them. Values
//! are immutable once a provider returns them.

use core::fmt;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Wrapper for public key data
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    data: Vec<u8>,
}

impl PublicKey {
    /// Create a new public key from a byte array
    pub fn new(bytes: &[u8]) -> Self {
        Self { data: bytes.to_vec() }
    }

    /// Get the length of the key
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the key is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for PublicKey {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({} bytes)", self.data.len())
    }
}

/// Wrapper for ciphertext data
#[derive(Clone, PartialEq, Eq)]
pub struct Ciphertext {
    data: Vec<u8>,
}

impl Ciphertext {
    /// Create a new ciphertext from a byte array
    pub fn new(bytes: &[u8]) -> Self {
        Self { data: bytes.to_vec() }
    }

    /// Get the length of the ciphertext
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the ciphertext is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for Ciphertext {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl AsRef<[u8]> for Ciphertext {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ciphertext({} bytes)", self.data.len())
    }
}

/// Shared secret derived by either party of a round-trip
///
/// Zeroized on drop. Equality is constant-time over the bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    data: Vec<u8>,
}

impl SharedSecret {
    /// Create a new shared secret by copying from a slice
    pub fn new(bytes: &[u8]) -> Self {
        Self { data: bytes.to_vec() }
    }

    /// Get the length of the secret
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the secret is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for SharedSecret {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        // Slices of different length compare unequal without inspecting bytes
        self.data.as_slice().ct_eq(other.data.as_slice())
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret({})[REDACTED]", self.data.len())
    }
}
