//! Secret key handling and MAC key derivation.
//!
//! The raw secret is never used as the HMAC key directly. It is first
//! hashed behind the fixed [`SALT`] so that the same secret used elsewhere
//! in a host application yields an unrelated MAC key here:
//!
//!   mac_key = H(SALT || secret)
//!
//! Both the secret and the derived key live in `Zeroizing` buffers and are
//! wiped from memory on drop.

use std::fmt;

use rand::RngCore;
use sha2::Digest;
use zeroize::Zeroizing;

use crate::types::SALT;

/// A symmetric signing secret.
///
/// Any length is accepted, including zero. An empty or short secret makes
/// every token forgeable by anyone who guesses it; callers are expected to
/// supply at least 32 bytes of random key material.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(Zeroizing<Vec<u8>>);

impl SecretKey {
    pub fn new(bytes: impl Into<Vec<u8>>) -> SecretKey {
        SecretKey(Zeroizing::new(bytes.into()))
    }

    /// Parse a hex-encoded secret, ignoring surrounding whitespace.
    pub fn from_hex(hex_str: &str) -> Result<SecretKey, hex::FromHexError> {
        hex::decode(hex_str.trim()).map(SecretKey::new)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for SecretKey {
    fn from(bytes: &[u8]) -> Self {
        SecretKey::new(bytes)
    }
}

impl From<Vec<u8>> for SecretKey {
    fn from(bytes: Vec<u8>) -> Self {
        SecretKey::new(bytes)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey([REDACTED; {}])", self.0.len())
    }
}

/// Derive the MAC key: `D(SALT || secret)`.
///
/// Deterministic and pure; the output length is the digest size of `D`
/// (32 bytes for SHA-256).
#[must_use]
pub fn derive_key<D: Digest>(secret: &[u8]) -> Zeroizing<Vec<u8>> {
    let digest = D::new()
        .chain_update(SALT.as_bytes())
        .chain_update(secret)
        .finalize();
    Zeroizing::new(digest.to_vec())
}

/// Generate `len` bytes of secret key material from the OS RNG.
pub fn generate_secret_key(len: usize) -> SecretKey {
    let mut bytes = Zeroizing::new(vec![0u8; len]);
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    SecretKey(bytes)
}
