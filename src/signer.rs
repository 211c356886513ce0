//! Signing and verification of string tokens.

use std::fmt;
use std::marker::PhantomData;

use hmac::digest::core_api::BlockSizeUser;
use hmac::digest::Digest;
use hmac::{Mac, SimpleHmac};
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::error::SignerError;
use crate::keys::{derive_key, SecretKey};
use crate::token::{decode_signature, join_token, split_token};

/// Signs strings and verifies the resulting tokens with one secret key.
///
/// The hash `D` is used both to derive the MAC key from the secret and as
/// the HMAC hash. It is fixed for the lifetime of the signer and is not
/// recorded in tokens, so issuer and verifier must agree on it out of band.
///
/// A `Signer` is immutable after construction and can be shared across
/// threads freely.
pub struct Signer<D = Sha256> {
    secret: SecretKey,
    mac_key: Zeroizing<Vec<u8>>,
    hash: PhantomData<fn() -> D>,
}

impl Signer<Sha256> {
    /// Create a signer using HMAC-SHA256.
    ///
    /// The key should be non-empty and high-entropy; this is not checked.
    pub fn new(key: impl AsRef<[u8]>) -> Self {
        Self::with_hash(key)
    }
}

impl<D> Signer<D>
where
    D: Digest + BlockSizeUser,
{
    /// Create a signer using hash `D` for key derivation and HMAC.
    pub fn with_hash(key: impl AsRef<[u8]>) -> Self {
        Self::from_secret(SecretKey::new(key.as_ref()))
    }

    pub fn from_secret(secret: SecretKey) -> Self {
        let mac_key = derive_key::<D>(secret.as_bytes());
        Signer {
            secret,
            mac_key,
            hash: PhantomData,
        }
    }

    /// The secret this signer was built from.
    pub fn secret(&self) -> &SecretKey {
        &self.secret
    }

    #[allow(clippy::expect_used)] // HMAC accepts keys of any length
    fn keyed_mac(&self) -> SimpleHmac<D> {
        <SimpleHmac<D> as Mac>::new_from_slice(&self.mac_key)
            .expect("HMAC key of any length is valid")
    }

    /// HMAC of `data` under the derived key. Output length is the digest
    /// size of `D`.
    fn compute_mac(&self, data: &str) -> Vec<u8> {
        let mut mac = self.keyed_mac();
        mac.update(data.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }

    /// Sign `data`, returning `data.<base64url MAC>`.
    ///
    /// Any string is accepted, including the empty string and strings
    /// containing `.`. The output is deterministic.
    #[must_use]
    pub fn sign(&self, data: &str) -> String {
        join_token(data, &self.compute_mac(data))
    }

    /// Verify a token produced by [`Signer::sign`] and return its data.
    ///
    /// The MAC is compared in constant time. A token with no separator
    /// yields `MalformedToken`, a signature segment that is not unpadded
    /// base64url yields `InvalidEncoding`, and a MAC mismatch of any kind
    /// (including length) yields `BadSignature`.
    pub fn unsign<'a>(&self, token: &'a str) -> Result<&'a str, SignerError> {
        let parts = split_token(token).inspect_err(|_| {
            tracing::debug!(token_len = token.len(), "rejected token: no separator");
        })?;

        let signature = decode_signature(parts.signature).inspect_err(|e| {
            tracing::debug!(
                signature_len = parts.signature.len(),
                error = %e,
                "rejected token: undecodable signature"
            );
        })?;

        let mut mac = self.keyed_mac();
        mac.update(parts.data.as_bytes());
        mac.verify_slice(&signature).map_err(|_| {
            tracing::debug!(
                mac_len = signature.len(),
                "rejected token: signature mismatch"
            );
            SignerError::BadSignature
        })?;

        Ok(parts.data)
    }

    /// True if `token` carries a valid signature.
    #[must_use]
    pub fn verify(&self, token: &str) -> bool {
        self.unsign(token).is_ok()
    }
}

impl<D> Clone for Signer<D> {
    fn clone(&self) -> Self {
        Signer {
            secret: self.secret.clone(),
            mac_key: self.mac_key.clone(),
            hash: PhantomData,
        }
    }
}

impl<D> fmt::Debug for Signer<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("hash", &std::any::type_name::<D>())
            .field("secret", &self.secret)
            .finish_non_exhaustive()
    }
}
