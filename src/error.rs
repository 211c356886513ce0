use thiserror::Error;

/// Reasons a token can be rejected.
///
/// `MalformedToken` and `BadSignature` render the same message so that a
/// caller which only forwards the error text cannot be used as a format
/// oracle. Match on the variant when the distinction matters locally.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SignerError {
    /// The token has no separator and cannot be split into data and signature.
    #[error("bad signature")]
    MalformedToken,

    /// The signature segment is not unpadded base64url.
    #[error("invalid signature encoding: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    /// The signature decoded but does not match the data.
    #[error("bad signature")]
    BadSignature,
}

impl SignerError {
    /// True for every failure reported as "bad signature", i.e. both
    /// unsplittable tokens and MAC mismatches.
    #[must_use]
    pub fn is_bad_signature(&self) -> bool {
        matches!(self, SignerError::MalformedToken | SignerError::BadSignature)
    }
}
