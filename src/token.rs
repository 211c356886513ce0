//! Token wire format.
//!
//!   token     := data SEP signature
//!   SEP       := "."
//!   signature := base64url-nopad(MAC)
//!
//! The base64url alphabet has no `.`, so a well-formed signature segment
//! never contains the separator. The token is split on the last separator:
//! data containing `.` stays intact, and for any token whose data has no
//! `.` this is the same split as on the first separator.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Serialize;

use crate::error::SignerError;
use crate::types::SEPARATOR;

/// A token split into its two segments. Nothing here has been verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenParts<'a> {
    pub data: &'a str,
    pub signature: &'a str,
}

/// Split a token into data and signature segments.
///
/// Returns `MalformedToken` if there is no separator at all.
pub fn split_token(token: &str) -> Result<TokenParts<'_>, SignerError> {
    token
        .rsplit_once(SEPARATOR)
        .map(|(data, signature)| TokenParts { data, signature })
        .ok_or(SignerError::MalformedToken)
}

/// Encode raw MAC bytes as unpadded base64url.
#[must_use]
pub fn encode_signature(mac: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(mac)
}

/// Decode an unpadded base64url signature segment.
///
/// Padding, non-alphabet bytes and non-canonical trailing bits are all
/// rejected.
pub fn decode_signature(signature: &str) -> Result<Vec<u8>, SignerError> {
    Ok(URL_SAFE_NO_PAD.decode(signature)?)
}

/// Assemble `data SEP signature`.
#[must_use]
pub fn join_token(data: &str, mac: &[u8]) -> String {
    let encoded = encode_signature(mac);
    let mut token = String::with_capacity(data.len() + 1 + encoded.len());
    token.push_str(data);
    token.push(SEPARATOR);
    token.push_str(&encoded);
    token
}
