/// Domain-separation prefix hashed in front of the secret to derive the MAC key.
pub const SALT: &str = "sso-signer";

/// Separator between the cleartext data and the encoded signature.
pub const SEPARATOR: char = '.';

/// Constant: HMAC-SHA256 MAC length in bytes.
pub const SHA256_MAC_LEN: usize = 32;

/// Constant: length of an HMAC-SHA256 MAC once base64url-encoded without padding.
pub const SHA256_ENCODED_MAC_LEN: usize = 43;

/// Constant: default length of a freshly generated secret key.
pub const DEFAULT_SECRET_KEY_LEN: usize = 32;
