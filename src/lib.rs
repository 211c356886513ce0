//! sso-signer: tamper-evident string tokens signed with a symmetric key.
//!
//! A token is the cleartext data, a `.` separator, and the unpadded
//! base64url HMAC of the data under a key derived as
//! `SHA-256("sso-signer" || secret)`.

pub mod error;
pub mod keys;
pub mod signer;
pub mod token;
pub mod types;

pub use error::SignerError;
pub use keys::SecretKey;
pub use signer::Signer;
pub use zeroize::Zeroizing;
