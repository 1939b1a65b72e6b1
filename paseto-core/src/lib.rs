//! Core types for PASETO v1 and v2.
//!
//! This crate holds everything that is shared between the protocol versions:
//! the token grammar, pre-auth encoding, the error type, and the traits that each
//! version implements. It performs no cryptography itself.
#![forbid(unsafe_code)]

mod base64;
pub mod encodings;
pub mod header;
pub mod key;
pub mod pae;
pub mod tokens;
pub mod untrusted;
pub mod version;

pub use header::{Header, Purpose, Version};
pub use key::SymmetricKey;
pub use tokens::{DecryptedToken, EncryptedToken, SignedToken, VerifiedToken};

mod sealed {
    pub trait Sealed {}
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
/// Error returned for all PASETO operations that can fail
pub enum PasetoError {
    /// The token did not follow the `version.purpose.body[.footer]` grammar,
    /// was not valid base64url, or its body was too short for its scheme.
    #[error("incorrect token format")]
    IncorrectTokenFormat,
    /// The version segment was not a recognised literal.
    #[error("unsupported token version")]
    UnsupportedTokenVersion,
    /// The purpose segment was not a recognised literal.
    #[error("unsupported token type")]
    UnsupportedTokenType,
    /// A public token was presented but no public key exists for its version.
    #[error("public key not found")]
    PublicKeyNotFound,
    /// Key material was missing or could not be decoded.
    #[error("invalid key")]
    InvalidKey,
    /// A local token could not be authenticated.
    #[error("token authentication failed")]
    AuthenticationFailed,
    /// A public token signature could not be verified.
    #[error("invalid token signature")]
    InvalidSignature,
    /// The random source or a signing primitive failed while issuing a token.
    #[error("cryptographic operation failed")]
    CryptoError,
    /// There was an error with payload or footer processing
    #[error("there was an error with the payload encoding: {0}")]
    PayloadError(#[source] Box<dyn std::error::Error + Send + Sync>),
}
