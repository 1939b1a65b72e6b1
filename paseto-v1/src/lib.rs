//! PASETO v1 (RustCrypto)
//!
//! ```
//! use paseto_v1::{EncryptedToken, DecryptedToken, LocalKey};
//!
//! let key = LocalKey::random().unwrap();
//!
//! // encrypt a new token
//! let token = DecryptedToken::new(b"hello".to_vec())
//!     .with_footer(b"key-id".to_vec())
//!     .encrypt(&key)
//!     .unwrap()
//!     .to_string();
//! // "v1.local..."
//!
//! // parse and decrypt the token
//! let token: EncryptedToken<Vec<u8>, Vec<u8>> = token.parse().unwrap();
//! assert_eq!(token.unverified_footer(), b"key-id");
//!
//! let token = token.decrypt(&key).unwrap();
//! assert_eq!(token.message, b"hello");
//! ```
#![forbid(unsafe_code)]

/// Low level implementation primitives.
pub mod core;

pub use paseto_core::PasetoError;

/// A token with publically readable data, but not yet verified
pub type SignedToken<M, F = ()> = paseto_core::SignedToken<core::V1, M, F>;
/// A token with secret data
pub type EncryptedToken<M, F = ()> = paseto_core::EncryptedToken<core::V1, M, F>;
/// A [`SignedToken`] that has been verified
pub type VerifiedToken<M, F = ()> = paseto_core::VerifiedToken<core::V1, M, F>;
/// An [`EncryptedToken`] that has been decrypted
pub type DecryptedToken<M, F = ()> = paseto_core::DecryptedToken<core::V1, M, F>;

/// Private key used for [`encryption`](DecryptedToken::encrypt) and [`decryption`](EncryptedToken::decrypt)
pub type LocalKey = paseto_core::SymmetricKey;
/// Public key used for signature [`verification`](SignedToken::verify)
pub type PublicKey = core::PublicKey;
/// Private key used for token [`signing`](VerifiedToken::sign)
pub type SecretKey = core::SecretKey;
