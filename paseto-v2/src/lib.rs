//! PASETO v2 (RustCrypto)
//!
//! ```
//! use paseto_v2::{SignedToken, VerifiedToken, SecretKey, PublicKey};
//!
//! // create a new keypair
//! let secret_key = SecretKey::random().unwrap();
//! let public_key = secret_key.public_key();
//!
//! // create and sign a new token
//! let signed_token = VerifiedToken::new(b"hello".to_vec())
//!     .sign(&secret_key)
//!     .unwrap();
//!
//! // serialize the token.
//! let token = signed_token.to_string();
//! // "v2.public..."
//!
//! // ...
//!
//! // parse the token
//! let signed_token: SignedToken<Vec<u8>> = token.parse().unwrap();
//!
//! // verify the token signature
//! let verified_token = signed_token.verify(&public_key).unwrap();
//! assert_eq!(verified_token.message, b"hello");
//! ```
#![forbid(unsafe_code)]

/// Low level implementation primitives.
pub mod core;

pub use paseto_core::PasetoError;

/// A token with publically readable data, but not yet verified
pub type SignedToken<M, F = ()> = paseto_core::SignedToken<core::V2, M, F>;
/// A token with secret data
pub type EncryptedToken<M, F = ()> = paseto_core::EncryptedToken<core::V2, M, F>;
/// A [`SignedToken`] that has been verified
pub type VerifiedToken<M, F = ()> = paseto_core::VerifiedToken<core::V2, M, F>;
/// An [`EncryptedToken`] that has been decrypted
pub type DecryptedToken<M, F = ()> = paseto_core::DecryptedToken<core::V2, M, F>;

/// Private key used for [`encryption`](DecryptedToken::encrypt) and [`decryption`](EncryptedToken::decrypt)
pub type LocalKey = paseto_core::SymmetricKey;
/// Public key used for signature [`verification`](SignedToken::verify)
pub type PublicKey = core::PublicKey;
/// Private key used for token [`signing`](VerifiedToken::sign)
pub type SecretKey = core::SecretKey;
