//! Parse, verify and issue PASETO v1 and v2 tokens.
//!
//! The token header alone decides which primitives are used. A `v2.local` token
//! is only ever decrypted with XChaCha20-Poly1305, and a `v1.public` token is only
//! ever checked against the RSA key registered for v1.
//!
//! ```
//! use paseto::{PublicKeys, SecretKey, SymmetricKey, Version};
//!
//! let key = SymmetricKey::random().unwrap();
//! let token = paseto::encrypt(Version::V2, &key, b"hello", b"kid").unwrap();
//!
//! // the footer is readable without any key
//! assert_eq!(paseto::parse_footer(&token).unwrap(), b"kid");
//!
//! let decoded = paseto::parse(&token, Some(&key), &PublicKeys::new()).unwrap();
//! assert_eq!(decoded.payload, b"hello");
//!
//! let secret_key = SecretKey::random(Version::V2).unwrap();
//! let keys = PublicKeys::new().with(secret_key.public_key());
//!
//! let token = paseto::sign(&secret_key, b"hello", b"").unwrap();
//! let decoded = paseto::parse(&token, None, &keys).unwrap();
//! assert_eq!(decoded.payload, b"hello");
//! ```
//!
//! When the scheme is known up front, the typed tokens in [`v1`] and [`v2`] avoid
//! the runtime dispatch entirely.
#![forbid(unsafe_code)]

#[cfg(not(any(feature = "v1", feature = "v2")))]
compile_error!("at least one of the `v1` or `v2` features must be enabled");

mod keys;

pub use keys::{PublicKey, PublicKeys, SecretKey};
pub use paseto_core::untrusted::UntrustedToken;
pub use paseto_core::{Header, PasetoError, Purpose, SymmetricKey, Version};
#[cfg(feature = "json")]
pub use paseto_json as json;
#[cfg(feature = "v1")]
pub use paseto_v1 as v1;
#[cfg(feature = "v2")]
pub use paseto_v2 as v2;

use paseto_core::untrusted::{RawToken, encode_token};
use paseto_core::version::{Local, Public, SealingVersion, TokenPurpose, UnsealingVersion};
#[cfg(feature = "v1")]
use paseto_v1::core::V1;
#[cfg(feature = "v2")]
use paseto_v2::core::V2;

/// A token that was successfully decrypted or verified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedToken {
    pub version: Version,
    pub purpose: Purpose,
    pub payload: Vec<u8>,
    /// The authenticated footer. Empty if the token had none.
    pub footer: Vec<u8>,
}

#[cfg(feature = "json")]
impl DecodedToken {
    /// Decode the payload as JSON into `T`.
    ///
    /// No claims are validated.
    pub fn json_payload<T>(&self) -> Result<T, PasetoError>
    where
        paseto_json::Json<T>: paseto_core::encodings::Payload,
    {
        <paseto_json::Json<T> as paseto_core::encodings::Payload>::decode(&self.payload)
            .map(|json| json.0)
            .map_err(PasetoError::PayloadError)
    }
}

/// Decrypt or verify a token.
///
/// `local` tokens need the `symmetric_key`; `public` tokens are checked against the
/// key in `public_keys` for the token's version. Nothing is returned unless the
/// token authenticates.
pub fn parse(
    token: &str,
    symmetric_key: Option<&SymmetricKey>,
    public_keys: &PublicKeys,
) -> Result<DecodedToken, PasetoError> {
    let result = parse_inner(token, symmetric_key, public_keys);
    if let Err(err) = &result {
        tracing::debug!(error = %err, "token rejected");
    }
    result
}

fn parse_inner(
    token: &str,
    symmetric_key: Option<&SymmetricKey>,
    public_keys: &PublicKeys,
) -> Result<DecodedToken, PasetoError> {
    let RawToken {
        header,
        mut body,
        footer,
    } = UntrustedToken::parse(token)?.decode()?;

    tracing::debug!(version = %header.version, purpose = %header.purpose, "unsealing token");

    let local_key = || symmetric_key.ok_or(PasetoError::InvalidKey);

    let payload = match (header.version, header.purpose) {
        #[cfg(feature = "v1")]
        (Version::V1, Purpose::Local) => unseal::<V1, Local>(local_key()?, &mut body, &footer)?,
        #[cfg(feature = "v1")]
        (Version::V1, Purpose::Public) => {
            let key = public_keys.v1().ok_or(PasetoError::PublicKeyNotFound)?;
            unseal::<V1, Public>(key, &mut body, &footer)?
        }
        #[cfg(feature = "v2")]
        (Version::V2, Purpose::Local) => unseal::<V2, Local>(local_key()?, &mut body, &footer)?,
        #[cfg(feature = "v2")]
        (Version::V2, Purpose::Public) => {
            let key = public_keys.v2().ok_or(PasetoError::PublicKeyNotFound)?;
            unseal::<V2, Public>(key, &mut body, &footer)?
        }
        #[allow(unreachable_patterns)]
        _ => return Err(PasetoError::UnsupportedTokenVersion),
    };

    Ok(DecodedToken {
        version: header.version,
        purpose: header.purpose,
        payload,
        footer,
    })
}

fn unseal<V: UnsealingVersion<P>, P: TokenPurpose>(
    key: &P::UnsealingKey<V>,
    body: &mut [u8],
    footer: &[u8],
) -> Result<Vec<u8>, PasetoError> {
    V::unseal(key, body, footer).map(<[u8]>::to_vec)
}

/// Read the footer of a token without any key.
///
/// Only the header and footer are checked. The body is never decoded, and
/// nothing is authenticated. Returns an empty footer if the token has none.
pub fn parse_footer(token: &str) -> Result<Vec<u8>, PasetoError> {
    UntrustedToken::parse(token)?.footer()
}

/// Read the version and purpose of a token.
///
/// Only the header is inspected.
pub fn get_token_info(token: &str) -> Result<(Version, Purpose), PasetoError> {
    let header = UntrustedToken::parse(token)?.header();
    Ok((header.version, header.purpose))
}

/// Issue a `local` token.
///
/// An empty footer is omitted from the token.
pub fn encrypt(
    version: Version,
    key: &SymmetricKey,
    payload: &[u8],
    footer: &[u8],
) -> Result<String, PasetoError> {
    tracing::debug!(%version, "encrypting token");

    let body = match version {
        #[cfg(feature = "v1")]
        Version::V1 => seal::<V1, Local>(key, payload, footer)?,
        #[cfg(feature = "v2")]
        Version::V2 => seal::<V2, Local>(key, payload, footer)?,
        #[allow(unreachable_patterns)]
        _ => return Err(PasetoError::UnsupportedTokenVersion),
    };

    Ok(encode_token(Header::new(version, Purpose::Local), &body, footer))
}

/// Issue a `public` token. The version is taken from the key.
///
/// An empty footer is omitted from the token.
pub fn sign(secret_key: &SecretKey, payload: &[u8], footer: &[u8]) -> Result<String, PasetoError> {
    let version = secret_key.version();
    tracing::debug!(%version, "signing token");

    let body = match secret_key {
        #[cfg(feature = "v1")]
        SecretKey::V1(key) => seal::<V1, Public>(key, payload, footer)?,
        #[cfg(feature = "v2")]
        SecretKey::V2(key) => seal::<V2, Public>(key, payload, footer)?,
    };

    Ok(encode_token(Header::new(version, Purpose::Public), &body, footer))
}

fn seal<V: SealingVersion<P>, P: TokenPurpose>(
    key: &P::SealingKey<V>,
    payload: &[u8],
    footer: &[u8],
) -> Result<Vec<u8>, PasetoError> {
    V::seal(key, payload, footer)
}
