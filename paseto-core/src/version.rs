use crate::PasetoError;
use crate::header::{Header, Purpose, Version};
use crate::key::{KeyEncoding, SymmetricKey};
use crate::sealed::Sealed;

/// An implementation of one PASETO protocol version.
pub trait ProtocolVersion: Sized + Send + Sync + 'static {
    /// The version tag this implementation produces and accepts.
    const VERSION: Version;

    /// An asymmetric key used to validate token signatures.
    type PublicKey: KeyEncoding + Clone + Send + Sync;
    /// An asymmetric key used to create token signatures.
    type SecretKey: KeyEncoding + Send + Sync;
}

/// Marks tokens as encrypted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Local;
/// Marks tokens as signed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Public;

impl Sealed for Local {}
impl Sealed for Public {}

/// A marker for [`Public`] and [`Local`], used for token encodings.
pub trait TokenPurpose: Sealed + Sized + Send + Sync + 'static {
    const PURPOSE: Purpose;

    /// The key used to sign/encrypt tokens.
    type SealingKey<V: ProtocolVersion>;
    /// The key used to validate/decrypt tokens.
    type UnsealingKey<V: ProtocolVersion>;

    /// The header for tokens of this purpose under version `V`.
    fn header<V: ProtocolVersion>() -> Header {
        Header::new(V::VERSION, Self::PURPOSE)
    }
}

impl TokenPurpose for Local {
    const PURPOSE: Purpose = Purpose::Local;

    type SealingKey<V: ProtocolVersion> = SymmetricKey;
    type UnsealingKey<V: ProtocolVersion> = SymmetricKey;
}

impl TokenPurpose for Public {
    const PURPOSE: Purpose = Purpose::Public;

    type SealingKey<V: ProtocolVersion> = V::SecretKey;
    type UnsealingKey<V: ProtocolVersion> = V::PublicKey;
}

/// Encrypting or signing a token body.
pub trait SealingVersion<P: TokenPurpose>: ProtocolVersion {
    /// Generate a new random sealing key.
    fn random() -> Result<P::SealingKey<Self>, PasetoError>;

    /// Derive the key that opens what this key seals.
    fn unsealing_key(key: &P::SealingKey<Self>) -> P::UnsealingKey<Self>;

    /// Start a new body buffer.
    ///
    /// For local tokens this holds the random seed the nonce is derived from;
    /// the payload is appended after it.
    fn nonce() -> Result<Vec<u8>, PasetoError>;

    /// Seal `payload`, which must begin with the output of [`SealingVersion::nonce`].
    ///
    /// Supplying your own nonce seed is only useful to reproduce test vectors.
    /// Reusing a seed with the same key and payload produces the same token.
    fn dangerous_seal_with_nonce(
        key: &P::SealingKey<Self>,
        payload: Vec<u8>,
        footer: &[u8],
    ) -> Result<Vec<u8>, PasetoError>;

    /// Seal the payload into a token body.
    fn seal(
        key: &P::SealingKey<Self>,
        payload: &[u8],
        footer: &[u8],
    ) -> Result<Vec<u8>, PasetoError> {
        let mut body = Self::nonce()?;
        body.extend_from_slice(payload);
        Self::dangerous_seal_with_nonce(key, body, footer)
    }
}

/// Decrypting or verifying a token body.
pub trait UnsealingVersion<P: TokenPurpose>: ProtocolVersion {
    /// Authenticate the body and return the payload.
    ///
    /// The body may be modified in place. Nothing is returned unless
    /// authentication succeeds.
    fn unseal<'a>(
        key: &P::UnsealingKey<Self>,
        body: &'a mut [u8],
        footer: &[u8],
    ) -> Result<&'a [u8], PasetoError>;
}
