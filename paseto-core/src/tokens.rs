//! Generic Tokens

use std::marker::PhantomData;

use crate::PasetoError;
use crate::encodings::{Footer, Payload};
use crate::key::SymmetricKey;
use crate::version::{self, SealingVersion, TokenPurpose, UnsealingVersion};

pub type SignedToken<V, M, F = ()> = SealedToken<V, version::Public, M, F>;
pub type EncryptedToken<V, M, F = ()> = SealedToken<V, version::Local, M, F>;
pub type VerifiedToken<V, M, F = ()> = UnsealedToken<V, version::Public, M, F>;
pub type DecryptedToken<V, M, F = ()> = UnsealedToken<V, version::Local, M, F>;

/// An unsealed token.
///
/// This represents a PASETO which has had signatures or encryption validated.
/// Using one of the following aliases is suggested
/// * [`VerifiedToken`] - A [`public`](version::Public) PASETO which has had signature validated.
/// * [`DecryptedToken`] - A [`local`](version::Local) PASETO which has successfully been decrypted.
///
/// This type is un-serializable as it isn't sealed. For that you will want [`SealedToken`].
pub struct UnsealedToken<V, P, M, F = ()> {
    /// The message that was contained in the token
    pub message: M,
    /// The footer that was sent with the token
    pub footer: F,
    pub(crate) _version: PhantomData<V>,
    pub(crate) _purpose: PhantomData<P>,
}

impl<V, P, M> UnsealedToken<V, P, M> {
    /// Create a new [`UnsealedToken`] builder with the given message payload
    pub fn new(message: M) -> Self {
        UnsealedToken {
            message,
            footer: (),
            _version: PhantomData,
            _purpose: PhantomData,
        }
    }
}

impl<V, P, M> UnsealedToken<V, P, M, ()> {
    /// Set the footer for this token.
    ///
    /// Footers are embedded into the token as base64 only. They are authenticated but not encrypted.
    pub fn with_footer<F>(self, footer: F) -> UnsealedToken<V, P, M, F> {
        UnsealedToken {
            message: self.message,
            footer,
            _version: self._version,
            _purpose: self._purpose,
        }
    }
}

/// A secured token.
///
/// This represents a PASETO that is signed or encrypted.
/// Using one of the following aliases is suggested
/// * [`SignedToken`] - A [`public`](version::Public) PASETO that is signed.
/// * [`EncryptedToken`] - A [`local`](version::Local) PASETO that is encrypted.
///
/// This type has a payload that is currently inaccessible. To access it, you will need to
/// decrypt/verify the contents. For that you will want [`UnsealedToken`].
///
/// To convert to an [`UnsealedToken`], you will need to use either
/// * [`SignedToken::verify`]
/// * [`EncryptedToken::decrypt`]
pub struct SealedToken<V, P, M, F = ()> {
    pub(crate) body: Vec<u8>,
    pub(crate) encoded_footer: Vec<u8>,
    pub(crate) footer: F,
    pub(crate) _version: PhantomData<V>,
    pub(crate) _purpose: PhantomData<P>,
    pub(crate) _message: PhantomData<M>,
}

impl<V, P, M, F> SealedToken<V, P, M, F> {
    /// View the **unverified** footer for this token
    pub fn unverified_footer(&self) -> &F {
        &self.footer
    }
}

impl<V, P, M, F> SealedToken<V, P, M, F>
where
    V: UnsealingVersion<P>,
    P: TokenPurpose,
    M: Payload,
{
    #[doc(alias = "decrypt")]
    #[doc(alias = "verify")]
    pub fn unseal(
        mut self,
        key: &P::UnsealingKey<V>,
    ) -> Result<UnsealedToken<V, P, M, F>, PasetoError> {
        let cleartext = V::unseal(key, &mut self.body, &self.encoded_footer)?;
        let message = M::decode(cleartext).map_err(PasetoError::PayloadError)?;

        Ok(UnsealedToken {
            message,
            footer: self.footer,
            _version: PhantomData,
            _purpose: PhantomData,
        })
    }
}

impl<V, P, M, F> UnsealedToken<V, P, M, F>
where
    V: SealingVersion<P>,
    P: TokenPurpose,
    M: Payload,
    F: Footer,
{
    #[doc(alias = "encrypt")]
    #[doc(alias = "sign")]
    pub fn seal(self, key: &P::SealingKey<V>) -> Result<SealedToken<V, P, M, F>, PasetoError> {
        let nonce = V::nonce()?;
        self.dangerous_seal_with_nonce(key, nonce)
    }

    /// Seal the token with a caller chosen nonce seed.
    ///
    /// Only use this to reproduce known test vectors.
    pub fn dangerous_seal_with_nonce(
        self,
        key: &P::SealingKey<V>,
        nonce: Vec<u8>,
    ) -> Result<SealedToken<V, P, M, F>, PasetoError> {
        let mut encoded_footer = Vec::new();
        self.footer
            .encode(&mut encoded_footer)
            .map_err(PasetoError::PayloadError)?;

        let mut payload = nonce;
        self.message
            .encode(&mut payload)
            .map_err(PasetoError::PayloadError)?;

        let body = V::dangerous_seal_with_nonce(key, payload, &encoded_footer)?;

        Ok(SealedToken {
            body,
            encoded_footer,
            footer: self.footer,
            _version: PhantomData,
            _purpose: PhantomData,
            _message: PhantomData,
        })
    }
}

impl<V: UnsealingVersion<version::Local>, M: Payload, F> EncryptedToken<V, M, F> {
    #[inline(always)]
    pub fn decrypt(self, key: &SymmetricKey) -> Result<DecryptedToken<V, M, F>, PasetoError> {
        self.unseal(key)
    }
}

impl<V: SealingVersion<version::Local>, M: Payload, F: Footer> DecryptedToken<V, M, F> {
    #[inline(always)]
    pub fn encrypt(self, key: &SymmetricKey) -> Result<EncryptedToken<V, M, F>, PasetoError> {
        self.seal(key)
    }
}

impl<V: UnsealingVersion<version::Public>, M: Payload, F> SignedToken<V, M, F> {
    #[inline(always)]
    pub fn verify(self, key: &V::PublicKey) -> Result<VerifiedToken<V, M, F>, PasetoError> {
        self.unseal(key)
    }
}

impl<V: SealingVersion<version::Public>, M: Payload, F: Footer> VerifiedToken<V, M, F> {
    #[inline(always)]
    pub fn sign(self, key: &V::SecretKey) -> Result<SignedToken<V, M, F>, PasetoError> {
        self.seal(key)
    }
}
