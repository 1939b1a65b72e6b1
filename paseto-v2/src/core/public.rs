use ed25519_dalek::{Signature, Signer, Verifier};
use paseto_core::PasetoError;
use paseto_core::key::KeyEncoding;
use paseto_core::pae::pre_auth_encode;
use paseto_core::version::{Public, TokenPurpose};
use zeroize::Zeroizing;

use super::{PublicKey, SecretKey, V2};

const SIGNATURE_LEN: usize = 64;

impl KeyEncoding for PublicKey {
    fn decode(bytes: &[u8]) -> Result<Self, PasetoError> {
        let key = bytes.try_into().map_err(|_| PasetoError::InvalidKey)?;
        ed25519_dalek::VerifyingKey::from_bytes(key)
            .map(PublicKey)
            .map_err(|_| PasetoError::InvalidKey)
    }

    fn encode(&self) -> Box<[u8]> {
        self.0.as_bytes().to_vec().into_boxed_slice()
    }
}

impl KeyEncoding for SecretKey {
    /// Accepts either the 32 byte seed, or the 64 byte seed and public key.
    fn decode(bytes: &[u8]) -> Result<Self, PasetoError> {
        if let Ok(seed) = <&[u8; 32]>::try_from(bytes) {
            return Ok(Self(ed25519_dalek::SigningKey::from_bytes(seed)));
        }

        let keypair = bytes.try_into().map_err(|_| PasetoError::InvalidKey)?;
        ed25519_dalek::SigningKey::from_keypair_bytes(keypair)
            .map(SecretKey)
            .map_err(|_| PasetoError::InvalidKey)
    }

    fn encode(&self) -> Box<[u8]> {
        let bytes = Zeroizing::new(self.0.to_keypair_bytes());
        bytes.to_vec().into_boxed_slice()
    }
}

impl SecretKey {
    /// Generate a fresh Ed25519 key.
    pub fn random() -> Result<Self, PasetoError> {
        let mut seed = Zeroizing::new([0; 32]);
        getrandom::fill(&mut seed[..]).map_err(|_| PasetoError::CryptoError)?;
        Ok(Self(ed25519_dalek::SigningKey::from_bytes(&seed)))
    }

    /// The public half of this keypair.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.verifying_key())
    }
}

impl paseto_core::version::SealingVersion<Public> for V2 {
    fn random() -> Result<SecretKey, PasetoError> {
        SecretKey::random()
    }

    fn unsealing_key(key: &SecretKey) -> PublicKey {
        key.public_key()
    }

    fn nonce() -> Result<Vec<u8>, PasetoError> {
        Ok(Vec::with_capacity(SIGNATURE_LEN + 64))
    }

    fn dangerous_seal_with_nonce(
        key: &SecretKey,
        mut payload: Vec<u8>,
        footer: &[u8],
    ) -> Result<Vec<u8>, PasetoError> {
        let signature = key.0.sign(&preauth_public(&payload, footer));
        payload.extend_from_slice(&signature.to_bytes());

        Ok(payload)
    }
}

impl paseto_core::version::UnsealingVersion<Public> for V2 {
    fn unseal<'a>(
        key: &PublicKey,
        body: &'a mut [u8],
        footer: &[u8],
    ) -> Result<&'a [u8], PasetoError> {
        let (cleartext, tag) = body
            .split_last_chunk::<SIGNATURE_LEN>()
            .ok_or(PasetoError::IncorrectTokenFormat)?;

        let signature = Signature::from_bytes(tag);
        key.0
            .verify(&preauth_public(cleartext, footer), &signature)
            .map_err(|_| PasetoError::InvalidSignature)?;

        Ok(cleartext)
    }
}

fn preauth_public(cleartext: &[u8], footer: &[u8]) -> Vec<u8> {
    let mut v = Vec::new();
    pre_auth_encode(
        [
            &[Public::header::<V2>().as_str().as_bytes()],
            &[cleartext],
            &[footer],
        ],
        &mut v,
    );
    v
}
