use digest::Digest;
use paseto_core::PasetoError;
use paseto_core::key::KeyEncoding;
use paseto_core::pae::pre_auth_encode;
use paseto_core::version::{Public, TokenPurpose};
use rsa::pss::Signature;
use rsa::rand_core::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

use super::{PreAuthEncodeDigest, PublicKey, SecretKey, V1};

const SIGNATURE_LEN: usize = 256;
const MODULUS_BITS: usize = 2048;

fn check_modulus(key: &RsaPublicKey) -> Result<(), PasetoError> {
    if key.n().bits() != MODULUS_BITS {
        return Err(PasetoError::InvalidKey);
    }
    Ok(())
}

impl PublicKey {
    /// Accepts an SPKI or PKCS#1 public key, either DER or PEM.
    fn parse(bytes: &[u8]) -> Result<RsaPublicKey, PasetoError> {
        use rsa::pkcs1::DecodeRsaPublicKey;
        use rsa::pkcs8::DecodePublicKey;

        if let Ok(key) = RsaPublicKey::from_public_key_der(bytes) {
            return Ok(key);
        }
        if let Ok(key) = RsaPublicKey::from_pkcs1_der(bytes) {
            return Ok(key);
        }

        let s = std::str::from_utf8(bytes).map_err(|_| PasetoError::InvalidKey)?;
        RsaPublicKey::from_public_key_pem(s)
            .or_else(|_| RsaPublicKey::from_pkcs1_pem(s))
            .map_err(|_| PasetoError::InvalidKey)
    }
}

impl KeyEncoding for PublicKey {
    fn decode(bytes: &[u8]) -> Result<Self, PasetoError> {
        let key = Self::parse(bytes)?;
        check_modulus(&key)?;
        Ok(Self(key))
    }

    fn encode(&self) -> Box<[u8]> {
        use rsa::pkcs8::EncodePublicKey;

        self.0
            .to_public_key_der()
            .expect("encoding to spki der should succeed")
            .into_vec()
            .into_boxed_slice()
    }
}

impl SecretKey {
    /// Accepts a PKCS#1 or PKCS#8 private key, either DER or PEM.
    fn parse(bytes: &[u8]) -> Result<RsaPrivateKey, PasetoError> {
        use rsa::pkcs1::DecodeRsaPrivateKey;
        use rsa::pkcs8::DecodePrivateKey;

        if let Ok(key) = RsaPrivateKey::from_pkcs1_der(bytes) {
            return Ok(key);
        }
        if let Ok(key) = RsaPrivateKey::from_pkcs8_der(bytes) {
            return Ok(key);
        }

        let s = std::str::from_utf8(bytes).map_err(|_| PasetoError::InvalidKey)?;
        RsaPrivateKey::from_pkcs1_pem(s)
            .or_else(|_| RsaPrivateKey::from_pkcs8_pem(s))
            .map_err(|_| PasetoError::InvalidKey)
    }

    /// Generate a fresh RSA-2048 key.
    ///
    /// This is slow, on the order of a second in debug builds.
    pub fn random() -> Result<Self, PasetoError> {
        RsaPrivateKey::new(&mut OsRng, MODULUS_BITS)
            .map(Self)
            .map_err(|_| PasetoError::CryptoError)
    }

    /// The public half of this keypair.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.to_public_key())
    }
}

impl KeyEncoding for SecretKey {
    fn decode(bytes: &[u8]) -> Result<Self, PasetoError> {
        let key = Self::parse(bytes)?;
        check_modulus(&key.to_public_key())?;
        Ok(Self(key))
    }

    fn encode(&self) -> Box<[u8]> {
        use rsa::pkcs1::EncodeRsaPrivateKey;

        self.0
            .to_pkcs1_der()
            .expect("encoding to pkcs1 der should succeed")
            .as_bytes()
            .to_vec()
            .into_boxed_slice()
    }
}

impl paseto_core::version::SealingVersion<Public> for V1 {
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
        use rsa::signature::RandomizedDigestSigner;

        let signer = rsa::pss::SigningKey::<sha2::Sha384>::new(key.0.clone());
        let digest = preauth_public(&payload, footer);
        let signature: Box<[u8]> = signer
            .try_sign_digest_with_rng(&mut OsRng, digest)
            .map_err(|_| PasetoError::CryptoError)?
            .into();

        payload.extend_from_slice(&signature);

        Ok(payload)
    }
}

impl paseto_core::version::UnsealingVersion<Public> for V1 {
    fn unseal<'a>(
        key: &PublicKey,
        body: &'a mut [u8],
        footer: &[u8],
    ) -> Result<&'a [u8], PasetoError> {
        use rsa::signature::DigestVerifier;

        let (cleartext, tag) = body
            .split_last_chunk::<SIGNATURE_LEN>()
            .ok_or(PasetoError::IncorrectTokenFormat)?;

        let signature =
            Signature::try_from(&tag[..]).map_err(|_| PasetoError::IncorrectTokenFormat)?;
        let verifier = rsa::pss::VerifyingKey::<sha2::Sha384>::new(key.0.clone());
        let digest = preauth_public(cleartext, footer);
        DigestVerifier::<sha2::Sha384, Signature>::verify_digest(&verifier, digest, &signature)
            .map_err(|_| PasetoError::InvalidSignature)?;

        Ok(cleartext)
    }
}

fn preauth_public(cleartext: &[u8], footer: &[u8]) -> sha2::Sha384 {
    let mut digest = sha2::Sha384::new();
    pre_auth_encode(
        [
            &[Public::header::<V1>().as_str().as_bytes()],
            &[cleartext],
            &[footer],
        ],
        PreAuthEncodeDigest(&mut digest),
    );
    digest
}
