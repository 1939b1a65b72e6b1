use cipher::{KeyIvInit, StreamCipher};
use digest::Mac;
use paseto_core::PasetoError;
use paseto_core::key::SymmetricKey;
use paseto_core::pae::pre_auth_encode;
use paseto_core::version::{Local, TokenPurpose};
use zeroize::Zeroizing;

use super::{PreAuthEncodeDigest, V1};

type Cipher = ctr::Ctr128BE<aes::Aes256>;
type HmacSha384 = hmac::Hmac<sha2::Sha384>;

const NONCE_LEN: usize = 32;
const TAG_LEN: usize = 48;

/// Derive the encryption and authentication keys for this nonce.
fn keys(key: &SymmetricKey, nonce: &[u8; NONCE_LEN]) -> (Cipher, HmacSha384) {
    let (salt, iv) = nonce.split_at(16);

    let ek = kdf(key.as_raw_bytes(), b"paseto-encryption-key", salt);
    let ak = kdf(key.as_raw_bytes(), b"paseto-auth-key-for-aead", salt);

    let cipher = Cipher::new_from_slices(&ek[..], iv).expect("key and iv lengths are fixed");
    let mac =
        <HmacSha384 as Mac>::new_from_slice(&ak[..]).expect("all sized keys are valid with hmac");
    (cipher, mac)
}

fn kdf(key: &[u8], sep: &'static [u8], salt: &[u8]) -> Zeroizing<[u8; 32]> {
    let mut output = Zeroizing::new([0; 32]);
    hkdf::Hkdf::<sha2::Sha384>::new(Some(salt), key)
        .expand(sep, &mut output[..])
        .expect("32 bytes is a valid length for hkdf-sha384");
    output
}

impl paseto_core::version::SealingVersion<Local> for V1 {
    fn random() -> Result<SymmetricKey, PasetoError> {
        SymmetricKey::random()
    }

    fn unsealing_key(key: &SymmetricKey) -> SymmetricKey {
        key.clone()
    }

    fn nonce() -> Result<Vec<u8>, PasetoError> {
        let mut nonce = [0; NONCE_LEN];
        getrandom::fill(&mut nonce).map_err(|_| PasetoError::CryptoError)?;

        let mut payload = Vec::with_capacity(NONCE_LEN + TAG_LEN + 64);
        payload.extend_from_slice(&nonce);
        Ok(payload)
    }

    fn dangerous_seal_with_nonce(
        key: &SymmetricKey,
        mut payload: Vec<u8>,
        footer: &[u8],
    ) -> Result<Vec<u8>, PasetoError> {
        let (nonce, plaintext) = payload
            .split_first_chunk_mut::<NONCE_LEN>()
            .ok_or(PasetoError::CryptoError)?;

        // the nonce is bound to the message, so a weak random source alone does not repeat it
        let mut n =
            <HmacSha384 as Mac>::new_from_slice(nonce).expect("all sized keys are valid with hmac");
        n.update(plaintext);
        nonce.copy_from_slice(&n.finalize().into_bytes()[..NONCE_LEN]);

        let (mut cipher, mut mac) = keys(key, nonce);
        cipher.apply_keystream(plaintext);
        preauth_local(&mut mac, nonce, plaintext, footer);
        payload.extend_from_slice(&mac.finalize().into_bytes());

        Ok(payload)
    }
}

impl paseto_core::version::UnsealingVersion<Local> for V1 {
    fn unseal<'a>(
        key: &SymmetricKey,
        body: &'a mut [u8],
        footer: &[u8],
    ) -> Result<&'a [u8], PasetoError> {
        if body.len() < NONCE_LEN + TAG_LEN {
            return Err(PasetoError::IncorrectTokenFormat);
        }

        let (ciphertext, tag) = body
            .split_last_chunk_mut::<TAG_LEN>()
            .ok_or(PasetoError::IncorrectTokenFormat)?;
        let (nonce, ciphertext) = ciphertext
            .split_first_chunk_mut::<NONCE_LEN>()
            .ok_or(PasetoError::IncorrectTokenFormat)?;

        let (mut cipher, mut mac) = keys(key, nonce);
        preauth_local(&mut mac, nonce, ciphertext, footer);
        // constant time, and the tag is always exactly 48 bytes here
        mac.verify_slice(tag)
            .map_err(|_| PasetoError::AuthenticationFailed)?;
        cipher.apply_keystream(ciphertext);

        Ok(ciphertext)
    }
}

fn preauth_local(mac: &mut HmacSha384, nonce: &[u8], ciphertext: &[u8], footer: &[u8]) {
    pre_auth_encode(
        [
            &[Local::header::<V1>().as_str().as_bytes()],
            &[nonce],
            &[ciphertext],
            &[footer],
        ],
        PreAuthEncodeDigest(mac),
    );
}
