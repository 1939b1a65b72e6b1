use chacha20poly1305::XChaCha20Poly1305;
use chacha20poly1305::aead::AeadInPlace;
use digest::Mac;
use digest::consts::U24;
use paseto_core::PasetoError;
use paseto_core::key::SymmetricKey;
use paseto_core::pae::pre_auth_encode;
use paseto_core::version::{Local, TokenPurpose};

use super::V2;

const NONCE_LEN: usize = 24;
const TAG_LEN: usize = 16;

fn cipher(key: &SymmetricKey) -> XChaCha20Poly1305 {
    use chacha20poly1305::KeyInit;

    XChaCha20Poly1305::new(key.as_raw_bytes().into())
}

impl paseto_core::version::SealingVersion<Local> for V2 {
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

        let mut n: blake2::Blake2bMac<U24> =
            Mac::new_from_slice(nonce).expect("24 bytes is less than the 64 bytes max");
        n.update(plaintext);
        *nonce = n.finalize().into_bytes().into();

        let nonce: &[u8; NONCE_LEN] = nonce;

        let aad = preauth_local(nonce, footer);
        let tag = cipher(key)
            .encrypt_in_place_detached(nonce.into(), &aad, plaintext)
            .map_err(|_| PasetoError::CryptoError)?;

        payload.extend_from_slice(&tag);

        Ok(payload)
    }
}

impl paseto_core::version::UnsealingVersion<Local> for V2 {
    fn unseal<'a>(
        key: &SymmetricKey,
        body: &'a mut [u8],
        footer: &[u8],
    ) -> Result<&'a [u8], PasetoError> {
        let (ciphertext, tag) = body
            .split_last_chunk_mut::<TAG_LEN>()
            .ok_or(PasetoError::IncorrectTokenFormat)?;
        let (nonce, ciphertext) = ciphertext
            .split_first_chunk_mut::<NONCE_LEN>()
            .ok_or(PasetoError::IncorrectTokenFormat)?;
        let nonce: &[u8; NONCE_LEN] = nonce;
        let tag: &[u8; TAG_LEN] = tag;

        let aad = preauth_local(nonce, footer);
        cipher(key)
            .decrypt_in_place_detached(nonce.into(), &aad, ciphertext, tag.into())
            .map_err(|_| PasetoError::AuthenticationFailed)?;

        Ok(ciphertext)
    }
}

fn preauth_local(nonce: &[u8], footer: &[u8]) -> Vec<u8> {
    let mut v = Vec::new();
    pre_auth_encode(
        [
            &[Local::header::<V2>().as_str().as_bytes()],
            &[nonce],
            &[footer],
        ],
        &mut v,
    );
    v
}
