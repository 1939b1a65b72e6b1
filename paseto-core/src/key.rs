//! Core traits and types for PASETO keys.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::PasetoError;

/// Defines a PASETO key encoding and decoding
pub trait KeyEncoding: Sized {
    /// Encode the key into bytes.
    fn encode(&self) -> Box<[u8]>;
    /// Decode the key from bytes.
    fn decode(bytes: &[u8]) -> Result<Self, PasetoError>;
}

/// A 256-bit key used to encrypt and decrypt `local` tokens.
///
/// Both v1 and v2 use 32 byte keys. The key bytes are wiped when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey([u8; 32]);

impl SymmetricKey {
    pub const LEN: usize = 32;

    /// Generate a random local key
    pub fn random() -> Result<Self, PasetoError> {
        let mut bytes = Zeroizing::new([0; 32]);
        getrandom::fill(&mut bytes[..]).map_err(|_| PasetoError::CryptoError)?;
        Ok(Self(*bytes))
    }

    pub fn from_raw_bytes(b: [u8; 32]) -> Self {
        Self(b)
    }

    pub fn as_raw_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl KeyEncoding for SymmetricKey {
    fn encode(&self) -> Box<[u8]> {
        self.0.to_vec().into_boxed_slice()
    }

    fn decode(bytes: &[u8]) -> Result<Self, PasetoError> {
        bytes
            .try_into()
            .map(SymmetricKey)
            .map_err(|_| PasetoError::InvalidKey)
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey(..)")
    }
}
