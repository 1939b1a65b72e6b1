//! Version tagged keys.

use paseto_core::key::KeyEncoding;
use paseto_core::{PasetoError, Version};

/// A public key for one of the supported versions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PublicKey {
    #[cfg(feature = "v1")]
    V1(paseto_v1::PublicKey),
    #[cfg(feature = "v2")]
    V2(paseto_v2::PublicKey),
}

/// A secret signing key for one of the supported versions.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum SecretKey {
    #[cfg(feature = "v1")]
    V1(paseto_v1::SecretKey),
    #[cfg(feature = "v2")]
    V2(paseto_v2::SecretKey),
}

impl PublicKey {
    /// Decode a public key for the given version.
    ///
    /// v1 keys are RSA-2048 in SPKI or PKCS#1 form, DER or PEM.
    /// v2 keys are the 32 raw bytes of an Ed25519 point.
    pub fn decode(version: Version, bytes: &[u8]) -> Result<Self, PasetoError> {
        match version {
            #[cfg(feature = "v1")]
            Version::V1 => paseto_v1::PublicKey::decode(bytes).map(Self::V1),
            #[cfg(feature = "v2")]
            Version::V2 => paseto_v2::PublicKey::decode(bytes).map(Self::V2),
            #[allow(unreachable_patterns)]
            _ => Err(PasetoError::UnsupportedTokenVersion),
        }
    }

    pub fn version(&self) -> Version {
        match self {
            #[cfg(feature = "v1")]
            Self::V1(_) => Version::V1,
            #[cfg(feature = "v2")]
            Self::V2(_) => Version::V2,
        }
    }

    pub fn encode(&self) -> Box<[u8]> {
        match self {
            #[cfg(feature = "v1")]
            Self::V1(key) => key.encode(),
            #[cfg(feature = "v2")]
            Self::V2(key) => key.encode(),
        }
    }
}

impl SecretKey {
    /// Generate a new signing key for the given version.
    pub fn random(version: Version) -> Result<Self, PasetoError> {
        match version {
            #[cfg(feature = "v1")]
            Version::V1 => paseto_v1::SecretKey::random().map(Self::V1),
            #[cfg(feature = "v2")]
            Version::V2 => paseto_v2::SecretKey::random().map(Self::V2),
            #[allow(unreachable_patterns)]
            _ => Err(PasetoError::UnsupportedTokenVersion),
        }
    }

    /// Decode a secret key for the given version.
    ///
    /// v1 keys are RSA-2048 in PKCS#1 or PKCS#8 form, DER or PEM.
    /// v2 keys are a 32 byte Ed25519 seed, optionally followed by the public key.
    pub fn decode(version: Version, bytes: &[u8]) -> Result<Self, PasetoError> {
        match version {
            #[cfg(feature = "v1")]
            Version::V1 => paseto_v1::SecretKey::decode(bytes).map(Self::V1),
            #[cfg(feature = "v2")]
            Version::V2 => paseto_v2::SecretKey::decode(bytes).map(Self::V2),
            #[allow(unreachable_patterns)]
            _ => Err(PasetoError::UnsupportedTokenVersion),
        }
    }

    pub fn version(&self) -> Version {
        match self {
            #[cfg(feature = "v1")]
            Self::V1(_) => Version::V1,
            #[cfg(feature = "v2")]
            Self::V2(_) => Version::V2,
        }
    }

    /// The public half of this keypair.
    pub fn public_key(&self) -> PublicKey {
        match self {
            #[cfg(feature = "v1")]
            Self::V1(key) => PublicKey::V1(key.public_key()),
            #[cfg(feature = "v2")]
            Self::V2(key) => PublicKey::V2(key.public_key()),
        }
    }
}

#[cfg(feature = "v1")]
impl From<paseto_v1::PublicKey> for PublicKey {
    fn from(key: paseto_v1::PublicKey) -> Self {
        Self::V1(key)
    }
}

#[cfg(feature = "v2")]
impl From<paseto_v2::PublicKey> for PublicKey {
    fn from(key: paseto_v2::PublicKey) -> Self {
        Self::V2(key)
    }
}

#[cfg(feature = "v1")]
impl From<paseto_v1::SecretKey> for SecretKey {
    fn from(key: paseto_v1::SecretKey) -> Self {
        Self::V1(key)
    }
}

#[cfg(feature = "v2")]
impl From<paseto_v2::SecretKey> for SecretKey {
    fn from(key: paseto_v2::SecretKey) -> Self {
        Self::V2(key)
    }
}

/// The public keys to verify `public` tokens with, at most one per version.
///
/// A key is always stored under its own version, so a key for one version is
/// never offered to a token of another.
#[derive(Clone, Debug, Default)]
pub struct PublicKeys {
    #[cfg(feature = "v1")]
    v1: Option<paseto_v1::PublicKey>,
    #[cfg(feature = "v2")]
    v2: Option<paseto_v2::PublicKey>,
}

impl PublicKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, returning the key it replaced for the same version.
    pub fn insert(&mut self, key: impl Into<PublicKey>) -> Option<PublicKey> {
        match key.into() {
            #[cfg(feature = "v1")]
            PublicKey::V1(key) => self.v1.replace(key).map(PublicKey::V1),
            #[cfg(feature = "v2")]
            PublicKey::V2(key) => self.v2.replace(key).map(PublicKey::V2),
        }
    }

    /// Builder style [`PublicKeys::insert`].
    pub fn with(mut self, key: impl Into<PublicKey>) -> Self {
        self.insert(key);
        self
    }

    pub fn remove(&mut self, version: Version) -> Option<PublicKey> {
        match version {
            #[cfg(feature = "v1")]
            Version::V1 => self.v1.take().map(PublicKey::V1),
            #[cfg(feature = "v2")]
            Version::V2 => self.v2.take().map(PublicKey::V2),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    pub fn contains(&self, version: Version) -> bool {
        match version {
            #[cfg(feature = "v1")]
            Version::V1 => self.v1.is_some(),
            #[cfg(feature = "v2")]
            Version::V2 => self.v2.is_some(),
            #[allow(unreachable_patterns)]
            _ => false,
        }
    }

    #[cfg(feature = "v1")]
    pub fn v1(&self) -> Option<&paseto_v1::PublicKey> {
        self.v1.as_ref()
    }

    #[cfg(feature = "v2")]
    pub fn v2(&self) -> Option<&paseto_v2::PublicKey> {
        self.v2.as_ref()
    }
}

impl FromIterator<PublicKey> for PublicKeys {
    fn from_iter<I: IntoIterator<Item = PublicKey>>(iter: I) -> Self {
        let mut keys = Self::new();
        for key in iter {
            keys.insert(key);
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "v2")]
    #[test]
    fn one_key_per_version() {
        let a = SecretKey::random(Version::V2).unwrap().public_key();
        let b = SecretKey::random(Version::V2).unwrap().public_key();

        let mut keys = PublicKeys::new();
        assert!(!keys.contains(Version::V2));
        assert_eq!(keys.insert(a.clone()), None);
        assert_eq!(keys.insert(b.clone()), Some(a));
        assert!(keys.contains(Version::V2));
        assert_eq!(keys.remove(Version::V2), Some(b));
        assert!(!keys.contains(Version::V2));
    }

    #[cfg(all(feature = "v1", feature = "v2"))]
    #[test]
    fn keys_stay_in_their_slot() {
        let v2 = SecretKey::random(Version::V2).unwrap().public_key();
        let keys = PublicKeys::new().with(v2.clone());

        assert!(keys.v1().is_none());
        assert!(keys.v2().is_some());
        assert_eq!(v2.version(), Version::V2);
    }

    #[cfg(feature = "v2")]
    #[test]
    fn decode_by_version() {
        let sk = SecretKey::random(Version::V2).unwrap();
        let pk = sk.public_key();

        let decoded = PublicKey::decode(Version::V2, &pk.encode()).unwrap();
        assert_eq!(decoded, pk);

        assert!(matches!(
            PublicKey::decode(Version::V2, &[1, 2, 3]),
            Err(PasetoError::InvalidKey)
        ));
    }
}
