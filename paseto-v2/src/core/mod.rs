mod local;
mod public;

use core::fmt;

use paseto_core::Version;
use paseto_core::version::ProtocolVersion;

/// PASETO v2: XChaCha20-Poly1305 for `local`, Ed25519 for `public`.
pub struct V2;

/// Ed25519 public key, used to verify `v2.public` tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(ed25519_dalek::VerifyingKey);

/// Ed25519 signing key, used to sign `v2.public` tokens.
#[derive(Clone)]
pub struct SecretKey(ed25519_dalek::SigningKey);

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

impl ProtocolVersion for V2 {
    const VERSION: Version = Version::V2;

    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
}
