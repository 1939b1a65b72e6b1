mod local;
mod public;

use core::fmt;

use paseto_core::Version;
use paseto_core::version::ProtocolVersion;

/// PASETO v1: AES-256-CTR + HMAC-SHA384 for `local`, RSA-PSS-SHA384 for `public`.
pub struct V1;

/// RSA-2048 public key, used to verify `v1.public` tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(rsa::RsaPublicKey);

/// RSA-2048 private key, used to sign `v1.public` tokens.
#[derive(Clone)]
pub struct SecretKey(rsa::RsaPrivateKey);

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

impl ProtocolVersion for V1 {
    const VERSION: Version = Version::V1;

    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
}

struct PreAuthEncodeDigest<'a, M: digest::Update>(pub &'a mut M);
impl<M: digest::Update> paseto_core::pae::WriteBytes for PreAuthEncodeDigest<'_, M> {
    fn write(&mut self, slice: &[u8]) {
        self.0.update(slice);
    }
}
