//! The `version.purpose.` prefix of every token.

use core::fmt;
use core::str::FromStr;

use crate::PasetoError;

/// PASETO protocol generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Version {
    /// `v1`: AES-256-CTR + HMAC-SHA384, RSA-PSS-SHA384
    V1,
    /// `v2`: XChaCha20-Poly1305, Ed25519
    V2,
}

impl Version {
    pub const fn as_str(self) -> &'static str {
        match self {
            Version::V1 => "v1",
            Version::V2 => "v2",
        }
    }
}

impl FromStr for Version {
    type Err = PasetoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(Version::V1),
            "v2" => Ok(Version::V2),
            _ => Err(PasetoError::UnsupportedTokenVersion),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a token is for.
///
/// * `local` - encrypted tokens. payload is not readable without key
/// * `public` - signed tokens. payload included in plaintext
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Purpose {
    Local,
    Public,
}

impl Purpose {
    pub const fn as_str(self) -> &'static str {
        match self {
            Purpose::Local => "local",
            Purpose::Public => "public",
        }
    }
}

impl FromStr for Purpose {
    type Err = PasetoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Purpose::Local),
            "public" => Ok(Purpose::Public),
            _ => Err(PasetoError::UnsupportedTokenType),
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The version and purpose of a token.
///
/// The header is bound into the pre-auth encoding of every token, so a body
/// produced under one header will never authenticate under another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Header {
    pub version: Version,
    pub purpose: Purpose,
}

impl Header {
    pub const fn new(version: Version, purpose: Purpose) -> Self {
        Self { version, purpose }
    }

    /// "v1.local." or "v1.public." or "v2.local." or "v2.public."
    pub const fn as_str(self) -> &'static str {
        match (self.version, self.purpose) {
            (Version::V1, Purpose::Local) => "v1.local.",
            (Version::V1, Purpose::Public) => "v1.public.",
            (Version::V2, Purpose::Local) => "v2.local.",
            (Version::V2, Purpose::Public) => "v2.public.",
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
