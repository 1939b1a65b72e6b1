//! PASETO Message encodings.

use core::fmt;
use std::error::Error;
use std::marker::PhantomData;

pub use crate::pae::WriteBytes;
use crate::tokens::SealedToken;
use crate::untrusted::{RawToken, write_token};
use crate::version::{ProtocolVersion, TokenPurpose};
use crate::PasetoError;

/// A PASETO payload object.
///
/// The core only deals in bytes. `Vec<u8>` passes the payload through untouched.
pub trait Payload: Sized {
    /// Encode the message
    fn encode(self, writer: impl WriteBytes) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Decode the message
    fn decode(payload: &[u8]) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Encoding scheme for PASETO footers.
///
/// Footers are allowed to be any encoding, but JSON is the standard.
///
/// Footers are also optional, so the `()` empty type is considered as a missing footer.
pub trait Footer: Sized {
    /// Encode the footer to bytes
    fn encode(&self, writer: impl WriteBytes) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Decode the footer from bytes
    fn decode(footer: &[u8]) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

impl Payload for Vec<u8> {
    fn encode(self, mut writer: impl WriteBytes) -> Result<(), Box<dyn Error + Send + Sync>> {
        writer.write(&self);
        Ok(())
    }

    fn decode(payload: &[u8]) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(payload.to_owned())
    }
}

impl Footer for Vec<u8> {
    fn encode(&self, mut writer: impl WriteBytes) -> Result<(), Box<dyn Error + Send + Sync>> {
        writer.write(self);
        Ok(())
    }

    fn decode(footer: &[u8]) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(footer.to_owned())
    }
}

impl Footer for () {
    fn encode(&self, _: impl WriteBytes) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn decode(footer: &[u8]) -> Result<Self, Box<dyn Error + Send + Sync>> {
        match footer {
            [] => Ok(()),
            x => Err(format!("unexpected footer {x:?}").into()),
        }
    }
}

impl<V: ProtocolVersion, P: TokenPurpose, M, F> fmt::Display for SealedToken<V, P, M, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_token(f, P::header::<V>(), &self.body, &self.encoded_footer)
    }
}

impl<V: ProtocolVersion, P: TokenPurpose, M, F: Footer> std::str::FromStr
    for SealedToken<V, P, M, F>
{
    type Err = PasetoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let RawToken {
            header,
            body,
            footer: encoded_footer,
        } = s.parse()?;

        if header != P::header::<V>() {
            return Err(PasetoError::IncorrectTokenFormat);
        }

        let footer = F::decode(&encoded_footer).map_err(PasetoError::PayloadError)?;

        Ok(Self {
            body,
            encoded_footer,
            footer,
            _version: PhantomData,
            _purpose: PhantomData,
            _message: PhantomData,
        })
    }
}
