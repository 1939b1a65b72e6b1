//! Token grammar: `version.purpose.base64url(body)[.base64url(footer)]`.
//!
//! Everything here is structural. Nothing in this module touches key material,
//! and nothing here should be trusted until a version has unsealed the body.

use core::fmt;
use core::str::FromStr;

use crate::PasetoError;
use crate::header::Header;

/// A token split into its segments, with only the header interpreted.
///
/// This is the cheapest way to route a token to the correct key before doing
/// any real work. Body and footer stay base64 encoded.
#[derive(Clone, Copy, Debug)]
pub struct UntrustedToken<'a> {
    header: Header,
    body: &'a str,
    footer: Option<&'a str>,
}

impl<'a> UntrustedToken<'a> {
    /// Split the token and validate the header literals.
    ///
    /// The segment count is checked before the header, so `"v1.private"` is an
    /// [`IncorrectTokenFormat`](PasetoError::IncorrectTokenFormat), not an
    /// unsupported type.
    pub fn parse(token: &'a str) -> Result<Self, PasetoError> {
        let mut segments = token.split('.');
        let (Some(version), Some(purpose), Some(body)) =
            (segments.next(), segments.next(), segments.next())
        else {
            return Err(PasetoError::IncorrectTokenFormat);
        };
        let footer = segments.next();
        if segments.next().is_some() {
            return Err(PasetoError::IncorrectTokenFormat);
        }

        let header = Header {
            version: version.parse()?,
            purpose: purpose.parse()?,
        };

        Ok(Self {
            header,
            body,
            footer,
        })
    }

    pub fn header(&self) -> Header {
        self.header
    }

    /// Decode the footer, without looking at the body.
    ///
    /// Returns an empty footer if the token has none.
    pub fn footer(&self) -> Result<Vec<u8>, PasetoError> {
        match self.footer {
            Some(footer) => crate::base64::decode_vec(footer),
            None => Ok(Vec::new()),
        }
    }

    /// Decode the body and footer.
    pub fn decode(&self) -> Result<RawToken, PasetoError> {
        let body = crate::base64::decode_vec(self.body)?;
        let footer = self.footer()?;
        Ok(RawToken {
            header: self.header,
            body,
            footer,
        })
    }
}

/// A structurally valid token whose body has been base64 decoded, but not
/// yet decrypted or verified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub header: Header,
    pub body: Vec<u8>,
    pub footer: Vec<u8>,
}

impl FromStr for RawToken {
    type Err = PasetoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UntrustedToken::parse(s)?.decode()
    }
}

impl fmt::Display for RawToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_token(f, self.header, &self.body, &self.footer)
    }
}

/// Write the token string. The footer segment is omitted when empty.
pub fn write_token(
    f: &mut impl fmt::Write,
    header: Header,
    body: &[u8],
    footer: &[u8],
) -> fmt::Result {
    f.write_str(header.as_str())?;
    crate::base64::write_to_fmt(body, f)?;

    if !footer.is_empty() {
        f.write_str(".")?;
        crate::base64::write_to_fmt(footer, f)?;
    }

    Ok(())
}

/// Build the token string from a sealed body.
pub fn encode_token(header: Header, body: &[u8], footer: &[u8]) -> String {
    let len = header.as_str().len() + (body.len() + footer.len()).div_ceil(3) * 4 + 1;
    let mut s = String::with_capacity(len);
    // writing to a String cannot fail
    let _ = write_token(&mut s, header, body, footer);
    s
}
