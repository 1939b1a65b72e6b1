//! Constant-time base64url encoding, unpadded.
//!
//! <https://github.com/paseto-standard/paseto-spec/blob/master/docs/01-Protocol-Versions/Common.md#base64-encoding>.

use core::fmt;

use base64ct::{Base64UrlUnpadded, Encoding};

use crate::PasetoError;

// 192 input bytes encode to exactly 256 characters, no partial blocks between chunks.
const CHUNK: usize = 192;

pub(crate) fn write_to_fmt(bytes: &[u8], f: &mut impl fmt::Write) -> fmt::Result {
    let mut buf = [0u8; CHUNK / 3 * 4];
    for chunk in bytes.chunks(CHUNK) {
        let s = Base64UrlUnpadded::encode(chunk, &mut buf).map_err(|_| fmt::Error)?;
        f.write_str(s)?;
    }
    Ok(())
}

/// Rejects padding, characters outside the url-safe alphabet, and
/// non-canonical trailing bits.
pub(crate) fn decode_vec(src: &str) -> Result<Vec<u8>, PasetoError> {
    Base64UrlUnpadded::decode_vec(src).map_err(|_| PasetoError::IncorrectTokenFormat)
}
