//! Pre-auth encoding
//!
//! This is a low level detail used to build PASETO version implementations.
//! <https://github.com/paseto-standard/paseto-spec/blob/master/docs/01-Protocol-Versions/Common.md#authentication-padding>

/// A sink for pre-auth encoded bytes.
///
/// Implemented for `Vec<u8>`; versions wrap their digests and MACs in it to
/// stream the encoding without an intermediate buffer.
pub trait WriteBytes {
    fn write(&mut self, slice: &[u8]);
}

impl WriteBytes for Vec<u8> {
    fn write(&mut self, slice: &[u8]) {
        self.extend_from_slice(slice);
    }
}

impl<W: WriteBytes + ?Sized> WriteBytes for &mut W {
    fn write(&mut self, slice: &[u8]) {
        W::write(self, slice);
    }
}

/// Encode the pieces as `LE64(count) || LE64(len(p0)) || p0 || ...`.
///
/// Each piece may itself be split into multiple slices, which are concatenated
/// and length-prefixed as one.
pub fn pre_auth_encode<const N: usize>(pieces: [&[&[u8]]; N], mut out: impl WriteBytes) {
    let len = N as u64;
    out.write(&len.to_le_bytes());
    for piece in pieces {
        let len: u64 = piece.iter().map(|x| x.len() as u64).sum();
        out.write(&len.to_le_bytes());
        for x in piece {
            out.write(x);
        }
    }
}
