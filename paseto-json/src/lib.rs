//! JSON payload and footer encodings for PASETO tokens.
//!
//! ```
//! use paseto_json::Json;
//! use paseto_v2::{DecryptedToken, EncryptedToken, LocalKey};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Claims {
//!     sub: String,
//! }
//!
//! #[derive(Serialize, Deserialize)]
//! struct KeyId {
//!     kid: String,
//! }
//!
//! let key = LocalKey::random().unwrap();
//! let token = DecryptedToken::new(Json(Claims { sub: "conrad".to_string() }))
//!     .with_footer(Json(KeyId { kid: "2024-01".to_string() }))
//!     .encrypt(&key)
//!     .unwrap()
//!     .to_string();
//!
//! let token: EncryptedToken<Json<Claims>, Json<KeyId>> = token.parse().unwrap();
//! assert_eq!(token.unverified_footer().0.kid, "2024-01");
//!
//! let token = token.decrypt(&key).unwrap();
//! assert_eq!(token.message.0.sub, "conrad");
//! ```
#![forbid(unsafe_code)]

use std::error::Error;
use std::io;

use paseto_core::encodings::{Footer, Payload, WriteBytes};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// `Json` is a type wrapper to implement [`Payload`] and [`Footer`] for all types that implement
/// [`serde::Serialize`] and [`serde::Deserialize`]
///
/// When using a JSON footer, you should be aware of the risks of parsing user provided JSON.
/// The footer is decoded before the token is authenticated.
///
/// Currently, this uses [`serde_json`] internally, which by default offers a stack-overflow protection limit on parsing JSON.
/// You should also parse into a known struct layout, and avoid arbitrary key-value mappings.
///
/// No claims are validated. Checking `exp` and friends is up to the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Json<T>(pub T);

struct Writer<W: WriteBytes>(W);
impl<W: WriteBytes> io::Write for Writer<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: Serialize + DeserializeOwned> Footer for Json<T> {
    fn encode(&self, writer: impl WriteBytes) -> Result<(), Box<dyn Error + Send + Sync>> {
        serde_json::to_writer(Writer(writer), &self.0).map_err(|err| Box::new(err) as _)
    }

    fn decode(footer: &[u8]) -> Result<Self, Box<dyn Error + Send + Sync>> {
        match footer {
            [] => Err("missing footer".into()),
            x => serde_json::from_slice(x).map(Self).map_err(|e| e.into()),
        }
    }
}

impl<M: Serialize + DeserializeOwned> Payload for Json<M> {
    fn encode(self, writer: impl WriteBytes) -> Result<(), Box<dyn Error + Send + Sync>> {
        serde_json::to_writer(Writer(writer), &self.0).map_err(|err| Box::new(err) as _)
    }

    fn decode(payload: &[u8]) -> Result<Self, Box<dyn Error + Send + Sync>> {
        serde_json::from_slice(payload)
            .map_err(From::from)
            .map(Self)
    }
}
