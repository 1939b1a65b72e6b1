#![cfg(all(feature = "v1", feature = "v2"))]

use paseto::{
    Header, PasetoError, PublicKey, PublicKeys, Purpose, SecretKey, SymmetricKey, Version,
};
use paseto_core::untrusted::{RawToken, encode_token};

const SYMMETRIC_KEY: &str = "707172737475767778797a7b7c7d7e7f808182838485868788898a8b8c8d8e8f";
const V2_PUBLIC_KEY: &str = "1eb9dbbbbc047c03fd70604e0071f0987e16b28b757225c11f00415d0e20b1a2";

const V1_PUBLIC_PEM: &str = include_str!("fixtures/v1_public.pem");
const V1_SECRET_PEM: &str = include_str!("fixtures/v1_secret.pem");

const V1_LOCAL: &str = "v1.local.rElw-WywOuwAqKC9Yao3YokSp7vx0YiUB9hLTnsVOYYTojmVaYumJSQt8aggtCaFKWyaodw5k-CUWhYKATopiabAl4OAmTxHCfm2E4NSPvrmMcmi8n-JcZ93HpcxC6rx_ps22vutv7iP7wf8QcSD1Mwx.Q3VvbiBBbHBpbnVz";
const V1_PUBLIC: &str = "v1.public.eyJkYXRhIjoidGhpcyBpcyBhIHNpZ25lZCBtZXNzYWdlIiwiZXhwIjoiMjAzOS0wMS0wMVQwMDowMDowMCswMDowMCJ9A2Mph8ewTIdDGNr7k7JIKGcmSVk9slv_0w6MoO5kfhdIsFTxHG_Ux2cxXA5Vc8X2VHpjQXZJ5jTQKXr26sTBCZxKSIw7B_FM4T-AOADYP_MHEu3ZkjmXwOS1G2kixoen5lR3ooUL27gpyiveiWq910G4_EnRZ_HFQA8uJsWCQGBG9rodO_y97TT_hscZ9E_9VvXEgWLZ_s9RQe3y_E9yW3_jMU-W-qwETBXA2lF5x0O4U4euOY9P7LSq-5nofn92gHDe0PbLGy9p2dnjDaFQBhP0cytqY7OmAH9JSM1KzPGTzFQ-hyRb5lXkBCoJepTiaZZK5_Hp8j-FxB_AM6dkfw.eyJraWQiOiJ6VmhNaVBCUDlmUmYyc25FY1Q3Z0ZUaW9lQTlDT2NOeTlEZmdMMVc2MGhhTiJ9";
const V2_LOCAL: &str = "v2.local.FGVEQLywggpvH0AzKtLXz0QRmGYuC6yvl05z9GIX0cnol6UK94cfV77AXnShlUcNgpDR12FrQiurS8jxBRmvoIKmeMWC5wY9Y6w.Q3VvbiBBbHBpbnVz";
const V2_PUBLIC: &str = "v2.public.RnJhbmsgRGVuaXMgcm9ja3O7MPuu90WKNyvBUUhAGFmi4PiPOr2bN2ytUSU-QWlj8eNefki2MubssfN1b8figynnY0WusRPwIQ-o0HSZOS0F.Q3VvbiBBbHBpbnVz";

const MESSAGE: &str = r#"{"data":"this is a signed message","exp":"2039-01-01T00:00:00+00:00"}"#;
const KEY_ID: &str = r#"{"kid":"zVhMiPBP9fRf2snEcT7gFTioeA9COcNy9DfgL1W60haN"}"#;

fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn symmetric_key() -> SymmetricKey {
    let bytes: [u8; 32] = hex::decode(SYMMETRIC_KEY).unwrap().try_into().unwrap();
    SymmetricKey::from_raw_bytes(bytes)
}

fn public_keys() -> PublicKeys {
    let v1 = PublicKey::decode(Version::V1, V1_PUBLIC_PEM.as_bytes()).unwrap();
    let v2 = PublicKey::decode(Version::V2, &hex::decode(V2_PUBLIC_KEY).unwrap()).unwrap();
    [v1, v2].into_iter().collect()
}

/// Flip one bit of the decoded body and re-encode the token.
fn tamper(token: &str, index: usize) -> String {
    let mut raw: RawToken = token.parse().unwrap();
    raw.body[index] ^= 1;
    raw.to_string()
}

fn replace_header(token: &str, header: &str) -> String {
    let (_, rest) = token.split_at(token.match_indices('.').nth(1).unwrap().0 + 1);
    format!("{header}{rest}")
}

#[test]
fn known_tokens() {
    init();

    let key = symmetric_key();
    let keys = public_keys();

    let cases = [
        (
            V1_LOCAL,
            Version::V1,
            Purpose::Local,
            "Love is stronger than hate or fear",
            "Cuon Alpinus",
        ),
        (V1_PUBLIC, Version::V1, Purpose::Public, MESSAGE, KEY_ID),
        (
            V2_LOCAL,
            Version::V2,
            Purpose::Local,
            "Love is stronger than hate or fear",
            "Cuon Alpinus",
        ),
        (
            V2_PUBLIC,
            Version::V2,
            Purpose::Public,
            "Frank Denis rocks",
            "Cuon Alpinus",
        ),
    ];

    for (token, version, purpose, payload, footer) in cases {
        let decoded = paseto::parse(token, Some(&key), &keys).unwrap();
        assert_eq!(decoded.version, version, "{token}");
        assert_eq!(decoded.purpose, purpose, "{token}");
        assert_eq!(decoded.payload, payload.as_bytes(), "{token}");
        assert_eq!(decoded.footer, footer.as_bytes(), "{token}");

        assert_eq!(paseto::get_token_info(token).unwrap(), (version, purpose));
        assert_eq!(paseto::parse_footer(token).unwrap(), footer.as_bytes());
    }
}

#[test]
fn parse_errors_without_keys() {
    init();

    let cases = [
        ("v1.publiceqreqqereqrqerq", PasetoError::IncorrectTokenFormat),
        (
            "v0.local.rElw-WywOuwAqKC9Yao3YokSp7vx",
            PasetoError::UnsupportedTokenVersion,
        ),
        ("v1.private.rElw", PasetoError::UnsupportedTokenType),
        ("v1.public.rElw", PasetoError::PublicKeyNotFound),
        ("v2.public.rElw", PasetoError::PublicKeyNotFound),
        ("v1.local.rElw", PasetoError::InvalidKey),
        ("v1.local.rElw.", PasetoError::InvalidKey),
        ("v1.local.rElw.Zm9v.YmFy", PasetoError::IncorrectTokenFormat),
        ("v1.local.rElw=", PasetoError::IncorrectTokenFormat),
        ("v1.local.rElw+", PasetoError::IncorrectTokenFormat),
        ("", PasetoError::IncorrectTokenFormat),
    ];

    for (token, expected) in cases {
        let err = paseto::parse(token, None, &PublicKeys::new()).unwrap_err();
        assert_eq!(
            std::mem::discriminant(&err),
            std::mem::discriminant(&expected),
            "{token}: {err}"
        );
    }
}

#[test]
fn parse_footer() {
    let unfootered = "v1.local.rElw-WywOuwAqKC9Yao3YokSp7vx0YiUB9hLTnsVOYYTojmVaYumJSQt8aggtCaFKWyaodw5k-CUWhYKATopiabAl4OAmTxHCfm2E4NSPvrmMcmi8n-JcZ93HpcxC6rx_ps22vutv7iP7wf8QcSD1Mwx";
    assert_eq!(paseto::parse_footer(V1_LOCAL).unwrap(), b"Cuon Alpinus");
    assert_eq!(paseto::parse_footer(unfootered).unwrap(), b"");
    assert!(matches!(
        paseto::parse_footer("v1.rElw-WywOuwAqK"),
        Err(PasetoError::IncorrectTokenFormat)
    ));
    assert!(matches!(
        paseto::parse_footer("v1.local.rElw.not base64"),
        Err(PasetoError::IncorrectTokenFormat)
    ));

    // the body is never decoded
    assert_eq!(paseto::parse_footer("v2.local.!!!.Zm9v").unwrap(), b"foo");
    // a trailing '.' reads as no footer
    assert_eq!(paseto::parse_footer("v2.local.rElw.").unwrap(), b"");
}

#[test]
fn token_info() {
    let cases = [
        (
            "v2.local.driRNhM20GQPvlWfJCepzh6HdijAq-yNUtKpdy5KXjKfpSKrOlqQvQ",
            Ok((Version::V2, Purpose::Local)),
        ),
        ("v1.public.rElw.Q3VvbiBBbHBpbnVh", Ok((Version::V1, Purpose::Public))),
        ("v0.public.rElw", Err(PasetoError::UnsupportedTokenVersion)),
        ("v1.private.rElw", Err(PasetoError::UnsupportedTokenType)),
        ("v1.rElw", Err(PasetoError::IncorrectTokenFormat)),
    ];

    for (token, expected) in cases {
        match (paseto::get_token_info(token), expected) {
            (Ok(info), Ok(expected)) => assert_eq!(info, expected, "{token}"),
            (Err(err), Err(expected)) => assert_eq!(
                std::mem::discriminant(&err),
                std::mem::discriminant(&expected),
                "{token}"
            ),
            (got, expected) => panic!("{token}: got {got:?}, expected {expected:?}"),
        }
    }
}

#[test]
fn round_trips() {
    init();

    let key = SymmetricKey::random().unwrap();
    let v1 = SecretKey::decode(Version::V1, V1_SECRET_PEM.as_bytes()).unwrap();
    let v2 = SecretKey::random(Version::V2).unwrap();
    let keys: PublicKeys = [v1.public_key(), v2.public_key()].into_iter().collect();

    for footer in [&b""[..], KEY_ID.as_bytes()] {
        let tokens = [
            paseto::encrypt(Version::V1, &key, MESSAGE.as_bytes(), footer).unwrap(),
            paseto::encrypt(Version::V2, &key, MESSAGE.as_bytes(), footer).unwrap(),
            paseto::sign(&v1, MESSAGE.as_bytes(), footer).unwrap(),
            paseto::sign(&v2, MESSAGE.as_bytes(), footer).unwrap(),
        ];

        for token in tokens {
            let decoded = paseto::parse(&token, Some(&key), &keys).unwrap();
            assert_eq!(decoded.payload, MESSAGE.as_bytes());
            assert_eq!(decoded.footer, footer);
            // empty footers are omitted entirely
            assert_eq!(token.split('.').count(), if footer.is_empty() { 3 } else { 4 });
        }
    }
}

#[test]
fn local_tokens_are_randomized() {
    let key = symmetric_key();
    let a = paseto::encrypt(Version::V2, &key, b"payload", b"").unwrap();
    let b = paseto::encrypt(Version::V2, &key, b"payload", b"").unwrap();
    assert_ne!(a, b);
}

#[test]
fn tampered_bodies() {
    init();

    let key = symmetric_key();
    let keys = public_keys();

    for (token, expected) in [
        (V1_LOCAL, PasetoError::AuthenticationFailed),
        (V2_LOCAL, PasetoError::AuthenticationFailed),
        (V1_PUBLIC, PasetoError::InvalidSignature),
        (V2_PUBLIC, PasetoError::InvalidSignature),
    ] {
        for index in [0, 10, 40] {
            let tampered = tamper(token, index);
            let err = paseto::parse(&tampered, Some(&key), &keys).unwrap_err();
            assert_eq!(
                std::mem::discriminant(&err),
                std::mem::discriminant(&expected),
                "{tampered}"
            );
        }
    }
}

#[test]
fn header_swaps() {
    init();

    let key = symmetric_key();
    let keys = public_keys();

    // another scheme never accepts the body
    let cases = [
        (V1_LOCAL, "v2.local.", PasetoError::AuthenticationFailed),
        (V2_PUBLIC, "v1.local.", PasetoError::AuthenticationFailed),
        (V1_PUBLIC, "v1.local.", PasetoError::AuthenticationFailed),
        (V2_PUBLIC, "v2.local.", PasetoError::AuthenticationFailed),
        (V2_LOCAL, "v2.public.", PasetoError::InvalidSignature),
        (V1_PUBLIC, "v2.public.", PasetoError::InvalidSignature),
    ];

    for (token, header, expected) in cases {
        let swapped = replace_header(token, header);
        let err = paseto::parse(&swapped, Some(&key), &keys).unwrap_err();
        assert_eq!(
            std::mem::discriminant(&err),
            std::mem::discriminant(&expected),
            "{swapped}: {err}"
        );
    }
}

#[test]
fn short_bodies() {
    let key = symmetric_key();
    let keys = public_keys();

    // one byte under the minimum for each scheme
    for (version, purpose, len) in [
        (Version::V1, Purpose::Local, 79),
        (Version::V2, Purpose::Local, 39),
        (Version::V1, Purpose::Public, 255),
        (Version::V2, Purpose::Public, 63),
    ] {
        let token = encode_token(Header::new(version, purpose), &vec![0; len], b"");
        assert!(
            matches!(
                paseto::parse(&token, Some(&key), &keys),
                Err(PasetoError::IncorrectTokenFormat)
            ),
            "{token}"
        );
    }
}

#[test]
fn footer_is_authenticated() {
    let key = symmetric_key();
    let keys = public_keys();

    for token in [V1_LOCAL, V1_PUBLIC, V2_LOCAL, V2_PUBLIC] {
        let (rest, _) = token.rsplit_once('.').unwrap();
        // "Cuon Alpinux"
        let altered = format!("{rest}.Q3VvbiBBbHBpbnV4");
        assert_eq!(paseto::parse_footer(&altered).unwrap(), b"Cuon Alpinux");
        assert!(paseto::parse(&altered, Some(&key), &keys).is_err());

        // and stripping the footer fails too
        assert!(paseto::parse(rest, Some(&key), &keys).is_err());
    }
}

#[test]
fn keys_are_bound_to_their_version() {
    let v2_only: PublicKeys = [PublicKey::decode(
        Version::V2,
        &hex::decode(V2_PUBLIC_KEY).unwrap(),
    )
    .unwrap()]
    .into_iter()
    .collect();

    assert!(matches!(
        paseto::parse(V1_PUBLIC, None, &v2_only),
        Err(PasetoError::PublicKeyNotFound)
    ));
    assert!(paseto::parse(V2_PUBLIC, None, &v2_only).is_ok());

    // an ed25519 key is not a valid v1 key
    assert!(matches!(
        PublicKey::decode(Version::V1, &hex::decode(V2_PUBLIC_KEY).unwrap()),
        Err(PasetoError::InvalidKey)
    ));
}

#[test]
fn wrong_symmetric_key() {
    let other = SymmetricKey::from_raw_bytes([0; 32]);
    for token in [V1_LOCAL, V2_LOCAL] {
        assert!(matches!(
            paseto::parse(token, Some(&other), &PublicKeys::new()),
            Err(PasetoError::AuthenticationFailed)
        ));
    }
}

#[cfg(feature = "json")]
#[test]
fn json_payload() {
    #[derive(serde::Deserialize)]
    struct Message {
        data: String,
    }

    let decoded = paseto::parse(V1_PUBLIC, None, &public_keys()).unwrap();
    let message: Message = decoded.json_payload().unwrap();
    assert_eq!(message.data, "this is a signed message");
}
