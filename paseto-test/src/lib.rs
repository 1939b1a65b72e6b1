//! Shared helpers for the JSON test vector harness.

use serde::Deserialize;
use serde::de::DeserializeOwned;

pub fn read_test<Test: DeserializeOwned>(v: &str) -> TestFile<Test> {
    let path = format!("tests/vectors/{v}");
    let file = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&file).unwrap()
}

#[derive(Deserialize)]
pub struct TestFile<T> {
    pub name: String,
    pub tests: Vec<Test<T>>,
}

#[derive(Deserialize)]
pub struct Test<T> {
    pub name: String,
    #[serde(flatten)]
    pub test_data: T,
}

/// Bytes stored as a hex string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hex(pub Vec<u8>);

impl<'a> Deserialize<'a> for Hex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let s = String::deserialize(deserializer)?;
        hex::decode(s).map(Hex).map_err(serde::de::Error::custom)
    }
}

/// Only deserializes from the boolean literal `B`.
///
/// Used to pick the right variant of an untagged enum from the `expect-fail` field.
#[derive(Debug)]
pub struct Bool<const B: bool>;

impl<'a, const B: bool> Deserialize<'a> for Bool<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        struct BoolVisitor<const B: bool>;

        impl<'a, const B: bool> serde::de::Visitor<'a> for BoolVisitor<B> {
            type Value = Bool<B>;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "{B}")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                (v == B)
                    .then_some(Bool)
                    .ok_or_else(|| E::custom(format!("expected {B}, got {v}")))
            }
        }

        deserializer.deserialize_bool(BoolVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug)]
    #[serde(untagged)]
    enum Outcome {
        Pass { _ok: Bool<true> },
        Fail { _ok: Bool<false> },
    }

    #[test]
    fn bool_selects_variant() {
        let pass: Outcome = serde_json::from_str(r#"{"_ok":true}"#).unwrap();
        assert!(matches!(pass, Outcome::Pass { .. }));
        let fail: Outcome = serde_json::from_str(r#"{"_ok":false}"#).unwrap();
        assert!(matches!(fail, Outcome::Fail { .. }));
    }

    #[test]
    fn hex_bytes() {
        let h: Hex = serde_json::from_str(r#""00ff""#).unwrap();
        assert_eq!(h, Hex(vec![0x00, 0xff]));
        assert!(serde_json::from_str::<Hex>(r#""0""#).is_err());
    }
}
