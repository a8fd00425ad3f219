//! Lowercase hyphenated text for UUIDs.

use ::uuid::Uuid;
use serde::{Deserialize, Deserializer, Serializer, de};

use crate::error::AdapterError;

#[must_use]
pub fn print(id: &Uuid) -> String {
    id.hyphenated().to_string()
}

/// # Errors
/// Returns [`AdapterError::Uuid`] when `s` is not a UUID.
pub fn parse(s: &str) -> Result<Uuid, AdapterError> {
    Uuid::parse_str(s).map_err(|source| AdapterError::Uuid {
        value: s.to_owned(),
        source,
    })
}

#[must_use]
pub fn print_opt(id: Option<&Uuid>) -> Option<String> {
    id.map(print)
}

/// # Errors
/// Same as [`parse`].
pub fn parse_opt(s: Option<&str>) -> Result<Option<Uuid>, AdapterError> {
    s.map(parse).transpose()
}

/// # Errors
/// Propagates serializer errors.
pub fn serialize<S: Serializer>(id: &Uuid, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&print(id))
}

/// # Errors
/// Fails on malformed text.
pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Uuid, D::Error> {
    let text = String::deserialize(d)?;
    parse(&text).map_err(de::Error::custom)
}

pub mod option {
    //! `#[serde(with = "wapitia_adapters::uuid::option")]` for `Option<Uuid>`.

    use ::uuid::Uuid;
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// # Errors
    /// Propagates serializer errors.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(id: &Option<Uuid>, s: S) -> Result<S::Ok, S::Error> {
        match id {
            Some(id) => s.serialize_some(&super::print(id)),
            None => s.serialize_none(),
        }
    }

    /// # Errors
    /// Fails on malformed text.
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Uuid>, D::Error> {
        let text = Option::<String>::deserialize(d)?;
        super::parse_opt(text.as_deref()).map_err(de::Error::custom)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn prints_lowercase_hyphenated() {
        let id = Uuid::from_u128(0x550E_8400_E29B_41D4_A716_4466_5544_0000);
        assert_eq!(print(&id), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn parses_any_case() {
        let id = parse("550E8400-E29B-41D4-A716-446655440000").unwrap();
        assert_eq!(print(&id), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn rejects_malformed() {
        let err = parse("550e8400-e29b").unwrap_err();
        assert!(matches!(err, AdapterError::Uuid { .. }));
    }

    #[test]
    fn none_stays_none() {
        assert_eq!(print_opt(None), None);
        assert_eq!(parse_opt(None).unwrap(), None);
        let id = Uuid::nil();
        assert_eq!(
            print_opt(Some(&id)).as_deref(),
            Some("00000000-0000-0000-0000-000000000000")
        );
    }
}
