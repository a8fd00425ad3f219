//! `xs:dateTime` text for UTC instants.
//!
//! Printed in ISO instant form: always UTC with a `Z` suffix, fractional
//! seconds only when non-zero (3, 6 or 9 digits). Years outside
//! `0000..=9999` carry a sign and as many digits as they need.

use chrono::{DateTime, NaiveDateTime, ParseResult, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};

use crate::error::AdapterError;

#[must_use]
pub fn print(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

const EXPANDED_LOCAL: &str = "%Y-%m-%dT%H:%M:%S%.f";
const EXPANDED_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Parse RFC 3339 text, normalizing any offset to UTC. A signed expanded
/// year such as `+10000` or `-0001` is accepted as [`print`] writes it.
///
/// # Errors
/// Returns [`AdapterError::Instant`] when `s` is not RFC 3339.
pub fn parse(s: &str) -> Result<DateTime<Utc>, AdapterError> {
    parse_text(s).map_err(|source| AdapterError::Instant {
        value: s.to_owned(),
        source,
    })
}

fn parse_text(s: &str) -> ParseResult<DateTime<Utc>> {
    if !s.starts_with(['+', '-']) {
        return DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc));
    }
    match s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        Some(local) => NaiveDateTime::parse_from_str(local, EXPANDED_LOCAL).map(|t| t.and_utc()),
        None => DateTime::parse_from_str(s, EXPANDED_OFFSET).map(|dt| dt.with_timezone(&Utc)),
    }
}

#[must_use]
pub fn print_opt(instant: Option<&DateTime<Utc>>) -> Option<String> {
    instant.map(print)
}

/// # Errors
/// Same as [`parse`].
pub fn parse_opt(s: Option<&str>) -> Result<Option<DateTime<Utc>>, AdapterError> {
    s.map(parse).transpose()
}

/// Serialize as `xs:dateTime` text.
///
/// # Errors
/// Propagates serializer errors.
pub fn serialize<S: Serializer>(instant: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&print(instant))
}

/// Deserialize from RFC 3339 text.
///
/// # Errors
/// Fails on malformed text.
pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
    let text = String::deserialize(d)?;
    parse(&text).map_err(de::Error::custom)
}

pub mod option {
    //! `#[serde(with = "wapitia_adapters::instant::option")]` for
    //! `Option<DateTime<Utc>>`.

    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// # Errors
    /// Propagates serializer errors.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        instant: &Option<DateTime<Utc>>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        match instant {
            Some(instant) => s.serialize_some(&super::print(instant)),
            None => s.serialize_none(),
        }
    }

    /// # Errors
    /// Fails on malformed text.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let text = Option::<String>::deserialize(d)?;
        super::parse_opt(text.as_deref()).map_err(de::Error::custom)
    }
}
