#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wapitia_adapters::{LOCALE_LENGTH, Locale};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Sighting {
    #[serde(with = "wapitia_adapters::uuid")]
    id: Uuid,
    #[serde(with = "wapitia_adapters::instant")]
    seen_at: DateTime<Utc>,
    #[serde(with = "wapitia_adapters::instant::option", default)]
    confirmed_at: Option<DateTime<Utc>>,
    #[serde(with = "wapitia_adapters::uuid::option", default)]
    observer: Option<Uuid>,
    #[serde(with = "wapitia_adapters::locale")]
    locale: Locale,
    #[serde(with = "wapitia_adapters::locale::option", default)]
    notes_locale: Option<Locale>,
}

#[test]
fn serializes_as_text() {
    let sighting = Sighting {
        id: Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef),
        seen_at: Utc.with_ymd_and_hms(2020, 6, 1, 5, 30, 0).unwrap(),
        confirmed_at: None,
        observer: None,
        locale: Locale::parse("en-CA"),
        notes_locale: Some(Locale::parse("fr-CA")),
    };

    let json = serde_json::to_value(&sighting).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "01234567-89ab-cdef-0123-456789abcdef",
            "seen_at": "2020-06-01T05:30:00Z",
            "confirmed_at": null,
            "observer": null,
            "locale": "en-CA",
            "notes_locale": "fr-CA",
        })
    );

    let back: Sighting = serde_json::from_value(json).unwrap();
    assert_eq!(back, sighting);
}

#[test]
fn missing_optional_fields_default_to_none() {
    let back: Sighting = serde_json::from_str(
        r#"{
            "id": "01234567-89AB-CDEF-0123-456789ABCDEF",
            "seen_at": "2020-06-01T00:30:00-05:00",
            "locale": "EN-ca"
        }"#,
    )
    .unwrap();
    assert_eq!(back.seen_at, Utc.with_ymd_and_hms(2020, 6, 1, 5, 30, 0).unwrap());
    assert_eq!(back.confirmed_at, None);
    assert_eq!(back.observer, None);
    assert_eq!(back.locale.to_language_tag(), "en-CA");
    assert_eq!(back.notes_locale, None);
}

#[test]
fn malformed_values_fail() {
    let bad_uuid = serde_json::from_str::<Sighting>(
        r#"{"id": "nope", "seen_at": "2020-06-01T05:30:00Z", "locale": "en"}"#,
    );
    assert!(bad_uuid.is_err());

    let bad_instant = serde_json::from_str::<Sighting>(
        r#"{"id": "01234567-89ab-cdef-0123-456789abcdef", "seen_at": "June 1st", "locale": "en"}"#,
    );
    assert!(bad_instant.unwrap_err().to_string().contains("June 1st"));
}

#[test]
fn long_locales_are_capped() {
    let locale = Locale::parse("zh-Latn-CN-variant1-a-extend1-x-wadegile-private1");
    let tag = wapitia_adapters::locale::print(&locale);
    assert!(tag.len() <= LOCALE_LENGTH);
    assert_eq!(tag, "zh-Latn-CN-variant1-a-extend1");

    let json = serde_json::to_string(&locale).unwrap();
    assert_eq!(json, r#""zh-Latn-CN-variant1-a-extend1-x-wadegile-private1""#);
}
