//! BCP 47 language tags for locales.
//!
//! Tags are parsed leniently: the first ill-formed subtag ends parsing and
//! everything from it on is dropped. Printed tags are capped at
//! [`LOCALE_LENGTH`] characters by [`trunc`], which removes whole subtags
//! from the end (RFC 5646 section 4.4.2).

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use wapitia_common::BufferedIterator;
use wapitia_common::strings::leftmost;

/// Longest tag a storage column must hold.
pub const LOCALE_LENGTH: usize = 35;

const UNDETERMINED: &str = "und";
const PRIVATE_USE: char = 'x';

/// A locale identified by a BCP 47 language tag.
///
/// The default value is the root locale, printed as `und`.
///
/// The `Serialize` impl writes the full tag, which can exceed
/// [`LOCALE_LENGTH`]. Fields stored in a length-limited column should use
/// `#[serde(with = "wapitia_adapters::locale")]` (or `locale::option`),
/// which truncates with [`trunc`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    script: Option<String>,
    region: Option<String>,
    variants: Vec<String>,
    extensions: BTreeMap<char, Vec<String>>,
    private_use: Vec<String>,
}

impl Locale {
    /// The root locale.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a language tag, keeping its well-formed prefix.
    ///
    /// Subtags are separated by `-` and matched case-insensitively. An
    /// empty or ill-formed language yields the root locale. When extended
    /// language subtags follow a short language, the first of them becomes
    /// the language.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let mut locale = Self::default();
        let mut subtags = BufferedIterator::new(tag.split('-'));

        match subtags.next() {
            Some(language) if is_language(language) => {
                if !language.eq_ignore_ascii_case(UNDETERMINED) {
                    locale.language = language.to_ascii_lowercase();
                }
            }
            _ => {
                if !tag.is_empty() {
                    tracing::debug!(tag, "ill-formed language, using root locale");
                }
                return locale;
            }
        }

        if locale.language.len() <= 3 {
            let mut extlangs = 0;
            while extlangs < 3 && subtags.peek().is_some_and(|s| is_extlang(s)) {
                if let Some(extlang) = subtags.next()
                    && extlangs == 0
                {
                    locale.language = extlang.to_ascii_lowercase();
                }
                extlangs += 1;
            }
        }

        if let Some(script) = subtags.next_if(|s| is_script(s)) {
            locale.script = Some(title_case(script));
        }
        if let Some(region) = subtags.next_if(|s| is_region(s)) {
            locale.region = Some(region.to_ascii_uppercase());
        }
        while let Some(variant) = subtags.next_if(|s| is_variant(s)) {
            locale.variants.push(variant.to_owned());
        }

        while let Some(singleton) = subtags.next_if(|s| is_singleton(s)) {
            let key = singleton_key(singleton);
            let values = take_while(&mut subtags, is_extension_value);
            if values.is_empty() || locale.extensions.contains_key(&key) {
                tracing::debug!(tag, "dropping ill-formed language tag tail");
                return locale;
            }
            locale.extensions.insert(key, values);
        }

        if subtags
            .next_if(|s| s.eq_ignore_ascii_case("x"))
            .is_some()
        {
            locale.private_use = take_while(&mut subtags, is_private_use_value);
        }

        if subtags.has_next() {
            tracing::debug!(tag, "dropping ill-formed language tag tail");
        }
        locale
    }

    /// Language subtag, empty for the root locale.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    #[must_use]
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Subtags of the extension introduced by `singleton`.
    #[must_use]
    pub fn extension(&self, singleton: char) -> Option<&[String]> {
        self.extensions
            .get(&singleton.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    #[must_use]
    pub fn private_use(&self) -> &[String] {
        &self.private_use
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        *self == Self::root()
    }

    /// Canonically cased language tag; `und` for the root locale.
    #[must_use]
    pub fn to_language_tag(&self) -> String {
        let mut tag = String::from(if self.language.is_empty() {
            UNDETERMINED
        } else {
            self.language.as_str()
        });
        let mut push = |subtag: &str| {
            tag.push('-');
            tag.push_str(subtag);
        };

        let leading = self.script.iter().chain(&self.region).chain(&self.variants);
        for subtag in leading {
            push(subtag.as_str());
        }
        for (singleton, values) in &self.extensions {
            push(singleton.encode_utf8(&mut [0; 4]));
            for value in values {
                push(value.as_str());
            }
        }
        if !self.private_use.is_empty() {
            push("x");
            for value in &self.private_use {
                push(value.as_str());
            }
        }
        tag
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_language_tag())
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_language_tag())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(d)?;
        Ok(Self::parse(&tag))
    }
}

/// Shorten `tag` to at most `max_len` characters.
///
/// Fitting tags are returned as is. Otherwise the last subtag is removed,
/// together with a singleton left dangling at the end, until the tag fits.
/// A single subtag that is still too long is cut to `max_len` characters.
#[must_use]
pub fn trunc(tag: &str, max_len: usize) -> &str {
    let mut cut = tag;
    while cut.chars().count() > max_len {
        let Some(dash) = cut.rfind('-') else {
            return leftmost(max_len, Some(cut)).unwrap_or(cut);
        };
        cut = &cut[..dash];
        if let Some(dash) = cut.rfind('-')
            && cut[dash + 1..].chars().count() == 1
        {
            cut = &cut[..dash];
        }
    }
    cut
}

/// Language tag of `locale`, truncated to [`LOCALE_LENGTH`].
#[must_use]
pub fn print(locale: &Locale) -> String {
    let tag = locale.to_language_tag();
    let cut = trunc(&tag, LOCALE_LENGTH);
    if cut.len() < tag.len() {
        tracing::debug!(tag = %tag, truncated = cut, "language tag truncated");
    }
    cut.to_owned()
}

#[must_use]
pub fn parse(tag: &str) -> Locale {
    Locale::parse(tag)
}

/// [`print`] for an optional locale.
#[must_use]
pub fn marshal(locale: Option<&Locale>) -> Option<String> {
    locale.map(print)
}

/// [`parse`] for an optional tag.
#[must_use]
pub fn unmarshal(tag: Option<&str>) -> Option<Locale> {
    tag.map(Locale::parse)
}

/// Serialize as a language tag capped at [`LOCALE_LENGTH`].
///
/// # Errors
/// Propagates serializer errors.
pub fn serialize<S: Serializer>(locale: &Locale, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&print(locale))
}

/// # Errors
/// Fails when the value is not a string.
pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Locale, D::Error> {
    Locale::deserialize(d)
}

pub mod option {
    //! `#[serde(with = "wapitia_adapters::locale::option")]` for
    //! `Option<Locale>`.

    use serde::{Deserialize, Deserializer, Serializer};

    use super::Locale;

    /// # Errors
    /// Propagates serializer errors.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(locale: &Option<Locale>, s: S) -> Result<S::Ok, S::Error> {
        match super::marshal(locale.as_ref()) {
            Some(tag) => s.serialize_some(&tag),
            None => s.serialize_none(),
        }
    }

    /// # Errors
    /// Fails when the value is neither a string nor null.
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Locale>, D::Error> {
        let tag = Option::<String>::deserialize(d)?;
        Ok(super::unmarshal(tag.as_deref()))
    }
}

fn take_while<'a, I>(subtags: &mut BufferedIterator<I>, accept: fn(&str) -> bool) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    let mut taken = Vec::new();
    while let Some(s) = subtags.next_if(|s| accept(s)) {
        taken.push(s.to_ascii_lowercase());
    }
    taken
}

fn is_alpha(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_alphanum(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn is_language(s: &str) -> bool {
    is_alpha(s, 2, 3) || is_alpha(s, 5, 8)
}

fn is_extlang(s: &str) -> bool {
    is_alpha(s, 3, 3)
}

fn is_script(s: &str) -> bool {
    is_alpha(s, 4, 4)
}

fn is_region(s: &str) -> bool {
    is_alpha(s, 2, 2) || (s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit()))
}

fn is_variant(s: &str) -> bool {
    is_alphanum(s, 5, 8) || (is_alphanum(s, 4, 4) && s.as_bytes()[0].is_ascii_digit())
}

fn is_singleton(s: &str) -> bool {
    is_alphanum(s, 1, 1) && !s.eq_ignore_ascii_case("x")
}

fn singleton_key(s: &str) -> char {
    s.chars().next().unwrap_or(PRIVATE_USE).to_ascii_lowercase()
}

fn is_extension_value(s: &str) -> bool {
    is_alphanum(s, 2, 8)
}

fn is_private_use_value(s: &str) -> bool {
    is_alphanum(s, 1, 8)
}

fn title_case(s: &str) -> String {
    let lower = s.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => lower,
    }
}
