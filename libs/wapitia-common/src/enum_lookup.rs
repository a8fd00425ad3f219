//! Name lookup tables for enum-like value sets.

use std::collections::HashMap;

use strum::IntoEnumIterator;

/// Read-only table mapping names to values, built once from a value list.
///
/// Exact lookups use the name as given; case-insensitive lookups compare the
/// upper-cased forms. When two values share an upper-cased name, the later
/// one wins for case-insensitive lookups.
///
/// ```
/// use strum::{AsRefStr, EnumIter};
/// use wapitia_common::EnumLookup;
///
/// #[derive(Clone, Copy, Debug, PartialEq, EnumIter, AsRefStr)]
/// enum Herd { Elk, Moose }
///
/// let lookup = EnumLookup::<Herd>::of_enum();
/// assert_eq!(lookup.by_name("Elk"), Some(Herd::Elk));
/// assert_eq!(lookup.by_name_case_insensitive("MOOSE"), Some(Herd::Moose));
/// assert_eq!(lookup.by_name("Deer"), None);
/// ```
#[derive(Debug, Clone)]
pub struct EnumLookup<V> {
    by_name: HashMap<String, V>,
    by_upper_name: HashMap<String, V>,
}

impl<V: Clone> EnumLookup<V> {
    /// Build from explicit values and a naming function.
    #[must_use]
    pub fn new<I, F>(values: I, name: F) -> Self
    where
        I: IntoIterator<Item = V>,
        F: Fn(&V) -> String,
    {
        let mut by_name = HashMap::new();
        let mut by_upper_name = HashMap::new();
        for value in values {
            let key = name(&value);
            by_upper_name.insert(key.to_uppercase(), value.clone());
            by_name.insert(key, value);
        }
        Self {
            by_name,
            by_upper_name,
        }
    }

    /// Build from every variant of a `strum`-iterable enum, keyed by its
    /// `AsRef<str>` name.
    #[must_use]
    pub fn of_enum() -> Self
    where
        V: IntoEnumIterator + AsRef<str>,
    {
        Self::new(V::iter(), |v| v.as_ref().to_owned())
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<V> {
        self.by_name.get(name).cloned()
    }

    #[must_use]
    pub fn by_name_case_insensitive(&self, name: &str) -> Option<V> {
        self.by_upper_name.get(&name.to_uppercase()).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use strum::{AsRefStr, EnumIter};

    #[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, AsRefStr)]
    enum Season {
        Spring,
        Summer,
        Fall,
        Winter,
    }

    #[test]
    fn exact_lookup() {
        let lookup = EnumLookup::<Season>::of_enum();
        assert_eq!(lookup.len(), 4);
        assert_eq!(lookup.by_name("Fall"), Some(Season::Fall));
        assert_eq!(lookup.by_name("fall"), None);
        assert_eq!(lookup.by_name("Autumn"), None);
    }

    #[test]
    fn case_insensitive_lookup() {
        let lookup = EnumLookup::<Season>::of_enum();
        assert_eq!(lookup.by_name_case_insensitive("winter"), Some(Season::Winter));
        assert_eq!(lookup.by_name_case_insensitive("sUmMeR"), Some(Season::Summer));
        assert_eq!(lookup.by_name_case_insensitive("Monsoon"), None);
    }

    #[test]
    fn custom_names() {
        let lookup = EnumLookup::new([1_u8, 2, 3], |n| format!("n{n}"));
        assert_eq!(lookup.by_name("n2"), Some(2));
        assert_eq!(lookup.by_name_case_insensitive("N3"), Some(3));
        assert_eq!(lookup.by_name("2"), None);
    }

    #[test]
    fn empty_table() {
        let lookup = EnumLookup::<u8>::new([], |n| n.to_string());
        assert!(lookup.is_empty());
        assert_eq!(lookup.by_name_case_insensitive(""), None);
    }
}
