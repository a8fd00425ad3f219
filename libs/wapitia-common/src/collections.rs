//! Extensions to the standard collection utilities.
//!
//! The get-or-make helpers operate on owned values: an attribute's getter hands
//! out a copy of the collection, so the `add_to_*` helpers write the grown
//! collection back through the setter.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use crate::attr::CAttr;
use crate::error::MultipleElementError;

/// Keyed storage with insert-on-miss access, implemented for the std maps.
pub trait MapLike<K, V> {
    /// Value at `key`, created by `make(&key)` and inserted when absent.
    fn get_or_insert_with<F>(&mut self, key: K, make: F) -> &mut V
    where
        F: FnOnce(&K) -> V;
}

impl<K, V, S> MapLike<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn get_or_insert_with<F>(&mut self, key: K, make: F) -> &mut V
    where
        F: FnOnce(&K) -> V,
    {
        self.entry(key).or_insert_with_key(make)
    }
}

impl<K: Ord, V> MapLike<K, V> for BTreeMap<K, V> {
    fn get_or_insert_with<F>(&mut self, key: K, make: F) -> &mut V
    where
        F: FnOnce(&K) -> V,
    {
        self.entry(key).or_insert_with_key(make)
    }
}

/// Map every item into a new `Vec`.
#[must_use]
pub fn list_map<S, T, I, F>(items: I, map: F) -> Vec<T>
where
    I: IntoIterator<Item = S>,
    F: FnMut(S) -> T,
{
    items.into_iter().map(map).collect()
}

/// Append `value` to the list stored at `key`, starting a new list when the
/// key is not yet present.
///
/// ```
/// use std::collections::HashMap;
/// use wapitia_common::collections::add_to_map_of_lists;
///
/// let mut by_len: HashMap<usize, Vec<&str>> = HashMap::new();
/// for word in ["elk", "moose", "yak"] {
///     add_to_map_of_lists(&mut by_len, word.len(), word);
/// }
/// assert_eq!(by_len[&3], vec!["elk", "yak"]);
/// ```
pub fn add_to_map_of_lists<K, V, M>(map: &mut M, key: K, value: V)
where
    M: MapLike<K, Vec<V>> + ?Sized,
{
    add_to_map_of_lists_with(map, key, value, |_| Vec::new());
}

/// Like [`add_to_map_of_lists`], with `list_maker` building the list for a new
/// key.
pub fn add_to_map_of_lists_with<K, V, M, F>(map: &mut M, key: K, value: V, list_maker: F)
where
    M: MapLike<K, Vec<V>> + ?Sized,
    F: FnOnce(&K) -> Vec<V>,
{
    get_or_create_map_value(map, key, list_maker).push(value);
}

/// Value at `key`, or a new value from `default_provider` installed at `key`.
pub fn get_or_create_map_value<K, V, M, F>(map: &mut M, key: K, default_provider: F) -> &mut V
where
    M: MapLike<K, V> + ?Sized,
    F: FnOnce(&K) -> V,
{
    map.get_or_insert_with(key, default_provider)
}

/// First element of `list`; does not complain when there are more.
#[must_use]
pub fn first_of_list<A>(list: &[A]) -> Option<&A> {
    list.first()
}

/// The only element of `items`, if any.
///
/// # Errors
///
/// Returns [`MultipleElementError`] when `items` yields more than one element.
pub fn as_singleton<I>(items: I) -> Result<Option<I::Item>, MultipleElementError>
where
    I: IntoIterator,
{
    let mut iter = items.into_iter();
    let first = iter.next();
    if first.is_some() && iter.next().is_some() {
        tracing::warn!("singleton extraction found multiple elements");
        return Err(MultipleElementError::new("List has multiple elements."));
    }
    Ok(first)
}

/// Wrap an optional item as a list of zero or one items.
#[must_use]
pub fn singleton_list<A>(opt: Option<A>) -> Vec<A> {
    opt.into_iter().collect()
}

/// Wrap an optional item as a set of zero or one items.
#[must_use]
pub fn singleton_set<A: Eq + Hash>(opt: Option<A>) -> HashSet<A> {
    opt.into_iter().collect()
}

/// First item of `coll` matching `by`. An absent or empty collection yields
/// `None`.
#[must_use]
pub fn find_first_by<I, P>(mut by: P, coll: Option<I>) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    coll?.into_iter().find(|item| by(item))
}

/// Value of `attr`, or a new value from `creator` which is then stored back
/// through `attr`. `creator` runs only when `attr` has no value.
pub fn get_or_make<T, A, F>(attr: &mut A, creator: F) -> T
where
    T: Clone,
    A: CAttr<T> + ?Sized,
    F: FnOnce() -> T,
{
    if let Some(existing) = attr.get() {
        return existing;
    }
    let made = creator();
    attr.set(made.clone());
    made
}

/// Closure form of [`get_or_make`]. `setter` is called only when a value was
/// created; pass `None` to skip storing it.
pub fn get_or_make_with<T, G, F>(getter: G, setter: Option<&mut dyn FnMut(T)>, creator: F) -> T
where
    T: Clone,
    G: FnOnce() -> Option<T>,
    F: FnOnce() -> T,
{
    if let Some(existing) = getter() {
        return existing;
    }
    let made = creator();
    if let Some(set) = setter {
        set(made.clone());
    }
    made
}

/// Add `item` to the collection behind `attr`, creating the collection with
/// `creator` when absent. The grown collection is written back through `attr`.
pub fn add_to_collection<T, C, A, F>(item: T, attr: &mut A, creator: F)
where
    C: Extend<T>,
    A: CAttr<C> + ?Sized,
    F: FnOnce() -> C,
{
    let mut coll = attr.get().unwrap_or_else(creator);
    coll.extend(std::iter::once(item));
    attr.set(coll);
}

/// Closure form of [`add_to_collection`].
pub fn add_to_collection_with<T, C, G, F>(
    item: T,
    getter: G,
    setter: Option<&mut dyn FnMut(C)>,
    creator: F,
) where
    C: Extend<T>,
    G: FnOnce() -> Option<C>,
    F: FnOnce() -> C,
{
    let mut coll = getter().unwrap_or_else(creator);
    coll.extend(std::iter::once(item));
    if let Some(set) = setter {
        set(coll);
    }
}

pub fn get_or_make_set<T, A>(set_attr: &mut A) -> HashSet<T>
where
    T: Eq + Hash + Clone,
    A: CAttr<HashSet<T>> + ?Sized,
{
    get_or_make(set_attr, HashSet::new)
}

pub fn add_to_set<T, A>(item: T, set_attr: &mut A)
where
    T: Eq + Hash,
    A: CAttr<HashSet<T>> + ?Sized,
{
    add_to_collection(item, set_attr, HashSet::new);
}

pub fn get_or_make_list<T, A>(list_attr: &mut A) -> Vec<T>
where
    T: Clone,
    A: CAttr<Vec<T>> + ?Sized,
{
    get_or_make(list_attr, Vec::new)
}

pub fn add_to_list<T, A>(item: T, list_attr: &mut A)
where
    A: CAttr<Vec<T>> + ?Sized,
{
    add_to_collection(item, list_attr, Vec::new);
}
