//! Iterator adapters: a one-item look-ahead buffer and a pairwise zip.
//!
//! ```
//! use wapitia_common::iter::{zip, BufferedIterator};
//!
//! let mut it = BufferedIterator::new([1, 2].into_iter());
//! assert_eq!(it.peek(), Some(&1));
//! assert_eq!(it.next(), Some(1));
//!
//! let pairs: Vec<_> = zip(["a", "b", "c"], [1, 2]).map(wapitia_common::Pair::into_inner).collect();
//! assert_eq!(pairs, vec![("a", 1), ("b", 2)]);
//! ```

use std::iter::FusedIterator;

use crate::tuple::Pair;

/// Buffers an iterator so that its next item can be peeked at.
///
/// The next item is pulled from the wrapped iterator eagerly, on construction
/// and after every [`next`](Iterator::next).
#[derive(Debug, Clone)]
pub struct BufferedIterator<I: Iterator> {
    iter: I,
    next: Option<I::Item>,
}

impl<I: Iterator> BufferedIterator<I> {
    #[must_use]
    pub fn new(mut iter: I) -> Self {
        let next = iter.next();
        Self { iter, next }
    }

    /// The next item, without advancing. Can be called repeatedly.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&I::Item> {
        self.next.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Advance only when the buffered item satisfies `accept`.
    pub fn next_if(&mut self, accept: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        if self.next.as_ref().is_some_and(accept) {
            self.next()
        } else {
            None
        }
    }
}

impl<I: Iterator> Iterator for BufferedIterator<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        // Once exhausted, stay exhausted even if the inner iterator is not fused.
        let current = self.next.take()?;
        self.next = self.iter.next();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next.is_none() {
            return (0, Some(0));
        }
        let (lo, hi) = self.iter.size_hint();
        (lo.saturating_add(1), hi.and_then(|h| h.checked_add(1)))
    }
}

impl<I: Iterator> FusedIterator for BufferedIterator<I> {}

/// Iterator over the paired items of two iterators; ends when either ends.
#[derive(Debug, Clone)]
pub struct PairIterator<A, B> {
    aiter: A,
    biter: B,
}

impl<A: Iterator, B: Iterator> Iterator for PairIterator<A, B> {
    type Item = Pair<A::Item, B::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.aiter.next()?;
        let b = self.biter.next()?;
        Some(Pair::new(a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (alo, ahi) = self.aiter.size_hint();
        let (blo, bhi) = self.biter.size_hint();
        let hi = match (ahi, bhi) {
            (Some(x), Some(y)) => Some(x.min(y)),
            (x, None) => x,
            (None, y) => y,
        };
        (alo.min(blo), hi)
    }
}

/// Pair up the items of `a` and `b`.
///
/// Stops at the end of the shorter input; the longer one keeps its
/// remaining items (bar the one consumed when `a` outlives `b`).
#[must_use]
pub fn zip<A, B>(a: A, b: B) -> PairIterator<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    PairIterator {
        aiter: a.into_iter(),
        biter: b.into_iter(),
    }
}
