//! Fixed-arity heterogeneous value types.
//!
//! [`Pair`] is the plain two-slot holder produced by [`zip`](crate::iter::zip).
//! [`Tuple2`] and [`Tuple3`] add positional, bounds-checked access, slot
//! substitution and per-slot mapping. Equality and hashing are structural.

use std::any::{Any, type_name};

use serde::{Deserialize, Serialize};

use crate::error::TupleError;

/// Immutable pair of values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pair<A, B> {
    a: A,
    b: B,
}

impl<A, B> Pair<A, B> {
    #[must_use]
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    #[must_use]
    pub fn first(&self) -> &A {
        &self.a
    }

    #[must_use]
    pub fn second(&self) -> &B {
        &self.b
    }

    #[must_use]
    pub fn into_inner(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((a, b): (A, B)) -> Self {
        Self::new(a, b)
    }
}

/// Moves `item` into slot type `S`, or reports the mismatch.
fn cast_slot<T: Any, S: Any>(op: &'static str, index: usize, item: T) -> Result<S, TupleError> {
    let boxed: Box<dyn Any> = Box::new(item);
    boxed
        .downcast::<S>()
        .map(|b| *b)
        .map_err(|_| TupleError::TypeMismatch {
            op,
            index,
            expected: type_name::<S>(),
        })
}

fn view_slot<'a, T: Any>(op: &'static str, index: usize, slot: &'a dyn Any) -> Result<&'a T, TupleError> {
    slot.downcast_ref::<T>().ok_or(TupleError::TypeMismatch {
        op,
        index,
        expected: type_name::<T>(),
    })
}

/// Generic pair with positional access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tuple2<T1, T2> {
    first: T1,
    second: T2,
}

impl<T1, T2> Tuple2<T1, T2> {
    pub const ARITY: usize = 2;

    #[must_use]
    pub fn of(first: T1, second: T2) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub fn first(&self) -> &T1 {
        &self.first
    }

    #[must_use]
    pub fn second(&self) -> &T2 {
        &self.second
    }

    #[must_use]
    pub fn into_inner(self) -> (T1, T2) {
        (self.first, self.second)
    }

    /// Hand each slot to its consumer.
    pub fn accept<F1, F2>(&self, afunc: F1, bfunc: F2)
    where
        F1: FnOnce(&T1),
        F2: FnOnce(&T2),
    {
        afunc(&self.first);
        bfunc(&self.second);
    }

    /// Apply one function per slot, collecting the results in a new tuple.
    #[must_use]
    pub fn map<R1, R2, F1, F2>(self, afunc: F1, bfunc: F2) -> Tuple2<R1, R2>
    where
        F1: FnOnce(T1) -> R1,
        F2: FnOnce(T2) -> R2,
    {
        Tuple2::of(afunc(self.first), bfunc(self.second))
    }
}

impl<T1: Any, T2: Any> Tuple2<T1, T2> {
    /// Item at the 0-based `index`, viewed as `T`.
    ///
    /// # Errors
    ///
    /// [`TupleError::IndexOutOfBounds`] unless `index` is 0 or 1,
    /// [`TupleError::TypeMismatch`] when the slot is not a `T`.
    pub fn get<T: Any>(&self, index: usize) -> Result<&T, TupleError> {
        const OP: &str = "Tuple2.get";
        match index {
            0 => view_slot(OP, index, &self.first),
            1 => view_slot(OP, index, &self.second),
            _ => Err(TupleError::IndexOutOfBounds {
                op: OP,
                index,
                arity: Self::ARITY,
            }),
        }
    }

    /// Copy of this tuple with the slot at `index` replaced by `item`.
    ///
    /// # Errors
    ///
    /// [`TupleError::IndexOutOfBounds`] unless `index` is 0 or 1,
    /// [`TupleError::TypeMismatch`] when `item` is not of the slot's type.
    pub fn copy<T: Any>(&self, index: usize, item: T) -> Result<Self, TupleError>
    where
        T1: Clone,
        T2: Clone,
    {
        const OP: &str = "Tuple2.copy";
        match index {
            0 => Ok(Self::of(cast_slot(OP, index, item)?, self.second.clone())),
            1 => Ok(Self::of(self.first.clone(), cast_slot(OP, index, item)?)),
            _ => Err(TupleError::IndexOutOfBounds {
                op: OP,
                index,
                arity: Self::ARITY,
            }),
        }
    }
}

impl<A> Tuple2<A, A> {
    #[must_use]
    pub fn to_vec(self) -> Vec<A> {
        vec![self.first, self.second]
    }

    pub fn for_each<F: FnMut(&A)>(&self, mut consumer: F) {
        consumer(&self.first);
        consumer(&self.second);
    }

    /// Apply the same function to both slots.
    #[must_use]
    pub fn map_each<R, F: FnMut(A) -> R>(self, mut func: F) -> Tuple2<R, R> {
        Tuple2::of(func(self.first), func(self.second))
    }

    /// Combine this tuple slot-by-slot with `other`.
    #[must_use]
    pub fn zip_with<B, R, F>(self, other: Tuple2<B, B>, mut func: F) -> Tuple2<R, R>
    where
        F: FnMut(A, B) -> R,
    {
        Tuple2::of(func(self.first, other.first), func(self.second, other.second))
    }
}

impl<T1, T2> From<(T1, T2)> for Tuple2<T1, T2> {
    fn from((first, second): (T1, T2)) -> Self {
        Self::of(first, second)
    }
}

/// Generic triplet with positional access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tuple3<T1, T2, T3> {
    first: T1,
    second: T2,
    third: T3,
}

impl<T1, T2, T3> Tuple3<T1, T2, T3> {
    pub const ARITY: usize = 3;

    #[must_use]
    pub fn of(first: T1, second: T2, third: T3) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    #[must_use]
    pub fn first(&self) -> &T1 {
        &self.first
    }

    #[must_use]
    pub fn second(&self) -> &T2 {
        &self.second
    }

    #[must_use]
    pub fn third(&self) -> &T3 {
        &self.third
    }

    #[must_use]
    pub fn into_inner(self) -> (T1, T2, T3) {
        (self.first, self.second, self.third)
    }

    pub fn accept<F1, F2, F3>(&self, afunc: F1, bfunc: F2, cfunc: F3)
    where
        F1: FnOnce(&T1),
        F2: FnOnce(&T2),
        F3: FnOnce(&T3),
    {
        afunc(&self.first);
        bfunc(&self.second);
        cfunc(&self.third);
    }

    #[must_use]
    pub fn map<R1, R2, R3, F1, F2, F3>(self, afunc: F1, bfunc: F2, cfunc: F3) -> Tuple3<R1, R2, R3>
    where
        F1: FnOnce(T1) -> R1,
        F2: FnOnce(T2) -> R2,
        F3: FnOnce(T3) -> R3,
    {
        Tuple3::of(afunc(self.first), bfunc(self.second), cfunc(self.third))
    }
}

impl<T1: Any, T2: Any, T3: Any> Tuple3<T1, T2, T3> {
    /// Item at the 0-based `index`, viewed as `T`.
    ///
    /// # Errors
    ///
    /// [`TupleError::IndexOutOfBounds`] unless `index` is in `0..=2`,
    /// [`TupleError::TypeMismatch`] when the slot is not a `T`.
    pub fn get<T: Any>(&self, index: usize) -> Result<&T, TupleError> {
        const OP: &str = "Tuple3.get";
        match index {
            0 => view_slot(OP, index, &self.first),
            1 => view_slot(OP, index, &self.second),
            2 => view_slot(OP, index, &self.third),
            _ => Err(TupleError::IndexOutOfBounds {
                op: OP,
                index,
                arity: Self::ARITY,
            }),
        }
    }

    /// Copy of this tuple with the slot at `index` replaced by `item`.
    ///
    /// # Errors
    ///
    /// [`TupleError::IndexOutOfBounds`] unless `index` is in `0..=2`,
    /// [`TupleError::TypeMismatch`] when `item` is not of the slot's type.
    pub fn copy<T: Any>(&self, index: usize, item: T) -> Result<Self, TupleError>
    where
        T1: Clone,
        T2: Clone,
        T3: Clone,
    {
        const OP: &str = "Tuple3.copy";
        match index {
            0 => Ok(Self::of(
                cast_slot(OP, index, item)?,
                self.second.clone(),
                self.third.clone(),
            )),
            1 => Ok(Self::of(
                self.first.clone(),
                cast_slot(OP, index, item)?,
                self.third.clone(),
            )),
            2 => Ok(Self::of(
                self.first.clone(),
                self.second.clone(),
                cast_slot(OP, index, item)?,
            )),
            _ => Err(TupleError::IndexOutOfBounds {
                op: OP,
                index,
                arity: Self::ARITY,
            }),
        }
    }
}

impl<A> Tuple3<A, A, A> {
    #[must_use]
    pub fn to_vec(self) -> Vec<A> {
        vec![self.first, self.second, self.third]
    }

    pub fn for_each<F: FnMut(&A)>(&self, mut consumer: F) {
        consumer(&self.first);
        consumer(&self.second);
        consumer(&self.third);
    }

    #[must_use]
    pub fn map_each<R, F: FnMut(A) -> R>(self, mut func: F) -> Tuple3<R, R, R> {
        Tuple3::of(func(self.first), func(self.second), func(self.third))
    }

    #[must_use]
    pub fn zip_with<B, R, F>(self, other: Tuple3<B, B, B>, mut func: F) -> Tuple3<R, R, R>
    where
        F: FnMut(A, B) -> R,
    {
        Tuple3::of(
            func(self.first, other.first),
            func(self.second, other.second),
            func(self.third, other.third),
        )
    }
}

impl<T1, T2, T3> From<(T1, T2, T3)> for Tuple3<T1, T2, T3> {
    fn from((first, second, third): (T1, T2, T3)) -> Self {
        Self::of(first, second, third)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tuple2_get_checks_bounds_and_type() {
        let t = Tuple2::of(7_u32, "seven".to_owned());
        assert_eq!(t.get::<u32>(0), Ok(&7));
        assert_eq!(t.get::<String>(1).map(String::as_str), Ok("seven"));

        assert_eq!(
            t.get::<u32>(2),
            Err(TupleError::IndexOutOfBounds {
                op: "Tuple2.get",
                index: 2,
                arity: 2
            })
        );
        assert!(matches!(
            t.get::<i64>(0),
            Err(TupleError::TypeMismatch { index: 0, .. })
        ));
    }

    #[test]
    fn tuple2_copy_substitutes_one_slot() {
        let t = Tuple2::of(1_i32, 'a');
        assert_eq!(t.copy(1, 'b'), Ok(Tuple2::of(1, 'b')));
        assert_eq!(t.copy(0, 5_i32), Ok(Tuple2::of(5, 'a')));
        assert!(matches!(t.copy(0, "five"), Err(TupleError::TypeMismatch { .. })));
        assert!(matches!(t.copy(9, 5_i32), Err(TupleError::IndexOutOfBounds { .. })));
        // original untouched
        assert_eq!(t, Tuple2::of(1, 'a'));
    }

    #[test]
    fn tuple2_map_and_accept() {
        let t = Tuple2::of(2_u8, "ab");
        let mut seen = Vec::new();
        t.accept(|a| seen.push(a.to_string()), |_| ());
        assert_eq!(seen, vec!["2"]);

        let mapped = t.map(|a| u32::from(a) * 10, str::len);
        assert_eq!(mapped, Tuple2::of(20_u32, 2_usize));
    }

    #[test]
    fn homogeneous_tuple_helpers() {
        let t = Tuple2::of(3, 4);
        assert_eq!(t.to_vec(), vec![3, 4]);
        assert_eq!(t.map_each(|v| v * v), Tuple2::of(9, 16));
        assert_eq!(t.zip_with(Tuple2::of(10, 20), |a, b| a + b), Tuple2::of(13, 24));

        let mut sum = 0;
        Tuple3::of(1, 2, 3).for_each(|v| sum += v);
        assert_eq!(sum, 6);
    }

    #[test]
    fn tuple3_get_and_copy() {
        let t = Tuple3::of(1_u8, 2.5_f64, "x");
        assert_eq!(t.get::<&str>(2), Ok(&"x"));
        assert!(matches!(
            t.get::<u8>(3),
            Err(TupleError::IndexOutOfBounds { arity: 3, .. })
        ));

        let swapped = t.copy(2, "y").unwrap();
        assert_eq!(swapped.third(), &"y");
        assert_eq!(swapped.first(), &1);
    }

    #[test]
    fn structural_equality_and_hashing() {
        let mut set = HashSet::new();
        set.insert(Tuple3::of(1, "a", 'z'));
        set.insert(Tuple3::of(1, "a", 'z'));
        set.insert(Tuple3::from((2, "b", 'y')));
        assert_eq!(set.len(), 2);
        assert_eq!(Pair::new(1, 2), Pair::from((1, 2)));
    }

    #[test]
    fn serializes_with_named_slots() {
        let json = serde_json::to_string(&Tuple2::of(1, "one")).unwrap();
        assert_eq!(json, r#"{"first":1,"second":"one"}"#);
    }
}
