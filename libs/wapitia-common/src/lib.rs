//! Small, independent helpers shared across Wapitia projects.
//!
//! - [`collections`]: map-of-lists, get-or-create and singleton extraction
//! - [`tuple`]: [`Pair`], [`Tuple2`] and [`Tuple3`] value types
//! - [`iter`]: a peekable [`BufferedIterator`] and pairwise [`zip`](iter::zip)
//! - [`attr`]: getter/setter wrappers used by the get-or-make helpers
//! - [`basictype`]: validated [`Color`](basictype::Color) and
//!   [`Coordinate`](basictype::Coordinate) values
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod attr;
pub mod basictype;
pub mod booleans;
pub mod collections;
pub mod enum_lookup;
pub mod error;
pub mod iter;
pub mod strings;
pub mod tuple;

pub use attr::{Attr, CAttr, ConcreteAttr};
pub use enum_lookup::EnumLookup;
pub use error::{MultipleElementError, TupleError};
pub use iter::{BufferedIterator, PairIterator};
pub use tuple::{Pair, Tuple2, Tuple3};
