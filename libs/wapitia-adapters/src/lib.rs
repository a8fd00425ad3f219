//! String forms of common value types, for text payloads and columns.
//!
//! Each adapter module offers `print`/`parse` functions, `None`-preserving
//! `_opt` variants, and `serialize`/`deserialize` functions usable with
//! `#[serde(with = "...")]` (plus an `option` sub-module for `Option` fields).
//!
//! ```
//! use chrono::{DateTime, Utc};
//! use serde::{Deserialize, Serialize};
//! use wapitia_adapters::locale::Locale;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Visit {
//!     #[serde(with = "wapitia_adapters::instant")]
//!     at: DateTime<Utc>,
//!     #[serde(with = "wapitia_adapters::locale::option", default)]
//!     locale: Option<Locale>,
//! }
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod error;
pub mod instant;
pub mod locale;
pub mod uuid;

pub use error::AdapterError;
pub use locale::{LOCALE_LENGTH, Locale};
