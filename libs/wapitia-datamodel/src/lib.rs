//! Conventions shared by Wapitia database entities.
//!
//! Every entity has an auto-increment `id`. Auditable entities add an
//! `active` flag and who/when columns for creation and the last change.
//! Catalog entities, the rows behind drop-down lists, add a unique `code`
//! plus an optional display `name` and `description`.
//!
//! The capabilities are the traits [`IdEntity`], [`AuditableEntity`] and
//! [`CatalogEntity`]. Flat sea-orm models using the standard column names
//! get them from [`impl_id_entity!`], [`impl_auditable_entity!`] and
//! [`impl_catalog_entity!`]; plain structs can hold [`AuditFields`] and
//! [`CatalogFields`] instead. Tables are declared with the [`schema`]
//! helpers.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod definitions;
pub mod describe;
pub mod entity;
pub mod fields;
mod macros;
pub mod schema;
pub mod timestamp;

pub use entity::{AuditableEntity, CatalogEntity, IdEntity};
pub use fields::{AuditFields, CatalogFields};

#[doc(hidden)]
pub use chrono;
