//! Entity capability traits.

use chrono::{DateTime, Utc};

use crate::describe::{self, Param};

/// An entity keyed by an auto-increment integer `id`.
pub trait IdEntity {
    /// Primary key; `None` before the row is first stored.
    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    /// Type name used when describing the entity.
    fn entity_name(&self) -> &'static str;
}

/// An entity with an `active` flag and creation/change audit columns.
pub trait AuditableEntity: IdEntity {
    fn active(&self) -> Option<bool>;
    fn set_active(&mut self, active: Option<bool>);

    fn created_by(&self) -> Option<&str>;
    fn set_created_by(&mut self, created_by: Option<String>);
    fn created_time(&self) -> Option<DateTime<Utc>>;
    fn set_created_time(&mut self, created_time: Option<DateTime<Utc>>);

    fn changed_by(&self) -> Option<&str>;
    fn set_changed_by(&mut self, changed_by: Option<String>);
    fn changed_time(&self) -> Option<DateTime<Utc>>;
    fn set_changed_time(&mut self, changed_time: Option<DateTime<Utc>>);

    /// Record creation by `by` at `at`. The change columns get the same
    /// values, and an unset `active` flag becomes `true`.
    fn stamp_created(&mut self, by: &str, at: DateTime<Utc>) {
        tracing::trace!(entity = self.entity_name(), by, "stamping creation");
        self.set_created_by(Some(by.to_owned()));
        self.set_created_time(Some(at));
        self.set_changed_by(Some(by.to_owned()));
        self.set_changed_time(Some(at));
        if self.active().is_none() {
            self.set_active(Some(true));
        }
    }

    /// Record a change by `by` at `at`.
    fn stamp_changed(&mut self, by: &str, at: DateTime<Utc>) {
        tracing::trace!(entity = self.entity_name(), by, "stamping change");
        self.set_changed_by(Some(by.to_owned()));
        self.set_changed_time(Some(at));
    }

    /// Audit columns as `(column, value)` pairs, in description order.
    fn audit_params(&self) -> Vec<Param> {
        describe::audit_params(self)
    }

    /// Columns of the concrete entity, described before the audit columns.
    fn extra_params(&self) -> Vec<Param> {
        Vec::new()
    }

    /// `Name(id, extra..,audit..)`, with `null` for absent values.
    fn describe(&self) -> String {
        describe::describe(self, true, true)
    }
}

/// A catalog row: a unique presentation `code` with an optional display
/// `name` and long `description`.
pub trait CatalogEntity: AuditableEntity {
    fn code(&self) -> &str;
    fn set_code(&mut self, code: String);

    fn name(&self) -> Option<&str>;
    fn set_name(&mut self, name: Option<String>);

    fn description(&self) -> Option<&str>;
    fn set_description(&mut self, description: Option<String>);

    /// Text to show for the row: its name, or its code when unnamed.
    fn display_name(&self) -> &str {
        self.name().unwrap_or_else(|| self.code())
    }
}
