//! Text rendering of entities.
//!
//! An entity renders as its name followed by its parameters in
//! parentheses: `Species(7, code=ELK,name=Elk,description=null,active=true,...)`.

use std::fmt::Display;

use wapitia_adapters::instant::print as print_instant;

use crate::definitions::{
    ACTIVE_COL, CHANGED_BY_COL, CHANGED_TIME_COL, CODE_COL, CREATED_BY_COL, CREATED_TIME_COL,
    DESCRIPTION_COL, NAME_COL,
};
use crate::entity::{AuditableEntity, CatalogEntity};

const NULL: &str = "null";

/// A column name with its rendered value, `None` for SQL null.
pub type Param = (&'static str, Option<String>);

#[must_use]
pub fn param<V: Display>(column: &'static str, value: Option<V>) -> Param {
    (column, value.map(|v| v.to_string()))
}

/// `column=value` pairs joined by commas.
#[must_use]
pub fn render_params(params: &[Param]) -> String {
    params
        .iter()
        .map(|(column, value)| format!("{column}={}", value.as_deref().unwrap_or(NULL)))
        .collect::<Vec<_>>()
        .join(",")
}

#[must_use]
pub fn audit_params<E: AuditableEntity + ?Sized>(entity: &E) -> Vec<Param> {
    vec![
        param(ACTIVE_COL, entity.active()),
        param(CREATED_BY_COL, entity.created_by()),
        (CREATED_TIME_COL, entity.created_time().as_ref().map(print_instant)),
        param(CHANGED_BY_COL, entity.changed_by()),
        (CHANGED_TIME_COL, entity.changed_time().as_ref().map(print_instant)),
    ]
}

#[must_use]
pub fn catalog_params<E: CatalogEntity + ?Sized>(entity: &E) -> Vec<Param> {
    vec![
        param(CODE_COL, Some(entity.code())),
        param(NAME_COL, entity.name()),
        param(DESCRIPTION_COL, entity.description()),
    ]
}

/// Render `entity`, optionally with its id and audit columns.
#[must_use]
pub fn describe<E: AuditableEntity + ?Sized>(
    entity: &E,
    include_id: bool,
    include_audit: bool,
) -> String {
    let mut params = entity.extra_params();
    if include_audit {
        params.extend(entity.audit_params());
    }
    let body = render_params(&params);

    if include_id {
        let id = entity.id().map_or_else(|| NULL.to_owned(), |id| id.to_string());
        format!("{}({id}, {body})", entity.entity_name())
    } else {
        format!("{}({body})", entity.entity_name())
    }
}
