//! Column and table declarations for migrations.
//!
//! ```
//! use sea_orm_migration::prelude::*;
//! use wapitia_datamodel::schema::catalog_table;
//!
//! let sql = catalog_table(Alias::new("species")).to_string(SqliteQueryBuilder);
//! assert!(sql.contains("varchar(6)"));
//! ```

use sea_orm_migration::prelude::*;

use crate::definitions::{
    ACTIVE_COL, CHANGED_BY_COL, CHANGED_BY_LENGTH, CHANGED_TIME_COL, CODE_COL, CODE_LENGTH,
    CREATED_BY_COL, CREATED_BY_LENGTH, CREATED_TIME_COL, DESCRIPTION_COL, DESCRIPTION_LENGTH,
    ID_COL, NAME_COL, NAME_LENGTH,
};

/// Auto-increment `id` primary key.
#[must_use]
pub fn id_column() -> ColumnDef {
    ColumnDef::new(Alias::new(ID_COL))
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

/// `active`, `created_by`, `created_time`, `changed_by` and `changed_time`,
/// all nullable.
#[must_use]
pub fn audit_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new(Alias::new(ACTIVE_COL)).boolean().null().to_owned(),
        ColumnDef::new(Alias::new(CREATED_BY_COL))
            .string_len(CREATED_BY_LENGTH)
            .null()
            .to_owned(),
        ColumnDef::new(Alias::new(CREATED_TIME_COL))
            .timestamp()
            .null()
            .to_owned(),
        ColumnDef::new(Alias::new(CHANGED_BY_COL))
            .string_len(CHANGED_BY_LENGTH)
            .null()
            .to_owned(),
        ColumnDef::new(Alias::new(CHANGED_TIME_COL))
            .timestamp()
            .null()
            .to_owned(),
    ]
}

/// Unique non-null `code`, nullable `name` and `description`.
#[must_use]
pub fn catalog_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new(Alias::new(CODE_COL))
            .string_len(CODE_LENGTH)
            .not_null()
            .unique_key()
            .to_owned(),
        ColumnDef::new(Alias::new(NAME_COL))
            .string_len(NAME_LENGTH)
            .null()
            .to_owned(),
        ColumnDef::new(Alias::new(DESCRIPTION_COL))
            .string_len(DESCRIPTION_LENGTH)
            .null()
            .to_owned(),
    ]
}

/// `CREATE TABLE IF NOT EXISTS` for an auditable table; add the entity's own
/// columns before running it.
#[must_use]
pub fn auditable_table<T: IntoIden + 'static>(table: T) -> TableCreateStatement {
    let mut stmt = Table::create();
    stmt.table(table).if_not_exists().col(id_column());
    for col in audit_columns() {
        stmt.col(col);
    }
    stmt
}

/// `CREATE TABLE IF NOT EXISTS` for a catalog table.
#[must_use]
pub fn catalog_table<T: IntoIden + 'static>(table: T) -> TableCreateStatement {
    let mut stmt = Table::create();
    stmt.table(table).if_not_exists().col(id_column());
    for col in catalog_columns().into_iter().chain(audit_columns()) {
        stmt.col(col);
    }
    stmt
}
