//! Column names and lengths common to Wapitia tables.

pub const ID_COL: &str = "id";
pub const CODE_COL: &str = "code";
pub const NAME_COL: &str = "name";
pub const DESCRIPTION_COL: &str = "description";
pub const ACTIVE_COL: &str = "active";
pub const CREATED_BY_COL: &str = "created_by";
pub const CREATED_TIME_COL: &str = "created_time";
pub const CHANGED_BY_COL: &str = "changed_by";
pub const CHANGED_TIME_COL: &str = "changed_time";

pub const CODE_LENGTH: u32 = 6;
pub const NAME_LENGTH: u32 = 45;
pub const DESCRIPTION_LENGTH: u32 = 4096;
pub const CREATED_BY_LENGTH: u32 = NAME_LENGTH;
pub const CHANGED_BY_LENGTH: u32 = NAME_LENGTH;

/// Number of decimal digits in an entity `id`.
pub const ID_LENGTH: u32 = 11;
