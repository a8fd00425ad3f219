//! Conversion between UTC instants and SQL `TIMESTAMP` values.
//!
//! Timestamp columns carry no zone; they always hold UTC wall-clock time.

use chrono::{DateTime, NaiveDateTime, Utc};

#[must_use]
pub fn to_db_timestamp(at: Option<DateTime<Utc>>) -> Option<NaiveDateTime> {
    at.map(|t| t.naive_utc())
}

#[must_use]
pub fn from_db_timestamp(ts: Option<NaiveDateTime>) -> Option<DateTime<Utc>> {
    ts.map(|t| t.and_utc())
}
