//! Column groups for entities that are not flat database models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit columns of an [`AuditableEntity`](crate::AuditableEntity).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFields {
    pub active: Option<bool>,
    pub created_by: Option<String>,
    #[serde(with = "wapitia_adapters::instant::option", default)]
    pub created_time: Option<DateTime<Utc>>,
    pub changed_by: Option<String>,
    #[serde(with = "wapitia_adapters::instant::option", default)]
    pub changed_time: Option<DateTime<Utc>>,
}

/// Catalog columns of a [`CatalogEntity`](crate::CatalogEntity).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFields {
    pub code: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CatalogFields {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn audit_times_serialize_as_instants() {
        let audit = AuditFields {
            active: Some(true),
            created_by: Some("ranger".to_owned()),
            created_time: Some(Utc.with_ymd_and_hms(2018, 5, 17, 8, 0, 0).unwrap()),
            ..AuditFields::default()
        };
        let json = serde_json::to_value(&audit).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "active": true,
                "created_by": "ranger",
                "created_time": "2018-05-17T08:00:00Z",
                "changed_by": null,
                "changed_time": null,
            })
        );
        let back: AuditFields = serde_json::from_value(json).unwrap();
        assert_eq!(back, audit);
    }

    #[test]
    fn catalog_builder() {
        let fields = CatalogFields::new("ELK")
            .with_name("Elk")
            .with_description("Wapiti");
        assert_eq!(fields.code, "ELK");
        assert_eq!(fields.name.as_deref(), Some("Elk"));
        assert_eq!(fields.description.as_deref(), Some("Wapiti"));
    }
}
