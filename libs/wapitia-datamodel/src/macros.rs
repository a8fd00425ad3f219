/// Implement [`IdEntity`](crate::IdEntity) for a struct with an `id` field.
///
/// The field is `i64` by default; pass `optional` for `Option<i64>`.
///
/// ```
/// struct Herd {
///     id: Option<i64>,
/// }
/// wapitia_datamodel::impl_id_entity!(Herd, "Herd", optional);
/// ```
#[macro_export]
macro_rules! impl_id_entity {
    ($ty:ty, $name:expr) => {
        impl $crate::IdEntity for $ty {
            fn id(&self) -> ::core::option::Option<i64> {
                ::core::option::Option::Some(self.id)
            }

            fn set_id(&mut self, id: i64) {
                self.id = id;
            }

            fn entity_name(&self) -> &'static str {
                $name
            }
        }
    };
    ($ty:ty, $name:expr, optional) => {
        impl $crate::IdEntity for $ty {
            fn id(&self) -> ::core::option::Option<i64> {
                self.id
            }

            fn set_id(&mut self, id: i64) {
                self.id = ::core::option::Option::Some(id);
            }

            fn entity_name(&self) -> &'static str {
                $name
            }
        }
    };
}

/// Implement [`IdEntity`](crate::IdEntity),
/// [`AuditableEntity`](crate::AuditableEntity) and `Display`.
///
/// The flat form expects the columns as fields: `id: i64`,
/// `active: Option<bool>`, `created_by`/`changed_by: Option<String>` and
/// `created_time`/`changed_time: Option<NaiveDateTime>`, as a sea-orm model
/// declares them. The `audit = field` form reads an
/// [`AuditFields`](crate::AuditFields) group and an `id: Option<i64>`.
#[macro_export]
macro_rules! impl_auditable_entity {
    (@columns $ty:ty; $($extra:tt)*) => {
        impl $crate::AuditableEntity for $ty {
            fn active(&self) -> ::core::option::Option<bool> {
                self.active
            }

            fn set_active(&mut self, active: ::core::option::Option<bool>) {
                self.active = active;
            }

            fn created_by(&self) -> ::core::option::Option<&str> {
                self.created_by.as_deref()
            }

            fn set_created_by(&mut self, created_by: ::core::option::Option<::std::string::String>) {
                self.created_by = created_by;
            }

            fn created_time(
                &self,
            ) -> ::core::option::Option<$crate::chrono::DateTime<$crate::chrono::Utc>> {
                $crate::timestamp::from_db_timestamp(self.created_time)
            }

            fn set_created_time(
                &mut self,
                created_time: ::core::option::Option<$crate::chrono::DateTime<$crate::chrono::Utc>>,
            ) {
                self.created_time = $crate::timestamp::to_db_timestamp(created_time);
            }

            fn changed_by(&self) -> ::core::option::Option<&str> {
                self.changed_by.as_deref()
            }

            fn set_changed_by(&mut self, changed_by: ::core::option::Option<::std::string::String>) {
                self.changed_by = changed_by;
            }

            fn changed_time(
                &self,
            ) -> ::core::option::Option<$crate::chrono::DateTime<$crate::chrono::Utc>> {
                $crate::timestamp::from_db_timestamp(self.changed_time)
            }

            fn set_changed_time(
                &mut self,
                changed_time: ::core::option::Option<$crate::chrono::DateTime<$crate::chrono::Utc>>,
            ) {
                self.changed_time = $crate::timestamp::to_db_timestamp(changed_time);
            }

            $($extra)*
        }

        $crate::impl_auditable_entity!(@display $ty);
    };
    (@group $ty:ty, $audit:ident; $($extra:tt)*) => {
        impl $crate::AuditableEntity for $ty {
            fn active(&self) -> ::core::option::Option<bool> {
                self.$audit.active
            }

            fn set_active(&mut self, active: ::core::option::Option<bool>) {
                self.$audit.active = active;
            }

            fn created_by(&self) -> ::core::option::Option<&str> {
                self.$audit.created_by.as_deref()
            }

            fn set_created_by(&mut self, created_by: ::core::option::Option<::std::string::String>) {
                self.$audit.created_by = created_by;
            }

            fn created_time(
                &self,
            ) -> ::core::option::Option<$crate::chrono::DateTime<$crate::chrono::Utc>> {
                self.$audit.created_time
            }

            fn set_created_time(
                &mut self,
                created_time: ::core::option::Option<$crate::chrono::DateTime<$crate::chrono::Utc>>,
            ) {
                self.$audit.created_time = created_time;
            }

            fn changed_by(&self) -> ::core::option::Option<&str> {
                self.$audit.changed_by.as_deref()
            }

            fn set_changed_by(&mut self, changed_by: ::core::option::Option<::std::string::String>) {
                self.$audit.changed_by = changed_by;
            }

            fn changed_time(
                &self,
            ) -> ::core::option::Option<$crate::chrono::DateTime<$crate::chrono::Utc>> {
                self.$audit.changed_time
            }

            fn set_changed_time(
                &mut self,
                changed_time: ::core::option::Option<$crate::chrono::DateTime<$crate::chrono::Utc>>,
            ) {
                self.$audit.changed_time = changed_time;
            }

            $($extra)*
        }

        $crate::impl_auditable_entity!(@display $ty);
    };
    (@display $ty:ty) => {
        impl ::core::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&$crate::AuditableEntity::describe(self))
            }
        }
    };
    ($ty:ty, $name:expr) => {
        $crate::impl_id_entity!($ty, $name);
        $crate::impl_auditable_entity!(@columns $ty;);
    };
    ($ty:ty, $name:expr, audit = $audit:ident) => {
        $crate::impl_id_entity!($ty, $name, optional);
        $crate::impl_auditable_entity!(@group $ty, $audit;);
    };
}

/// Implement [`IdEntity`](crate::IdEntity),
/// [`AuditableEntity`](crate::AuditableEntity),
/// [`CatalogEntity`](crate::CatalogEntity) and `Display`.
///
/// The flat form expects the audit columns of [`impl_auditable_entity!`]
/// plus `code: String`, `name: Option<String>` and
/// `description: Option<String>`. The grouped form reads
/// [`CatalogFields`](crate::CatalogFields) and
/// [`AuditFields`](crate::AuditFields) groups and an `id: Option<i64>`.
///
/// ```
/// use wapitia_datamodel::{AuditFields, CatalogEntity, CatalogFields};
///
/// struct Antler {
///     id: Option<i64>,
///     catalog: CatalogFields,
///     audit: AuditFields,
/// }
/// wapitia_datamodel::impl_catalog_entity!(Antler, "Antler", catalog = catalog, audit = audit);
///
/// let antler = Antler {
///     id: None,
///     catalog: CatalogFields::new("PALM"),
///     audit: AuditFields::default(),
/// };
/// assert_eq!(antler.display_name(), "PALM");
/// ```
#[macro_export]
macro_rules! impl_catalog_entity {
    (@catalog $ty:ty, $catalog:ident) => {
        impl $crate::CatalogEntity for $ty {
            fn code(&self) -> &str {
                &self.$catalog.code
            }

            fn set_code(&mut self, code: ::std::string::String) {
                self.$catalog.code = code;
            }

            fn name(&self) -> ::core::option::Option<&str> {
                self.$catalog.name.as_deref()
            }

            fn set_name(&mut self, name: ::core::option::Option<::std::string::String>) {
                self.$catalog.name = name;
            }

            fn description(&self) -> ::core::option::Option<&str> {
                self.$catalog.description.as_deref()
            }

            fn set_description(
                &mut self,
                description: ::core::option::Option<::std::string::String>,
            ) {
                self.$catalog.description = description;
            }
        }
    };
    ($ty:ty, $name:expr) => {
        $crate::impl_id_entity!($ty, $name);
        $crate::impl_auditable_entity!(@columns $ty;
            fn extra_params(&self) -> ::std::vec::Vec<$crate::describe::Param> {
                $crate::describe::catalog_params(self)
            }
        );
        impl $crate::CatalogEntity for $ty {
            fn code(&self) -> &str {
                &self.code
            }

            fn set_code(&mut self, code: ::std::string::String) {
                self.code = code;
            }

            fn name(&self) -> ::core::option::Option<&str> {
                self.name.as_deref()
            }

            fn set_name(&mut self, name: ::core::option::Option<::std::string::String>) {
                self.name = name;
            }

            fn description(&self) -> ::core::option::Option<&str> {
                self.description.as_deref()
            }

            fn set_description(
                &mut self,
                description: ::core::option::Option<::std::string::String>,
            ) {
                self.description = description;
            }
        }
    };
    ($ty:ty, $name:expr, catalog = $catalog:ident, audit = $audit:ident) => {
        $crate::impl_id_entity!($ty, $name, optional);
        $crate::impl_auditable_entity!(@group $ty, $audit;
            fn extra_params(&self) -> ::std::vec::Vec<$crate::describe::Param> {
                $crate::describe::catalog_params(self)
            }
        );
        $crate::impl_catalog_entity!(@catalog $ty, $catalog);
    };
}
