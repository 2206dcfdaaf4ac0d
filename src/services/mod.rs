//! Service layer for business logic above storage.
//!
//! Currently this is the CSV export serialization used by the admin
//! export endpoint.

pub mod csv_export;

pub use csv_export::{responses_to_csv, EXPORT_FIELDS};
