//! Source tables: typed records, CSV loaders and the immutable repository.

pub mod loader;
pub mod record;
pub mod repository;

pub use record::{DiseaseRecord, HospitalRecord, parse_departments};
pub use repository::Repository;
