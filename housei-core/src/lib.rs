//! HOUSEI Core - Entity Catalog
//!
//! Domain records for the dashboard and the validated, read-only catalog that
//! holds them. No UI code lives here.

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod error;

pub use catalog::{CatalogData, EntityCatalog, ReferencePolicy};
pub use entities::*;
pub use enums::*;
pub use error::{CatalogError, CatalogResult, DanglingReference, ReferenceSource, ValidationError};
