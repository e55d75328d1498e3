//! Catalog loading: CSV parsing, field normalization and the load cache.
pub mod cache;
pub mod error;
pub mod loader;
pub mod record;

pub use cache::CatalogCache;
pub use error::LoadError;
pub use loader::{load, load_from_reader, Catalog, REQUIRED_COLUMNS};
pub use record::ProductRecord;
