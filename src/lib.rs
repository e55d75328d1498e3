pub mod analytics;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod export;
pub mod normalization;
pub mod tracing;

pub mod util {
    pub mod env;
}

pub use analytics::{DashboardReport, PriceRange, ProductFilter};
pub use catalog::{load, Catalog, CatalogCache, LoadError, ProductRecord};
