// Service exports
pub mod catalog;

pub use catalog::{sample_restaurants, CatalogError, CatalogStore};
