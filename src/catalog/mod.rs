// Catalog module
// Product records, derived USD prices, and structured filtering

pub mod filters;
pub mod models;

pub use filters::{apply_filters, FilterPatch, FilterSet};
pub use models::{CatalogItem, Product, ProductId, CATEGORIES, SIZES};
