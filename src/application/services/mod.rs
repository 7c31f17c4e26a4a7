//! Services for the application layer.

pub mod catalog_service;
pub mod detail_resolver;
pub mod page_loader;
pub mod product_service;

pub use catalog_service::{CatalogRun, CatalogService, RunReport, ScrapeSettings};
pub use detail_resolver::{DetailResolver, ITEM_ID_PLACEHOLDER};
pub use page_loader::PageLoader;
pub use product_service::ProductService;
