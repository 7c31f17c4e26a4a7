//! Application layer: the scrape pipeline and product lookups.
//!
//! Services consume domain traits ([`crate::domain::sources::PageFetcher`],
//! [`crate::domain::repositories::SnapshotRepository`],
//! [`crate::domain::report::ScrapeReporter`]) and expose the operations used
//! by the CLI and HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::catalog_service::CatalogService`] - Listing to snapshot pipeline
//! - [`services::detail_resolver::DetailResolver`] - Description and nutrition per entry
//! - [`services::page_loader::PageLoader`] - Fetching with failures folded into "no content"
//! - [`services::product_service::ProductService`] - Read-only snapshot lookups
//!
//! Pure HTML and JSON parsing lives in [`parsing`].

pub mod parsing;
pub mod services;
