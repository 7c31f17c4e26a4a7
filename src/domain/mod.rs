//! Domain layer containing catalog entities and the contracts around them.
//!
//! # Architecture
//!
//! - [`entities`] - Product entries, nutrition facts and assembled records
//! - [`repositories`] - Snapshot storage trait
//! - [`sources`] - Upstream page fetcher trait
//! - [`report`] - Pipeline events and the reporter they are sent to
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Pipeline logic lives in services (see [`crate::application::services`])
//!
//! # Scrape Flow
//!
//! 1. The listing page is fetched through a [`sources::PageFetcher`]
//! 2. Each menu item becomes a [`entities::ProductEntry`] or a skip
//! 3. The detail page and nutrition API fill in [`entities::ProductDetails`]
//! 4. Entry and details are assembled into a [`entities::ProductRecord`]
//! 5. All records are persisted via [`repositories::SnapshotRepository`]

pub mod entities;
pub mod report;
pub mod repositories;
pub mod sources;
