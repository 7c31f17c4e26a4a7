//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest-backed [`crate::domain::sources::PageFetcher`]
//! - [`persistence`] - JSON file [`crate::domain::repositories::SnapshotRepository`]
//! - [`reporting`] - `tracing`-backed [`crate::domain::report::ScrapeReporter`]

pub mod http;
pub mod persistence;
pub mod reporting;
