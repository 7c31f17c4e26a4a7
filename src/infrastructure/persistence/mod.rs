//! Snapshot repository implementations.
//!
//! # Repositories
//!
//! - [`JsonSnapshotRepository`] - Whole catalog as one JSON file

pub mod json_snapshot_repository;

pub use json_snapshot_repository::{JsonSnapshotRepository, to_pretty_json};
