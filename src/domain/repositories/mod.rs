//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`SnapshotRepository`] - Whole-catalog snapshot storage

pub mod snapshot_repository;

pub use snapshot_repository::{SnapshotError, SnapshotRepository};

#[cfg(test)]
pub use snapshot_repository::MockSnapshotRepository;
