//! Repository trait for the persisted catalog snapshot.

use crate::domain::entities::ProductRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Failure while reading or writing the snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O error at {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot at {location} is not valid JSON: {source}")]
    Format {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Storage for the whole catalog snapshot.
///
/// The snapshot is always replaced wholesale; there are no per-record
/// updates.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonSnapshotRepository`] - JSON file
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Replaces the stored snapshot with `records`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when the snapshot cannot be serialized or written.
    async fn save(&self, records: &[ProductRecord]) -> Result<(), SnapshotError>;

    /// Loads the stored snapshot.
    ///
    /// A snapshot that was never written loads as an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when the snapshot exists but cannot be read or parsed.
    async fn load(&self) -> Result<Vec<ProductRecord>, SnapshotError>;

    /// Human-readable location of the snapshot, used in logs.
    fn location(&self) -> String;
}
