//! JSON file implementation of [`SnapshotRepository`].

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::domain::entities::ProductRecord;
use crate::domain::repositories::{SnapshotError, SnapshotRepository};

/// Snapshot stored as a single JSON array in a file.
///
/// The file is UTF-8, indented with four spaces, with non-ASCII text
/// written literally. Saving writes a sibling `.tmp` file first and renames
/// it over the destination, so readers see either the old or the new
/// snapshot.
#[derive(Debug, Clone)]
pub struct JsonSnapshotRepository {
    path: PathBuf,
}

impl JsonSnapshotRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("snapshot"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> SnapshotError {
        SnapshotError::Io {
            location: self.location(),
            source,
        }
    }
}

/// Serializes records as a four-space indented JSON array.
pub fn to_pretty_json(records: &[ProductRecord]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut serializer)?;
    Ok(buf)
}

#[async_trait]
impl SnapshotRepository for JsonSnapshotRepository {
    async fn save(&self, records: &[ProductRecord]) -> Result<(), SnapshotError> {
        let bytes = to_pretty_json(records).map_err(|source| SnapshotError::Format {
            location: self.location(),
            source,
        })?;

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, bytes)
            .await
            .map_err(|e| self.io_error(e))?;

        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(self.io_error(e));
        }

        Ok(())
    }

    async fn load(&self) -> Result<Vec<ProductRecord>, SnapshotError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&content).map_err(|source| SnapshotError::Format {
            location: self.location(),
            source,
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
