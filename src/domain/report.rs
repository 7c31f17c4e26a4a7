//! Reporting collaborator for the scrape pipeline.
//!
//! Pipeline components never log directly. They describe what happened as a
//! [`ScrapeEvent`] and hand it to the injected [`ScrapeReporter`], which
//! decides how to surface it. Production wiring uses
//! [`crate::infrastructure::reporting::TracingReporter`].

use std::fmt;

/// Why a listing entry was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingName,
    MissingLink,
    MissingImage,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let field = match self {
            Self::MissingName => "name",
            Self::MissingLink => "link",
            Self::MissingImage => "image",
        };
        write!(f, "required field `{}` missing", field)
    }
}

/// Severity class of a [`ScrapeEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Upstream unreachable or returned an error status.
    Transport,
    /// Expected markup or payload shape was absent.
    Structural,
    /// Snapshot could not be written.
    Persistence,
    Progress,
}

/// Something noteworthy that happened during a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeEvent {
    /// A page or API request failed; the caller continues with no content.
    FetchFailed { url: String, reason: String },
    /// The listing page held no menu-item containers.
    NoListingItems,
    /// A listing entry lacked a required field and was dropped.
    EntrySkipped { position: usize, reason: SkipReason },
    /// The item id was not in the link and was read from detail page markup.
    ItemIdFromMarkup { link: String, item_id: String },
    /// No item id could be derived; nutrition lookup is skipped.
    ItemIdMissing { link: String },
    /// The nutrition API answered with a body that is not the expected JSON.
    NutritionUnparseable { item_id: String, reason: String },
    /// A record was assembled for a listing entry.
    EntryResolved { name: String },
    SnapshotWritten { location: String, records: usize },
    SnapshotFailed { location: String, reason: String },
}

impl ScrapeEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::FetchFailed { .. } => EventKind::Transport,
            Self::NoListingItems
            | Self::EntrySkipped { .. }
            | Self::ItemIdMissing { .. }
            | Self::NutritionUnparseable { .. } => EventKind::Structural,
            Self::SnapshotFailed { .. } => EventKind::Persistence,
            Self::ItemIdFromMarkup { .. }
            | Self::EntryResolved { .. }
            | Self::SnapshotWritten { .. } => EventKind::Progress,
        }
    }
}

impl fmt::Display for ScrapeEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::FetchFailed { url, reason } => write!(f, "Failed to fetch {}: {}", url, reason),
            Self::NoListingItems => write!(f, "No product items found on the listing page"),
            Self::EntrySkipped { position, reason } => {
                write!(f, "Skipped listing entry #{}: {}", position, reason)
            }
            Self::ItemIdFromMarkup { link, item_id } => {
                write!(f, "Found item id {} in page markup for {}", item_id, link)
            }
            Self::ItemIdMissing { link } => write!(f, "Could not find item id for {}", link),
            Self::NutritionUnparseable { item_id, reason } => write!(
                f,
                "Unexpected nutrition payload for item {}: {}",
                item_id, reason
            ),
            Self::EntryResolved { name } => write!(f, "Resolved product {}", name),
            Self::SnapshotWritten { location, records } => {
                write!(f, "Saved {} records to {}", records, location)
            }
            Self::SnapshotFailed { location, reason } => {
                write!(f, "Failed to save snapshot to {}: {}", location, reason)
            }
        }
    }
}

/// Sink for pipeline events.
///
/// Implementations must be thread-safe; the pipeline holds them behind `Arc`.
pub trait ScrapeReporter: Send + Sync {
    fn report(&self, event: ScrapeEvent);
}
