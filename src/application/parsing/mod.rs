//! Pure parsers for upstream pages and payloads.
//!
//! - [`listing`] - Listing page into entry stubs or skip reasons
//! - [`detail`] - Detail page description, item id and link resolution
//! - [`nutrition`] - Nutrition API JSON into nutrition facts
//!
//! Parsers own no I/O. `scraper::Html` documents are dropped before the
//! functions return, so callers can hold the results across `.await`.

pub mod detail;
pub mod listing;
pub mod nutrition;

pub use detail::{DetailPage, item_id_from_link, resolve_link};
pub use listing::{EntryOutcome, parse_listing};
pub use nutrition::parse_nutrition;
