//! Upstream content sources used by the scrape pipeline.

pub mod page_fetcher;

pub use page_fetcher::{FetchError, PageFetcher};

#[cfg(test)]
pub use page_fetcher::MockPageFetcher;
