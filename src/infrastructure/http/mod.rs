//! HTTP clients for upstream pages and APIs.

mod reqwest_fetcher;

pub use reqwest_fetcher::HttpPageFetcher;
