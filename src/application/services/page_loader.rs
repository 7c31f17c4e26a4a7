//! Page loading with transport failures folded into "no content".

use std::sync::Arc;

use crate::domain::report::{ScrapeEvent, ScrapeReporter};
use crate::domain::sources::PageFetcher;

/// Wraps a [`PageFetcher`] so that callers never see transport errors.
///
/// A failed request is reported as [`ScrapeEvent::FetchFailed`] and comes back
/// as `None`; callers degrade to empty parse results.
pub struct PageLoader<F: PageFetcher> {
    fetcher: Arc<F>,
    reporter: Arc<dyn ScrapeReporter>,
}

impl<F: PageFetcher> PageLoader<F> {
    pub fn new(fetcher: Arc<F>, reporter: Arc<dyn ScrapeReporter>) -> Self {
        Self { fetcher, reporter }
    }

    /// Fetches `url`, returning `None` when the request failed.
    pub async fn load(&self, url: &str) -> Option<String> {
        match self.fetcher.fetch(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                self.reporter.report(ScrapeEvent::FetchFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                });
                None
            }
        }
    }
}

impl<F: PageFetcher> Clone for PageLoader<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: self.fetcher.clone(),
            reporter: self.reporter.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::testing::RecordingReporter;
    use crate::domain::sources::{FetchError, MockPageFetcher};

    #[tokio::test]
    async fn test_load_success() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|url| url == "https://example.com/menu")
            .times(1)
            .returning(|_| Ok("<html></html>".to_string()));

        let reporter = Arc::new(RecordingReporter::default());
        let loader = PageLoader::new(Arc::new(fetcher), reporter.clone());

        assert_eq!(
            loader.load("https://example.com/menu").await,
            Some("<html></html>".to_string())
        );
        assert!(reporter.events().is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_is_reported_and_empty() {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().times(1).returning(|url| {
            Err(FetchError::Status {
                url: url.to_string(),
                status: 503,
            })
        });

        let reporter = Arc::new(RecordingReporter::default());
        let loader = PageLoader::new(Arc::new(fetcher), reporter.clone());

        assert_eq!(loader.load("https://example.com/menu").await, None);
        assert_eq!(
            reporter.events(),
            vec![ScrapeEvent::FetchFailed {
                url: "https://example.com/menu".to_string(),
                reason: "request to https://example.com/menu returned HTTP 503".to_string(),
            }]
        );
    }
}
