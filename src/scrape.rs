//! One-shot scrape run wiring the pipeline to its real collaborators.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::application::services::{CatalogService, RunReport};
use crate::config::Config;
use crate::infrastructure::http::HttpPageFetcher;
use crate::infrastructure::persistence::JsonSnapshotRepository;
use crate::infrastructure::reporting::TracingReporter;

/// Scrapes the configured menu and writes the snapshot.
///
/// Upstream failures only shrink the catalog; the run fails when the HTTP
/// client cannot be built or the snapshot cannot be written.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be initialized or the
/// snapshot write fails.
pub async fn run(config: &Config) -> Result<RunReport> {
    let fetcher = HttpPageFetcher::new(config.http_timeout(), &config.user_agent)
        .context("Failed to build HTTP client")?;
    let repository = JsonSnapshotRepository::new(config.snapshot_path.clone());

    let service = CatalogService::new(
        Arc::new(fetcher),
        Arc::new(repository),
        Arc::new(TracingReporter::new()),
        config.scrape_settings(),
    );

    tracing::info!("Scraping {}", config.menu_url);

    let report = service
        .run()
        .await
        .context("Failed to write product snapshot")?;

    if report.records == 0 {
        tracing::warn!("No products were collected from {}", config.menu_url);
    }

    tracing::info!(
        "Scrape finished: {} products saved, {} entries skipped",
        report.records,
        report.skipped
    );

    Ok(report)
}
