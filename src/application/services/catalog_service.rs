//! Catalog scrape pipeline: listing page to persisted snapshot.

use std::sync::Arc;

use crate::application::parsing::parse_listing;
use crate::application::services::detail_resolver::DetailResolver;
use crate::application::services::page_loader::PageLoader;
use crate::domain::entities::ProductRecord;
use crate::domain::report::{ScrapeEvent, ScrapeReporter, SkipReason};
use crate::domain::repositories::{SnapshotError, SnapshotRepository};
use crate::domain::sources::PageFetcher;

/// Upstream locations the pipeline reads from.
#[derive(Debug, Clone)]
pub struct ScrapeSettings {
    pub menu_url: String,
    pub base_url: String,
    pub nutrition_url_template: String,
}

/// Records collected from one listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogRun {
    pub records: Vec<ProductRecord>,
    /// 1-based container position and reason for each dropped entry.
    pub skipped: Vec<(usize, SkipReason)>,
}

/// Summary of a completed pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub records: usize,
    pub skipped: usize,
}

/// Runs the scrape pipeline.
///
/// The run is strictly sequential: one listing fetch, then the detail and
/// nutrition requests of each entry in document order. Only a failure to
/// write the snapshot ends the run with an error.
pub struct CatalogService<F: PageFetcher, S: SnapshotRepository> {
    loader: PageLoader<F>,
    resolver: DetailResolver<F>,
    repository: Arc<S>,
    menu_url: String,
    reporter: Arc<dyn ScrapeReporter>,
}

impl<F: PageFetcher, S: SnapshotRepository> CatalogService<F, S> {
    /// Creates a new catalog service.
    pub fn new(
        fetcher: Arc<F>,
        repository: Arc<S>,
        reporter: Arc<dyn ScrapeReporter>,
        settings: ScrapeSettings,
    ) -> Self {
        let loader = PageLoader::new(fetcher, reporter.clone());
        let resolver = DetailResolver::new(
            loader.clone(),
            settings.base_url,
            settings.nutrition_url_template,
            reporter.clone(),
        );

        Self {
            loader,
            resolver,
            repository,
            menu_url: settings.menu_url,
            reporter,
        }
    }

    /// Replaces the detail resolver, e.g. to change its label vocabulary.
    pub fn with_resolver(mut self, resolver: DetailResolver<F>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Fetches the listing page, resolves every entry and writes the snapshot.
    ///
    /// An unreachable or empty listing page produces an empty snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the snapshot cannot be written.
    pub async fn run(&self) -> Result<RunReport, SnapshotError> {
        let html = self.loader.load(&self.menu_url).await.unwrap_or_default();
        let run = self.collect(&html).await;

        self.persist(&run.records).await?;

        Ok(RunReport {
            records: run.records.len(),
            skipped: run.skipped.len(),
        })
    }

    /// Parses listing `html` and resolves each well-formed entry into a record.
    ///
    /// Malformed entries are reported and skipped; siblings are unaffected.
    pub async fn collect(&self, html: &str) -> CatalogRun {
        let outcomes = parse_listing(html);
        if outcomes.is_empty() {
            self.reporter.report(ScrapeEvent::NoListingItems);
        }

        let mut run = CatalogRun::default();

        for (index, outcome) in outcomes.into_iter().enumerate() {
            let position = index + 1;
            match outcome {
                Ok(entry) => {
                    let details = self.resolver.resolve(&entry.link).await;
                    self.reporter.report(ScrapeEvent::EntryResolved {
                        name: entry.name.clone(),
                    });
                    run.records.push(ProductRecord::assemble(entry, details));
                }
                Err(reason) => {
                    self.reporter
                        .report(ScrapeEvent::EntrySkipped { position, reason });
                    run.skipped.push((position, reason));
                }
            }
        }

        run
    }

    async fn persist(&self, records: &[ProductRecord]) -> Result<(), SnapshotError> {
        let location = self.repository.location();

        match self.repository.save(records).await {
            Ok(()) => {
                self.reporter.report(ScrapeEvent::SnapshotWritten {
                    location,
                    records: records.len(),
                });
                Ok(())
            }
            Err(e) => {
                self.reporter.report(ScrapeEvent::SnapshotFailed {
                    location,
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NutrientField, NutrientLabels};
    use crate::domain::report::testing::RecordingReporter;
    use crate::domain::repositories::MockSnapshotRepository;
    use crate::domain::sources::{FetchError, MockPageFetcher};

    const MENU_URL: &str = "https://shop.example/ua/fullmenu.html";

    fn settings() -> ScrapeSettings {
        ScrapeSettings {
            menu_url: MENU_URL.to_string(),
            base_url: "https://shop.example".to_string(),
            nutrition_url_template: "https://shop.example/api/item?id={item_id}".to_string(),
        }
    }

    fn listing_item(name: &str, href: &str, src: &str) -> String {
        format!(
            r#"<li class="cmp-category__item">
                 <a class="cmp-category__item-link" href="{href}">
                   <img class="categories-item-img" src="{src}">
                   <div class="cmp-category__item-name">{name}</div>
                 </a>
               </li>"#
        )
    }

    fn listing(items: &[String]) -> String {
        format!("<html><body><ul>{}</ul></body></html>", items.concat())
    }

    fn service(
        fetcher: MockPageFetcher,
        repository: MockSnapshotRepository,
    ) -> (
        CatalogService<MockPageFetcher, MockSnapshotRepository>,
        Arc<RecordingReporter>,
    ) {
        let reporter = Arc::new(RecordingReporter::default());
        (
            CatalogService::new(
                Arc::new(fetcher),
                Arc::new(repository),
                reporter.clone(),
                settings(),
            ),
            reporter,
        )
    }

    #[tokio::test]
    async fn test_collect_skips_malformed_entry_and_keeps_order() {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().returning(|_| Ok(String::new()));

        let (service, reporter) = service(fetcher, MockSnapshotRepository::new());

        let html = listing(&[
            listing_item("Біг Мак", "/product/1/a.html", "https://img/a.png"),
            r#"<li class="cmp-category__item"><div class="cmp-category__item-name">Без посилання</div></li>"#
                .to_string(),
            listing_item("Фрі", "/product/3/c.html", "https://img/c.png"),
        ]);

        let run = service.collect(&html).await;

        let names: Vec<&str> = run.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Біг Мак", "Фрі"]);
        assert_eq!(run.skipped, vec![(2, SkipReason::MissingLink)]);
        assert!(reporter.events().contains(&ScrapeEvent::EntrySkipped {
            position: 2,
            reason: SkipReason::MissingLink,
        }));
    }

    #[tokio::test]
    async fn test_collect_empty_page_reports_no_items() {
        let (service, reporter) = service(MockPageFetcher::new(), MockSnapshotRepository::new());

        let run = service.collect("<html><body></body></html>").await;

        assert_eq!(run, CatalogRun::default());
        assert_eq!(reporter.events(), vec![ScrapeEvent::NoListingItems]);
    }

    #[tokio::test]
    async fn test_run_big_mac_with_nutrition_timeout() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|url| url == MENU_URL)
            .times(1)
            .returning(|_| {
                Ok(listing(&[listing_item(
                    "Біг Мак",
                    "/ua/uk-ua/product/200153/big-mac.html",
                    "https://img/bigmac.png",
                )]))
            });
        fetcher
            .expect_fetch()
            .withf(|url| url == "https://shop.example/ua/uk-ua/product/200153/big-mac.html")
            .times(1)
            .returning(|_| Ok("<html><body><h1>Біг Мак</h1></body></html>".to_string()));
        fetcher
            .expect_fetch()
            .withf(|url| url == "https://shop.example/api/item?id=200153")
            .times(1)
            .returning(|url| {
                Err(FetchError::Timeout {
                    url: url.to_string(),
                })
            });

        let expected = ProductRecord {
            name: "Біг Мак".to_string(),
            link: "/ua/uk-ua/product/200153/big-mac.html".to_string(),
            image: "https://img/bigmac.png".to_string(),
            ..ProductRecord::default()
        };

        let mut repository = MockSnapshotRepository::new();
        repository
            .expect_location()
            .returning(|| "menu_data.json".to_string());
        let saved = expected.clone();
        repository
            .expect_save()
            .withf(move |records| records.len() == 1 && records[0] == saved)
            .times(1)
            .returning(|_| Ok(()));

        let (service, reporter) = service(fetcher, repository);

        let report = service.run().await.unwrap();

        assert_eq!(report, RunReport { records: 1, skipped: 0 });
        assert!(reporter.events().contains(&ScrapeEvent::SnapshotWritten {
            location: "menu_data.json".to_string(),
            records: 1,
        }));
    }

    #[tokio::test]
    async fn test_collect_with_custom_label_vocabulary() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|url| url == "https://shop.example/product/7/shake.html")
            .times(1)
            .returning(|_| Ok(String::new()));
        fetcher
            .expect_fetch()
            .withf(|url| url == "https://shop.example/api/item?id=7")
            .times(1)
            .returning(|_| {
                Ok(r#"{"item":{"nutrient_facts":{"nutrient":[
                    {"name":"Energy","value":"350"},
                    {"name":"Калорійність","value":"999"}
                ]}}}"#
                    .to_string())
            });

        let fetcher = Arc::new(fetcher);
        let reporter = Arc::new(RecordingReporter::default());
        let settings = settings();
        let resolver = DetailResolver::new(
            PageLoader::new(fetcher.clone(), reporter.clone()),
            settings.base_url.clone(),
            settings.nutrition_url_template.clone(),
            reporter.clone(),
        )
        .with_labels(NutrientLabels::new([("Energy", NutrientField::Calories)]));

        let service = CatalogService::new(
            fetcher,
            Arc::new(MockSnapshotRepository::new()),
            reporter,
            settings,
        )
        .with_resolver(resolver);

        let run = service
            .collect(&listing(&[listing_item(
                "Шейк",
                "/product/7/shake.html",
                "https://img/shake.png",
            )]))
            .await;

        assert_eq!(run.records.len(), 1);
        assert_eq!(run.records[0].calories, "350");
    }

    #[tokio::test]
    async fn test_run_unreachable_listing_writes_empty_snapshot() {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().times(1).returning(|url| {
            Err(FetchError::Transport {
                url: url.to_string(),
                reason: "dns error".to_string(),
            })
        });

        let mut repository = MockSnapshotRepository::new();
        repository
            .expect_location()
            .returning(|| "menu_data.json".to_string());
        repository
            .expect_save()
            .withf(|records| records.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let (service, reporter) = service(fetcher, repository);

        let report = service.run().await.unwrap();

        assert_eq!(report, RunReport { records: 0, skipped: 0 });
        let events = reporter.events();
        assert!(matches!(events[0], ScrapeEvent::FetchFailed { .. }));
        assert_eq!(events[1], ScrapeEvent::NoListingItems);
    }

    #[tokio::test]
    async fn test_run_propagates_snapshot_failure() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(String::new()));

        let mut repository = MockSnapshotRepository::new();
        repository
            .expect_location()
            .returning(|| "/readonly/menu_data.json".to_string());
        repository.expect_save().times(1).returning(|_| {
            Err(SnapshotError::Io {
                location: "/readonly/menu_data.json".to_string(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        });

        let (service, reporter) = service(fetcher, repository);

        let result = service.run().await;

        assert!(matches!(result, Err(SnapshotError::Io { .. })));
        assert!(matches!(
            reporter.events().last(),
            Some(ScrapeEvent::SnapshotFailed { .. })
        ));
    }
}
