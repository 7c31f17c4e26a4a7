//! Detail page and nutrition resolution for a single listing entry.

use std::sync::Arc;

use crate::application::parsing::{DetailPage, item_id_from_link, parse_nutrition, resolve_link};
use crate::application::services::page_loader::PageLoader;
use crate::domain::entities::{NutrientLabels, NutritionFacts, ProductDetails};
use crate::domain::report::{ScrapeEvent, ScrapeReporter};
use crate::domain::sources::PageFetcher;

/// Placeholder replaced by the item id in the nutrition URL template.
pub const ITEM_ID_PLACEHOLDER: &str = "{item_id}";

/// Resolves description and nutrition facts for listing entries.
///
/// Every failure mode degrades to empty values:
/// - missing description block → no description
/// - no item id in link or markup → no nutrition request at all
/// - failed or malformed nutrition response → all eight nutrients empty
pub struct DetailResolver<F: PageFetcher> {
    loader: PageLoader<F>,
    base_url: String,
    nutrition_url_template: String,
    labels: NutrientLabels,
    reporter: Arc<dyn ScrapeReporter>,
}

impl<F: PageFetcher> DetailResolver<F> {
    /// Creates a resolver using the Ukrainian nutrient vocabulary.
    pub fn new(
        loader: PageLoader<F>,
        base_url: impl Into<String>,
        nutrition_url_template: impl Into<String>,
        reporter: Arc<dyn ScrapeReporter>,
    ) -> Self {
        Self {
            loader,
            base_url: base_url.into(),
            nutrition_url_template: nutrition_url_template.into(),
            labels: NutrientLabels::ukrainian(),
            reporter,
        }
    }

    /// Replaces the nutrient label vocabulary.
    pub fn with_labels(mut self, labels: NutrientLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Resolves the details for an entry's relative `link`.
    ///
    /// # Request Flow
    ///
    /// 1. Fetch the detail page at `<base_url><link>`
    /// 2. Read the description block
    /// 3. Take the item id from the link, falling back to page markup
    /// 4. Fetch nutrition facts when an id was found
    pub async fn resolve(&self, link: &str) -> ProductDetails {
        let detail_url = resolve_link(&self.base_url, link);
        let html = self.loader.load(&detail_url).await.unwrap_or_default();
        let page = DetailPage::parse(&html);

        let nutrition = match self.item_id(link, page.item_id) {
            Some(item_id) => Some(self.fetch_nutrition(&item_id).await),
            None => None,
        };

        ProductDetails {
            description: page.description,
            nutrition,
        }
    }

    /// Fetches nutrition facts for `item_id`.
    ///
    /// Always returns all eight keys; they are empty when the request fails
    /// or the payload cannot be parsed.
    pub async fn fetch_nutrition(&self, item_id: &str) -> NutritionFacts {
        let url = self.nutrition_url(item_id);
        let Some(body) = self.loader.load(&url).await else {
            return NutritionFacts::empty();
        };

        match parse_nutrition(&body, &self.labels) {
            Ok(facts) => facts,
            Err(e) => {
                self.reporter.report(ScrapeEvent::NutritionUnparseable {
                    item_id: item_id.to_string(),
                    reason: e.to_string(),
                });
                NutritionFacts::empty()
            }
        }
    }

    pub fn nutrition_url(&self, item_id: &str) -> String {
        self.nutrition_url_template
            .replace(ITEM_ID_PLACEHOLDER, item_id)
    }

    /// The link wins over markup when both carry an id.
    fn item_id(&self, link: &str, markup_id: Option<String>) -> Option<String> {
        if let Some(item_id) = item_id_from_link(link) {
            return Some(item_id);
        }

        match markup_id {
            Some(item_id) => {
                self.reporter.report(ScrapeEvent::ItemIdFromMarkup {
                    link: link.to_string(),
                    item_id: item_id.clone(),
                });
                Some(item_id)
            }
            None => {
                self.reporter.report(ScrapeEvent::ItemIdMissing {
                    link: link.to_string(),
                });
                None
            }
        }
    }
}
