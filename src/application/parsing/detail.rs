//! Detail page parsing and item identifier derivation.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

static DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.cmp-product-details-main__description").expect("Invalid selector")
});
static DETAILS_MAIN_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.cmp-product-details-main").expect("Invalid selector"));
static PRODUCT_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"product/(\d+)").expect("Invalid regex"));

/// Data read from a product detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPage {
    /// Trimmed text of the description block, if the block exists.
    pub description: Option<String>,
    /// Value of the `data-item-id` attribute on the main details block.
    pub item_id: Option<String>,
}

impl DetailPage {
    /// Parses a detail page. Empty or unrelated markup yields an empty page.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);

        let description = document
            .select(&DESCRIPTION_SELECTOR)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string());

        let item_id = document
            .select(&DETAILS_MAIN_SELECTOR)
            .next()
            .and_then(|el| el.value().attr("data-item-id"))
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        Self {
            description,
            item_id,
        }
    }
}

/// Extracts the numeric item id from a `.../product/<digits>/...` link.
pub fn item_id_from_link(link: &str) -> Option<String> {
    PRODUCT_ID_PATTERN
        .captures(link)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Resolves a listing link against the site base URL.
///
/// Absolute `http(s)` links are returned unchanged.
pub fn resolve_link(base_url: &str, link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        return link.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        link.trim_start_matches('/')
    )
}
