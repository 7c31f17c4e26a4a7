//! Listing page parsing: menu-item containers into entry stubs.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::domain::entities::ProductEntry;
use crate::domain::report::SkipReason;

static ITEM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li.cmp-category__item").expect("Invalid selector"));
static NAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.cmp-category__item-name").expect("Invalid selector"));
static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.cmp-category__item-link").expect("Invalid selector"));
static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img.categories-item-img").expect("Invalid selector"));

/// Outcome of reading one menu-item container.
pub type EntryOutcome = Result<ProductEntry, SkipReason>;

/// Reads every menu-item container of the listing page, in document order.
///
/// Each container yields either an entry stub or the reason it was skipped.
/// A page without containers (including empty input) yields an empty list.
pub fn parse_listing(html: &str) -> Vec<EntryOutcome> {
    let document = Html::parse_document(html);
    document.select(&ITEM_SELECTOR).map(parse_entry).collect()
}

fn parse_entry(item: ElementRef<'_>) -> EntryOutcome {
    let name = item
        .select(&NAME_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or(SkipReason::MissingName)?;

    let link = first_attr(item, &LINK_SELECTOR, "href").ok_or(SkipReason::MissingLink)?;
    let image = first_attr(item, &IMAGE_SELECTOR, "src").ok_or(SkipReason::MissingImage)?;

    Ok(ProductEntry { name, link, image })
}

/// Non-empty attribute of the first element matching `selector`.
fn first_attr(item: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    item.select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: Option<&str>, href: Option<&str>, src: Option<&str>) -> String {
        let name = name
            .map(|n| format!(r#"<div class="cmp-category__item-name"> {} </div>"#, n))
            .unwrap_or_default();
        let link = href
            .map(|h| format!(r#"<a class="cmp-category__item-link" href="{}">open</a>"#, h))
            .unwrap_or_else(|| r#"<a class="cmp-category__item-link">open</a>"#.to_string());
        let image = src
            .map(|s| format!(r#"<img class="categories-item-img" src="{}">"#, s))
            .unwrap_or_default();
        format!(r#"<li class="cmp-category__item">{link}{image}{name}</li>"#)
    }

    fn page(items: &[String]) -> String {
        format!(
            r#"<html><body><ul class="cmp-category__row">{}</ul></body></html>"#,
            items.concat()
        )
    }

    #[test]
    fn test_parse_listing_preserves_document_order() {
        let html = page(&[
            item(Some("Біг Мак"), Some("/product/200153/big-mac.html"), Some("https://img/1.png")),
            item(Some("Чізбургер"), Some("/product/200300/cheese.html"), Some("https://img/2.png")),
            item(Some("Фрі"), Some("/product/200400/fries.html"), Some("https://img/3.png")),
        ]);

        let outcomes = parse_listing(&html);

        let names: Vec<String> = outcomes
            .into_iter()
            .map(|o| o.unwrap().name)
            .collect();
        assert_eq!(names, vec!["Біг Мак", "Чізбургер", "Фрі"]);
    }

    #[test]
    fn test_parse_entry_trims_name() {
        let html = page(&[item(
            Some("Біг Мак"),
            Some("/ua/uk-ua/product/200153/big-mac.html"),
            Some("https://img/bigmac.png"),
        )]);

        let outcomes = parse_listing(&html);

        assert_eq!(
            outcomes,
            vec![Ok(ProductEntry::new(
                "Біг Мак",
                "/ua/uk-ua/product/200153/big-mac.html",
                "https://img/bigmac.png"
            ))]
        );
    }

    #[test]
    fn test_missing_fields_are_reported_per_entry() {
        let html = page(&[
            item(None, Some("/product/1/a.html"), Some("https://img/a.png")),
            item(Some("Б"), None, Some("https://img/b.png")),
            item(Some("В"), Some("/product/3/c.html"), None),
            item(Some("Г"), Some("/product/4/d.html"), Some("https://img/d.png")),
        ]);

        let outcomes = parse_listing(&html);

        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[0], Err(SkipReason::MissingName));
        assert_eq!(outcomes[1], Err(SkipReason::MissingLink));
        assert_eq!(outcomes[2], Err(SkipReason::MissingImage));
        assert_eq!(outcomes[3].as_ref().unwrap().name, "Г");
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let html = page(&[
            item(Some("   "), Some("/product/1/a.html"), Some("https://img/a.png")),
            item(Some("Б"), Some(""), Some("https://img/b.png")),
        ]);

        let outcomes = parse_listing(&html);

        assert_eq!(
            outcomes,
            vec![Err(SkipReason::MissingName), Err(SkipReason::MissingLink)]
        );
    }

    #[test]
    fn test_page_without_containers() {
        assert!(parse_listing("").is_empty());
        assert!(parse_listing("<html><body><p>Технічні роботи</p></body></html>").is_empty());
    }
}
