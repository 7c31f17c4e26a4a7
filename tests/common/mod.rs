#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use menu_scraper::domain::entities::ProductRecord;
use menu_scraper::domain::report::{ScrapeEvent, ScrapeReporter};
use menu_scraper::infrastructure::persistence::{JsonSnapshotRepository, to_pretty_json};
use menu_scraper::state::AppState;

/// Reporter that keeps every event for later assertions.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ScrapeEvent>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<ScrapeEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ScrapeReporter for RecordingReporter {
    fn report(&self, event: ScrapeEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// One listing container; `None` leaves the element (or attribute) out.
pub fn listing_item(name: Option<&str>, href: Option<&str>, src: Option<&str>) -> String {
    let name = name
        .map(|n| format!(r#"<div class="cmp-category__item-name">{}</div>"#, n))
        .unwrap_or_default();
    let link = match href {
        Some(h) => format!(r#"<a class="cmp-category__item-link" href="{}">"#, h),
        None => r#"<a class="cmp-category__item-link">"#.to_string(),
    };
    let image = src
        .map(|s| format!(r#"<img class="categories-item-img" src="{}" alt="">"#, s))
        .unwrap_or_default();

    format!(r#"<li class="cmp-category__item">{link}{image}{name}</a></li>"#)
}

pub fn listing_page(items: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html><html><body><ul class="cmp-category__row">{}</ul></body></html>"#,
        items.concat()
    )
}

pub fn detail_page(description: &str, item_id: Option<&str>) -> String {
    let id_attr = item_id
        .map(|id| format!(r#" data-item-id="{}""#, id))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html><html><body>
        <div class="cmp-product-details-main"{id_attr}>
          <div class="cmp-product-details-main__description">{description}</div>
        </div>
        </body></html>"#
    )
}

pub fn nutrition_body(nutrients: &[(&str, &str)]) -> String {
    let nutrient: Vec<serde_json::Value> = nutrients
        .iter()
        .map(|(name, value)| serde_json::json!({ "name": name, "value": value }))
        .collect();

    serde_json::json!({ "item": { "nutrient_facts": { "nutrient": nutrient } } }).to_string()
}

pub fn big_mac() -> ProductRecord {
    ProductRecord {
        name: "Біг Мак".to_string(),
        link: "/ua/uk-ua/product/200153/big-mac.html".to_string(),
        image: "https://s7d1.scene7.com/is/image/mcdonalds/bigmac.png".to_string(),
        description: "Два біфштекси з яловичини".to_string(),
        calories: "539".to_string(),
        fats: "28".to_string(),
        carbs: "46".to_string(),
        proteins: "25".to_string(),
        unsaturated_fats: "10".to_string(),
        sugar: "9".to_string(),
        salt: "2.2".to_string(),
        portion: "219 г".to_string(),
    }
}

pub fn fries() -> ProductRecord {
    ProductRecord {
        name: "Картопля Фрі".to_string(),
        link: "/ua/uk-ua/product/200404/fries.html".to_string(),
        image: "https://s7d1.scene7.com/is/image/mcdonalds/fries.png".to_string(),
        description: "Хрустка картопля".to_string(),
        calories: "337".to_string(),
        portion: "114 г".to_string(),
        ..ProductRecord::default()
    }
}

pub fn write_snapshot(path: &Path, records: &[ProductRecord]) {
    std::fs::write(path, to_pretty_json(records).unwrap()).unwrap();
}

pub fn snapshot_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("menu_data.json")
}

pub fn create_test_state(path: &Path) -> AppState {
    AppState::new(Arc::new(JsonSnapshotRepository::new(path)))
}
