//! Nutrition API payload parsing.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::{NutrientLabels, NutritionFacts};

#[derive(Debug, Deserialize)]
struct NutritionPayload {
    #[serde(default)]
    item: Option<ItemPayload>,
}

#[derive(Debug, Deserialize)]
struct ItemPayload {
    #[serde(default)]
    nutrient_facts: Option<NutrientFactsPayload>,
}

#[derive(Debug, Deserialize)]
struct NutrientFactsPayload {
    #[serde(default)]
    nutrient: Option<Vec<Value>>,
}

/// Parses an `itemDetails` response into nutrition facts.
///
/// Expected shape: `{ item: { nutrient_facts: { nutrient: [ {name, value} ] } } }`.
/// Missing levels mean no nutrients. Entries are matched through `labels`;
/// entries that are not objects, lack a string `name` or carry an unknown
/// label are ignored.
///
/// # Errors
///
/// Returns the JSON error when `body` is not a JSON object of that shape.
pub fn parse_nutrition(body: &str, labels: &NutrientLabels) -> Result<NutritionFacts, serde_json::Error> {
    let payload: NutritionPayload = serde_json::from_str(body)?;

    let nutrients = payload
        .item
        .and_then(|item| item.nutrient_facts)
        .and_then(|facts| facts.nutrient)
        .unwrap_or_default();

    Ok(labels.collect(nutrients.iter().filter_map(|nutrient| {
        let name = nutrient.get("name")?.as_str()?;
        let value = nutrient.get("value").unwrap_or(&Value::Null);
        Some((name, value_to_string(value)))
    })))
}

/// Passes a value through as text without unit or number normalization.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
