//! Product entities produced by the scrape pipeline.

use serde::{Deserialize, Deserializer, Serialize};

use super::nutrition::{NutrientField, NutritionFacts};

/// Record keys in snapshot order.
pub const RECORD_FIELDS: [&str; 12] = [
    "name",
    "link",
    "image",
    "description",
    "calories",
    "fats",
    "carbs",
    "proteins",
    "unsaturated_fats",
    "sugar",
    "salt",
    "portion",
];

/// Minimal entry stub taken directly from the listing page.
///
/// All three fields are non-empty: the listing parser drops containers that
/// lack any of them instead of emitting blanks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductEntry {
    pub name: String,
    pub link: String,
    pub image: String,
}

impl ProductEntry {
    /// Creates a new entry stub.
    pub fn new(name: impl Into<String>, link: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            image: image.into(),
        }
    }
}

/// Supplementary data resolved from an entry's detail page and the nutrition API.
///
/// `None` means the value could not be determined at all; the record
/// assembler turns it into empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDetails {
    pub description: Option<String>,
    pub nutrition: Option<NutritionFacts>,
}

/// Reads `null` as an empty string, as written by older snapshot producers.
fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A fully assembled catalog record, the unit of storage and lookup.
///
/// Every field is always present as a string (possibly empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub link: String,
    pub image: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub description: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub calories: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub fats: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub carbs: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub proteins: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub unsaturated_fats: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub sugar: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub salt: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub portion: String,
}

impl ProductRecord {
    /// Folds an entry stub and its resolved details into the canonical record shape.
    ///
    /// Missing description or nutrition data become empty strings.
    pub fn assemble(entry: ProductEntry, details: ProductDetails) -> Self {
        let nutrition = details.nutrition.unwrap_or_default();

        Self {
            name: entry.name,
            link: entry.link,
            image: entry.image,
            description: details.description.unwrap_or_default(),
            calories: nutrition.get(NutrientField::Calories).to_string(),
            fats: nutrition.get(NutrientField::Fats).to_string(),
            carbs: nutrition.get(NutrientField::Carbs).to_string(),
            proteins: nutrition.get(NutrientField::Proteins).to_string(),
            unsaturated_fats: nutrition.get(NutrientField::UnsaturatedFats).to_string(),
            sugar: nutrition.get(NutrientField::Sugar).to_string(),
            salt: nutrition.get(NutrientField::Salt).to_string(),
            portion: nutrition.get(NutrientField::Portion).to_string(),
        }
    }

    /// Returns the value stored under a record key, or `None` for unknown keys.
    pub fn field(&self, key: &str) -> Option<&str> {
        let value = match key {
            "name" => &self.name,
            "link" => &self.link,
            "image" => &self.image,
            "description" => &self.description,
            "calories" => &self.calories,
            "fats" => &self.fats,
            "carbs" => &self.carbs,
            "proteins" => &self.proteins,
            "unsaturated_fats" => &self.unsaturated_fats,
            "sugar" => &self.sugar,
            "salt" => &self.salt,
            "portion" => &self.portion,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Case-insensitive exact name comparison used by lookups.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
