//! Core domain entities representing the catalog data model.
//!
//! # Entity Types
//!
//! - [`ProductEntry`] - Entry stub read from the listing page
//! - [`ProductDetails`] - Description and nutrition resolved per entry
//! - [`ProductRecord`] - Assembled, persisted catalog record
//! - [`NutritionFacts`] - Nutrient values keyed by [`NutrientField`]
//! - [`NutrientLabels`] - Label vocabulary used to read the nutrition API

pub mod nutrition;
pub mod product;

pub use nutrition::{NutrientField, NutrientLabels, NutritionFacts};
pub use product::{ProductDetails, ProductEntry, ProductRecord, RECORD_FIELDS};
