//! Nutrition facts and the label vocabulary used to read them.

use std::collections::{BTreeMap, HashMap};

/// The fixed set of nutrient keys stored on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NutrientField {
    Portion,
    Calories,
    Fats,
    UnsaturatedFats,
    Carbs,
    Sugar,
    Proteins,
    Salt,
}

impl NutrientField {
    pub const ALL: [NutrientField; 8] = [
        NutrientField::Portion,
        NutrientField::Calories,
        NutrientField::Fats,
        NutrientField::UnsaturatedFats,
        NutrientField::Carbs,
        NutrientField::Sugar,
        NutrientField::Proteins,
        NutrientField::Salt,
    ];

    /// Record key for this nutrient.
    pub fn key(self) -> &'static str {
        match self {
            NutrientField::Portion => "portion",
            NutrientField::Calories => "calories",
            NutrientField::Fats => "fats",
            NutrientField::UnsaturatedFats => "unsaturated_fats",
            NutrientField::Carbs => "carbs",
            NutrientField::Sugar => "sugar",
            NutrientField::Proteins => "proteins",
            NutrientField::Salt => "salt",
        }
    }
}

/// Nutrient values keyed by [`NutrientField`].
///
/// Values are passed through exactly as the source returned them. A field
/// with no value reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NutritionFacts {
    values: BTreeMap<NutrientField, String>,
}

impl NutritionFacts {
    /// Facts with all eight keys present and empty.
    pub fn empty() -> Self {
        Self {
            values: NutrientField::ALL
                .into_iter()
                .map(|field| (field, String::new()))
                .collect(),
        }
    }

    pub fn set(&mut self, field: NutrientField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: NutrientField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Returns true when no nutrient carries a value.
    pub fn is_blank(&self) -> bool {
        self.values.values().all(String::is_empty)
    }
}

/// Label-to-field table for the nutrient names returned by the nutrition API.
///
/// Labels are matched exactly. Unknown labels are ignored.
#[derive(Debug, Clone)]
pub struct NutrientLabels {
    labels: HashMap<String, NutrientField>,
}

impl NutrientLabels {
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, NutrientField)>,
        S: Into<String>,
    {
        Self {
            labels: pairs
                .into_iter()
                .map(|(label, field)| (label.into(), field))
                .collect(),
        }
    }

    /// Vocabulary used by the Ukrainian storefront.
    pub fn ukrainian() -> Self {
        Self::new([
            ("Вага порції", NutrientField::Portion),
            ("Калорійність", NutrientField::Calories),
            ("Жири", NutrientField::Fats),
            ("НЖК", NutrientField::UnsaturatedFats),
            ("Вуглеводи", NutrientField::Carbs),
            ("Цукор", NutrientField::Sugar),
            ("Білки", NutrientField::Proteins),
            ("Сіль", NutrientField::Salt),
        ])
    }

    pub fn field_for(&self, label: &str) -> Option<NutrientField> {
        self.labels.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Builds facts from `(label, value)` pairs.
    ///
    /// Starts from [`NutritionFacts::empty`]; a repeated label keeps the last value.
    pub fn collect<'a, I>(&self, nutrients: I) -> NutritionFacts
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut facts = NutritionFacts::empty();
        for (label, value) in nutrients {
            if let Some(field) = self.field_for(label) {
                facts.set(field, value);
            }
        }
        facts
    }
}

impl Default for NutrientLabels {
    fn default() -> Self {
        Self::ukrainian()
    }
}
