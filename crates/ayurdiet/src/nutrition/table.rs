use super::import::{parse_rows, NutrientImportError};
use super::record::{DoshaEffect, NutrientRecord};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Ingredient nutrient reference keyed by lowercase ingredient name.
#[derive(Debug, Clone, Default)]
pub struct NutrientTable {
    records: BTreeMap<String, NutrientRecord>,
}

/// Key and display label for ingredient pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientOption {
    pub value: String,
    pub label: String,
}

impl NutrientTable {
    pub fn standard() -> Self {
        let mut table = Self::default();
        for (key, record) in standard_records() {
            table.insert(key, record);
        }
        table
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, NutrientImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, NutrientImportError> {
        let mut table = Self::default();
        for (key, record) in parse_rows(reader)? {
            table.insert(&key, record);
        }
        Ok(table)
    }

    pub fn insert(&mut self, key: &str, record: NutrientRecord) -> Option<NutrientRecord> {
        self.records.insert(normalize_key(key), record)
    }

    /// Entries from `other` replace entries with the same key.
    pub fn merge(&mut self, other: NutrientTable) {
        self.records.extend(other.records);
    }

    pub fn lookup(&self, name: &str) -> Option<&NutrientRecord> {
        self.records.get(&normalize_key(name))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn available_ingredients(&self) -> Vec<IngredientOption> {
        self.records
            .iter()
            .map(|(key, record)| IngredientOption {
                value: key.clone(),
                label: record.name.clone(),
            })
            .collect()
    }
}

pub(crate) fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[allow(clippy::too_many_arguments)]
fn record(
    name: &str,
    quantity: &str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    calcium: f64,
    iron: f64,
    magnesium: f64,
    effect: DoshaEffect,
) -> NutrientRecord {
    NutrientRecord {
        name: name.to_string(),
        quantity: quantity.to_string(),
        calories,
        protein,
        carbs,
        fat,
        fiber,
        calcium,
        iron,
        magnesium,
        dosha_effect: effect,
    }
}

fn standard_records() -> Vec<(&'static str, NutrientRecord)> {
    vec![
        (
            "rice",
            record(
                "Rice (1 cup cooked)",
                "150g",
                206.0,
                4.3,
                44.5,
                0.3,
                0.6,
                10.0,
                0.2,
                19.0,
                DoshaEffect::new(-1, 0, 1),
            ),
        ),
        (
            "wheat",
            record(
                "Wheat (whole grain, 1 cup)",
                "170g",
                567.0,
                16.4,
                117.8,
                2.4,
                18.7,
                54.0,
                4.1,
                138.0,
                DoshaEffect::new(-1, -1, 1),
            ),
        ),
        (
            "oats",
            record(
                "Oats (dry, 1 cup)",
                "150g",
                607.0,
                26.4,
                103.8,
                10.7,
                16.5,
                191.0,
                8.2,
                177.0,
                DoshaEffect::new(-1, 0, 0),
            ),
        ),
        (
            "dal",
            record(
                "Moong Dal (cooked, 1 cup)",
                "202g",
                213.0,
                14.9,
                38.3,
                0.8,
                15.4,
                27.0,
                2.4,
                48.0,
                DoshaEffect::new(-1, 0, 1),
            ),
        ),
        (
            "spinach",
            record(
                "Spinach (raw, 1 cup)",
                "30g",
                7.0,
                0.9,
                1.1,
                0.1,
                0.7,
                30.0,
                0.8,
                24.0,
                DoshaEffect::new(-1, -1, -1),
            ),
        ),
        (
            "carrot",
            record(
                "Carrot (medium, raw)",
                "61g",
                25.0,
                0.6,
                5.8,
                0.1,
                1.7,
                20.0,
                0.2,
                8.0,
                DoshaEffect::new(-1, -1, 0),
            ),
        ),
        (
            "broccoli",
            record(
                "Broccoli (1 cup chopped)",
                "91g",
                31.0,
                2.6,
                5.6,
                0.4,
                2.2,
                42.0,
                0.6,
                15.0,
                DoshaEffect::new(-1, 0, -1),
            ),
        ),
        (
            "tomato",
            record(
                "Tomato (medium)",
                "123g",
                22.0,
                1.1,
                4.8,
                0.2,
                1.5,
                12.0,
                0.3,
                11.0,
                DoshaEffect::new(-1, 1, -1),
            ),
        ),
        (
            "chicken",
            record(
                "Chicken Breast (100g)",
                "100g",
                165.0,
                31.0,
                0.0,
                3.6,
                0.0,
                15.0,
                0.9,
                26.0,
                DoshaEffect::new(0, 1, -1),
            ),
        ),
        (
            "paneer",
            record(
                "Paneer (100g)",
                "100g",
                265.0,
                25.4,
                3.6,
                17.4,
                0.0,
                389.0,
                0.2,
                19.0,
                DoshaEffect::new(-1, 0, 0),
            ),
        ),
        (
            "lentil",
            record(
                "Lentil (cooked, 1 cup)",
                "198g",
                230.0,
                17.9,
                39.9,
                0.8,
                15.3,
                38.0,
                6.6,
                71.0,
                DoshaEffect::new(-1, -1, 1),
            ),
        ),
        (
            "ghee",
            record(
                "Ghee (1 tablespoon)",
                "14g",
                120.0,
                0.0,
                0.0,
                13.6,
                0.0,
                5.0,
                0.0,
                0.0,
                DoshaEffect::new(-1, -1, 1),
            ),
        ),
        (
            "coconut oil",
            record(
                "Coconut Oil (1 tablespoon)",
                "14g",
                117.0,
                0.0,
                0.0,
                13.5,
                0.0,
                0.0,
                0.0,
                0.0,
                DoshaEffect::new(-1, -1, 1),
            ),
        ),
        (
            "turmeric",
            record(
                "Turmeric (1 teaspoon)",
                "2.9g",
                8.0,
                0.3,
                1.4,
                0.1,
                0.4,
                15.0,
                3.1,
                5.0,
                DoshaEffect::new(-1, -1, -1),
            ),
        ),
        (
            "ginger",
            record(
                "Ginger (1 teaspoon)",
                "2g",
                5.0,
                0.1,
                1.1,
                0.1,
                0.1,
                2.0,
                0.1,
                2.0,
                DoshaEffect::new(-1, 0, -1),
            ),
        ),
        (
            "cumin",
            record(
                "Cumin (1 teaspoon)",
                "2g",
                8.0,
                0.4,
                0.9,
                0.4,
                0.2,
                20.0,
                1.4,
                10.0,
                DoshaEffect::new(-1, 0, -1),
            ),
        ),
        (
            "banana",
            record(
                "Banana (medium)",
                "118g",
                105.0,
                1.3,
                26.9,
                0.3,
                3.1,
                5.0,
                0.3,
                31.0,
                DoshaEffect::new(-1, -1, 1),
            ),
        ),
        (
            "apple",
            record(
                "Apple (medium)",
                "182g",
                95.0,
                0.5,
                25.1,
                0.3,
                4.4,
                11.0,
                0.2,
                9.0,
                DoshaEffect::new(0, -1, -1),
            ),
        ),
        (
            "dates",
            record(
                "Dates (3 pieces)",
                "24g",
                66.0,
                0.5,
                17.6,
                0.1,
                1.6,
                15.0,
                0.2,
                5.0,
                DoshaEffect::new(-1, -1, 1),
            ),
        ),
        (
            "milk",
            record(
                "Milk (1 cup)",
                "240ml",
                149.0,
                7.7,
                11.7,
                7.9,
                0.0,
                276.0,
                0.1,
                24.0,
                DoshaEffect::new(-1, -1, 0),
            ),
        ),
        (
            "yogurt",
            record(
                "Yogurt (1 cup)",
                "227g",
                100.0,
                10.0,
                7.0,
                0.0,
                0.0,
                450.0,
                0.1,
                27.0,
                DoshaEffect::new(-1, 0, 1),
            ),
        ),
    ]
}
