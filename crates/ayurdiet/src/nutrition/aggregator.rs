use super::record::NutrientRecord;
use super::table::{normalize_key, NutrientTable};
use crate::constitution::Dosha;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ingredient line: a table key and a serving multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Summed nutrients for an ingredient list.
///
/// Calories, calcium, and magnesium are whole numbers; protein, carbs, fat, fiber,
/// and iron carry one decimal place. Affinity scores carry two.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientTotals {
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub calcium: u32,
    pub iron: f64,
    pub magnesium: u32,
    pub vata_score: f64,
    pub pitta_score: f64,
    pub kapha_score: f64,
}

impl NutrientTotals {
    pub fn dosha_score(&self, dosha: Dosha) -> f64 {
        match dosha {
            Dosha::Vata => self.vata_score,
            Dosha::Pitta => self.pitta_score,
            Dosha::Kapha => self.kapha_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NutrientError {
    #[error("quantity {quantity} for '{ingredient}' must be a positive number")]
    InvalidQuantity { ingredient: String, quantity: f64 },
}

#[derive(Debug, Default)]
struct RunningTotals {
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    calcium: f64,
    iron: f64,
    magnesium: f64,
    vata: f64,
    pitta: f64,
    kapha: f64,
}

impl RunningTotals {
    fn add(&mut self, record: &NutrientRecord, quantity: f64) {
        self.calories += record.calories * quantity;
        self.protein += record.protein * quantity;
        self.carbs += record.carbs * quantity;
        self.fat += record.fat * quantity;
        self.fiber += record.fiber * quantity;
        self.calcium += record.calcium * quantity;
        self.iron += record.iron * quantity;
        self.magnesium += record.magnesium * quantity;
        self.vata += f64::from(record.dosha_effect.vata) * quantity;
        self.pitta += f64::from(record.dosha_effect.pitta) * quantity;
        self.kapha += f64::from(record.dosha_effect.kapha) * quantity;
    }

    fn finish(self) -> NutrientTotals {
        NutrientTotals {
            calories: round_whole(self.calories),
            protein: round_tenth(self.protein),
            carbs: round_tenth(self.carbs),
            fat: round_tenth(self.fat),
            fiber: round_tenth(self.fiber),
            calcium: round_whole(self.calcium),
            iron: round_tenth(self.iron),
            magnesium: round_whole(self.magnesium),
            vata_score: round_hundredth(self.vata),
            pitta_score: round_hundredth(self.pitta),
            kapha_score: round_hundredth(self.kapha),
        }
    }
}

fn round_whole(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round_hundredth(value: f64) -> f64 {
    // Adding zero folds -0.0 into 0.0 so an empty mix compares equal to the default.
    (value * 100.0).round() / 100.0 + 0.0
}

/// Weighted-sum aggregation over a nutrient table.
#[derive(Debug, Clone, Copy)]
pub struct NutrientAggregator<'a> {
    table: &'a NutrientTable,
}

impl<'a> NutrientAggregator<'a> {
    pub fn new(table: &'a NutrientTable) -> Self {
        Self { table }
    }

    /// Unknown ingredients contribute zero. Rounding happens once, on the final sums.
    ///
    /// Lines are summed in a canonical order (table key, then quantity) so the
    /// result does not depend on the order the caller listed them in.
    pub fn aggregate(&self, ingredients: &[Ingredient]) -> Result<NutrientTotals, NutrientError> {
        let mut lines = Vec::with_capacity(ingredients.len());
        for ingredient in ingredients {
            if !ingredient.quantity.is_finite() || ingredient.quantity <= 0.0 {
                return Err(NutrientError::InvalidQuantity {
                    ingredient: ingredient.name.clone(),
                    quantity: ingredient.quantity,
                });
            }

            match self.table.lookup(&ingredient.name) {
                Some(record) => {
                    lines.push((normalize_key(&ingredient.name), ingredient.quantity, record))
                }
                None => debug!(
                    ingredient = %ingredient.name,
                    "ingredient not in nutrient table; contributing zero"
                ),
            }
        }

        lines.sort_by(|(left_key, left_qty, _), (right_key, right_qty, _)| {
            left_key
                .cmp(right_key)
                .then_with(|| left_qty.total_cmp(right_qty))
        });

        let mut running = RunningTotals::default();
        for (_, quantity, record) in lines {
            running.add(record, quantity);
        }
        Ok(running.finish())
    }
}
