use crate::constitution::Dosha;
use serde::{Deserialize, Serialize};

/// Per-dosha affinity of one serving: -1 pacifying, 0 neutral, +1 aggravating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoshaEffect {
    pub vata: i8,
    pub pitta: i8,
    pub kapha: i8,
}

impl DoshaEffect {
    pub const fn new(vata: i8, pitta: i8, kapha: i8) -> Self {
        Self { vata, pitta, kapha }
    }

    pub const fn get(&self, dosha: Dosha) -> i8 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn is_valid(&self) -> bool {
        [self.vata, self.pitta, self.kapha]
            .iter()
            .all(|delta| (-1..=1).contains(delta))
    }
}

/// Nutrients for one reference serving of an ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientRecord {
    pub name: String,
    pub quantity: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub calcium: f64,
    pub iron: f64,
    pub magnesium: f64,
    pub dosha_effect: DoshaEffect,
}

impl NutrientRecord {
    /// Substituted for ingredients missing from the table.
    pub fn zero() -> Self {
        Self {
            name: String::new(),
            quantity: String::new(),
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            fiber: 0.0,
            calcium: 0.0,
            iron: 0.0,
            magnesium: 0.0,
            dosha_effect: DoshaEffect::default(),
        }
    }

    pub(crate) fn numeric_fields(&self) -> [f64; 8] {
        [
            self.calories,
            self.protein,
            self.carbs,
            self.fat,
            self.fiber,
            self.calcium,
            self.iron,
            self.magnesium,
        ]
    }
}
