//! Ingredient nutrient reference data and weighted-sum aggregation.

mod aggregator;
mod analysis;
mod import;
mod record;
mod table;

pub use aggregator::{Ingredient, NutrientAggregator, NutrientError, NutrientTotals};
pub use analysis::{DoshaSuitability, NutrientAnalysis, NutritionQuality};
pub use import::NutrientImportError;
pub use record::{DoshaEffect, NutrientRecord};
pub use table::{IngredientOption, NutrientTable};
