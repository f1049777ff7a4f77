use chrono::{DateTime, Utc};
use tracing::debug;

use super::domain::{
    default_meal_plan, ChartNutrition, DietChart, DietChartId, DietChartRequest, MealItem,
    MealSlot,
};
use crate::nutrition::{NutrientAggregator, NutrientError, NutrientTable};
use crate::recipes::Recipe;

const DEFAULT_PROTEIN: f64 = 45.0;
const DEFAULT_CARBS: f64 = 180.0;
const DEFAULT_FAT: f64 = 50.0;
const NOT_ASSESSED: &str = "Not assessed";

/// Builds a day's meal plan and turns it into a chart for a patient.
#[derive(Debug, Clone)]
pub struct DietChartPlanner {
    meal_plan: Vec<MealSlot>,
}

impl Default for DietChartPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl DietChartPlanner {
    pub fn new() -> Self {
        Self::with_plan(default_meal_plan())
    }

    pub fn with_plan(meal_plan: Vec<MealSlot>) -> Self {
        Self { meal_plan }
    }

    pub fn meal_plan(&self) -> &[MealSlot] {
        &self.meal_plan
    }

    /// Appends a recipe to a slot, pricing it through the nutrient table.
    pub fn add_recipe_to_meal(
        &mut self,
        slot: usize,
        recipe: &Recipe,
        table: &NutrientTable,
    ) -> Result<&MealItem, DietChartError> {
        let nutrients = NutrientAggregator::new(table).aggregate(&recipe.ingredients)?;
        let item = MealItem {
            name: recipe.name.clone(),
            description: format!("{} - {} servings", recipe.description, recipe.servings),
            calories: f64::from(nutrients.calories),
            recipe: Some(recipe.id),
            nutrients: Some(nutrients),
        };
        debug!(slot, recipe_id = %recipe.id, calories = item.calories, "added recipe to meal");
        self.add_item(slot, item)
    }

    pub fn add_item(&mut self, slot: usize, item: MealItem) -> Result<&MealItem, DietChartError> {
        let slots = self.meal_plan.len();
        let items = &mut self
            .meal_plan
            .get_mut(slot)
            .ok_or(DietChartError::SlotOutOfRange { slot, slots })?
            .items;
        items.push(item);
        let index = items.len() - 1;
        Ok(&items[index])
    }

    pub fn remove_item(&mut self, slot: usize, item: usize) -> Result<MealItem, DietChartError> {
        let slots = self.meal_plan.len();
        let items = &mut self
            .meal_plan
            .get_mut(slot)
            .ok_or(DietChartError::SlotOutOfRange { slot, slots })?
            .items;
        if item >= items.len() {
            return Err(DietChartError::ItemOutOfRange { slot, item });
        }
        Ok(items.remove(item))
    }

    /// Rounded sum of every item's calories; non-finite or negative entries count as zero.
    pub fn total_calories(&self) -> u32 {
        let total: f64 = self
            .meal_plan
            .iter()
            .flat_map(|slot| slot.items.iter())
            .map(|item| item.calories)
            .filter(|calories| calories.is_finite() && *calories > 0.0)
            .sum();
        total.round() as u32
    }

    pub fn generate(
        &self,
        request: DietChartRequest,
        generated_at: DateTime<Utc>,
    ) -> Result<DietChart, DietChartError> {
        let patient = request
            .patient
            .clone()
            .ok_or(DietChartError::MissingField("patient"))?;
        let target_calories = request
            .target_calories
            .filter(|calories| *calories > 0)
            .ok_or(DietChartError::MissingField("target calories"))?;
        let diet_goal = request
            .diet_goal
            .ok_or(DietChartError::MissingField("diet goal"))?;

        let nutrition = ChartNutrition {
            calories: self.total_calories(),
            protein: request.protein.unwrap_or(DEFAULT_PROTEIN),
            carbs: request.carbs.unwrap_or(DEFAULT_CARBS),
            fat: request.fat.unwrap_or(DEFAULT_FAT),
        };
        let constitution = patient
            .dosha
            .map(|dosha| dosha.label().to_string())
            .unwrap_or_else(|| NOT_ASSESSED.to_string());

        Ok(DietChart {
            id: DietChartId(u64::try_from(generated_at.timestamp_millis()).unwrap_or(0)),
            patient,
            target_calories,
            diet_goal,
            request,
            meal_plan: self.meal_plan.clone(),
            nutrition,
            generated_on: generated_at.date_naive(),
            constitution,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DietChartError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("meal slot {slot} does not exist (plan has {slots} slots)")]
    SlotOutOfRange { slot: usize, slots: usize },
    #[error("meal slot {slot} has no item {item}")]
    ItemOutOfRange { slot: usize, item: usize },
    #[error(transparent)]
    Nutrient(#[from] NutrientError),
}
