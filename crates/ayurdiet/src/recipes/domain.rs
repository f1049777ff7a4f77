use crate::constitution::Dosha;
use crate::nutrition::Ingredient;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecipeId(pub u64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealTime {
    Morning,
    Lunch,
    Dinner,
    Snack,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub meal_time: MealTime,
    pub servings: u32,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub cook_time: String,
    pub difficulty: Difficulty,
    pub suitable_for: Vec<Dosha>,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub health_benefits: Vec<String>,
    #[serde(default)]
    pub is_custom: bool,
}

impl Recipe {
    pub fn suits(&self, dosha: Dosha) -> bool {
        self.suitable_for.contains(&dosha)
    }
}

/// Recipe contents supplied when saving a custom recipe; the id is assigned on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub meal_time: MealTime,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub cook_time: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub suitable_for: Vec<Dosha>,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub health_benefits: Vec<String>,
}

fn default_servings() -> u32 {
    1
}

impl RecipeDraft {
    pub(crate) fn into_recipe(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            name: self.name,
            description: self.description,
            meal_time: self.meal_time,
            servings: self.servings,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            difficulty: self.difficulty,
            suitable_for: self.suitable_for,
            ingredients: self.ingredients,
            instructions: self.instructions,
            health_benefits: self.health_benefits,
            is_custom: true,
        }
    }
}
