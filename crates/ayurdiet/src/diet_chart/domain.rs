use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constitution::Dosha;
use crate::nutrition::NutrientTotals;
use crate::recipes::RecipeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatientId(pub u64);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub dosha: Option<Dosha>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietGoal {
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    #[serde(rename = "Weight Gain")]
    WeightGain,
    #[serde(rename = "Muscle Building")]
    MuscleBuilding,
    #[serde(rename = "Diabetes Management")]
    DiabetesManagement,
    #[serde(rename = "Heart Health")]
    HeartHealth,
    #[serde(rename = "Digestive Health")]
    DigestiveHealth,
    #[serde(rename = "General Wellness")]
    GeneralWellness,
    #[serde(rename = "Dosha Balance")]
    DoshaBalance,
}

impl DietGoal {
    pub const fn ordered() -> [DietGoal; 8] {
        [
            Self::WeightLoss,
            Self::WeightGain,
            Self::MuscleBuilding,
            Self::DiabetesManagement,
            Self::HeartHealth,
            Self::DigestiveHealth,
            Self::GeneralWellness,
            Self::DoshaBalance,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::WeightGain => "Weight Gain",
            Self::MuscleBuilding => "Muscle Building",
            Self::DiabetesManagement => "Diabetes Management",
            Self::HeartHealth => "Heart Health",
            Self::DigestiveHealth => "Digestive Health",
            Self::GeneralWellness => "General Wellness",
            Self::DoshaBalance => "Dosha Balance",
        }
    }
}

impl fmt::Display for DietGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown diet goal '{0}'")]
pub struct ParseDietGoalError(pub String);

impl FromStr for DietGoal {
    type Err = ParseDietGoalError;

    /// Accepts the label ("Weight Loss") or a kebab/snake key ("weight-loss").
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted: String = value
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ordered()
            .into_iter()
            .find(|goal| {
                goal.label()
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .map(|c| c.to_ascii_lowercase())
                    .eq(wanted.chars())
            })
            .ok_or_else(|| ParseDietGoalError(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub calories: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<RecipeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrients: Option<NutrientTotals>,
}

impl MealItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>, calories: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            calories,
            recipe: None,
            nutrients: None,
        }
    }
}

/// A time of day in the meal plan and the items served then.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSlot {
    pub time: String,
    pub meal: String,
    pub items: Vec<MealItem>,
}

/// The seven-slot day the planner starts from.
pub fn default_meal_plan() -> Vec<MealSlot> {
    [
        ("6:00 AM", "Early Morning", "Warm Water with Lemon", "Detoxifying, Pitta pacifying", 7.0),
        ("8:00 AM", "Breakfast", "Oats Porridge with Almonds", "Nourishing, Vata pacifying", 218.0),
        ("10:30 AM", "Mid Morning", "Fresh Fruit (Seasonal)", "Cooling, energizing", 80.0),
        ("1:00 PM", "Lunch", "Rice with Dal and Vegetables", "Balanced, tridoshic", 450.0),
        ("4:00 PM", "Evening Snack", "Herbal Tea with Nuts", "Light, warming", 120.0),
        ("7:00 PM", "Dinner", "Light Soup with Roti", "Easy to digest", 280.0),
        ("9:00 PM", "Before Bed", "Warm Milk with Turmeric", "Calming, sleep-inducing", 82.0),
    ]
    .into_iter()
    .map(|(time, meal, name, description, calories)| MealSlot {
        time: time.to_string(),
        meal: meal.to_string(),
        items: vec![MealItem::new(name, description, calories)],
    })
    .collect()
}

/// Practitioner inputs for a chart. Only the patient, target calories and
/// diet goal are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietChartRequest {
    #[serde(default)]
    pub patient: Option<Patient>,
    #[serde(default)]
    pub target_calories: Option<u32>,
    #[serde(default)]
    pub diet_goal: Option<DietGoal>,
    #[serde(default)]
    pub dietary_restrictions: String,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub fiber: Option<f64>,
    #[serde(default)]
    pub water_intake: Option<String>,
    #[serde(default)]
    pub meal_frequency: Option<String>,
    #[serde(default)]
    pub chart_duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartNutrition {
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DietChartId(pub u64);

impl fmt::Display for DietChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietChart {
    pub id: DietChartId,
    pub patient: Patient,
    pub target_calories: u32,
    pub diet_goal: DietGoal,
    pub request: DietChartRequest,
    pub meal_plan: Vec<MealSlot>,
    pub nutrition: ChartNutrition,
    pub generated_on: NaiveDate,
    pub constitution: String,
}
