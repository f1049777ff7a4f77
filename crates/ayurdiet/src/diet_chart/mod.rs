//! Practitioner diet charts built from a daily meal plan.

mod domain;
mod planner;
mod repository;

pub use domain::{
    default_meal_plan, ChartNutrition, DietChart, DietChartId, DietChartRequest, DietGoal,
    MealItem, MealSlot, ParseDietGoalError, Patient, PatientId,
};
pub use planner::{DietChartError, DietChartPlanner};
pub use repository::{next_free_id, DietChartRepository};
