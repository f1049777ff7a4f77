//! Lookup-driven food, timing, seasonal, and insight recommendations.

pub mod domain;
mod resolver;
mod tables;

pub use domain::{
    DailyRoutine, FoodAdviceSet, HealthConcern, MealTimingGuidance, ParseSeasonError,
    QuickRemedy, RecommendationBundle, Season,
};
pub use resolver::{RecommendationError, RecommendationResolver, ReferenceTable};
pub use tables::RecommendationTables;
