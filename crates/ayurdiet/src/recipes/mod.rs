//! Sample and user-authored recipes.

mod book;
mod catalog;
mod domain;
mod repository;

pub use book::{RecipeBook, RecipeError};
pub use catalog::RecipeCatalog;
pub use domain::{Difficulty, MealTime, Recipe, RecipeDraft, RecipeId};
pub use repository::RecipeRepository;
