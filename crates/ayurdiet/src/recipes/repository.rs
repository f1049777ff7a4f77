use super::domain::{Recipe, RecipeId};
use crate::repository::RepositoryError;

/// Storage for user-authored recipes so the book can be exercised in isolation.
pub trait RecipeRepository: Send + Sync {
    fn insert(&self, recipe: Recipe) -> Result<Recipe, RepositoryError>;
    /// Custom recipes in insertion order.
    fn list(&self) -> Result<Vec<Recipe>, RepositoryError>;
    fn delete(&self, id: RecipeId) -> Result<(), RepositoryError>;
}
