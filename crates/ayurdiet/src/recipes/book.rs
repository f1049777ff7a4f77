use std::sync::Arc;

use tracing::info;

use super::catalog::RecipeCatalog;
use super::domain::{Recipe, RecipeDraft, RecipeId};
use super::repository::RecipeRepository;
use crate::nutrition::{NutrientAggregator, NutrientError, NutrientTable, NutrientTotals};
use crate::repository::RepositoryError;

/// Service combining the authored catalog with persisted custom recipes.
pub struct RecipeBook<R> {
    catalog: RecipeCatalog,
    repository: Arc<R>,
}

impl<R> RecipeBook<R>
where
    R: RecipeRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_catalog(RecipeCatalog::standard(), repository)
    }

    pub fn with_catalog(catalog: RecipeCatalog, repository: Arc<R>) -> Self {
        Self {
            catalog,
            repository,
        }
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    /// Sample recipes first, then custom recipes in the order they were saved.
    pub fn all(&self) -> Result<Vec<Recipe>, RecipeError> {
        let mut recipes = self.catalog.recipes().to_vec();
        recipes.extend(self.repository.list()?);
        Ok(recipes)
    }

    pub fn get(&self, id: RecipeId) -> Result<Recipe, RecipeError> {
        if let Some(recipe) = self.catalog.get(id) {
            return Ok(recipe.clone());
        }
        self.repository
            .list()?
            .into_iter()
            .find(|recipe| recipe.id == id)
            .ok_or(RecipeError::NotFound(id))
    }

    pub fn save_custom(&self, mut draft: RecipeDraft) -> Result<Recipe, RecipeError> {
        draft.name = draft.name.trim().to_string();
        if draft.name.is_empty() {
            return Err(RecipeError::MissingName);
        }

        draft
            .ingredients
            .retain(|ingredient| !ingredient.name.trim().is_empty());
        if draft.ingredients.is_empty() {
            return Err(RecipeError::MissingIngredients);
        }
        if let Some(ingredient) = draft
            .ingredients
            .iter()
            .find(|ingredient| !ingredient.quantity.is_finite() || ingredient.quantity <= 0.0)
        {
            return Err(NutrientError::InvalidQuantity {
                ingredient: ingredient.name.clone(),
                quantity: ingredient.quantity,
            }
            .into());
        }
        if draft.servings == 0 {
            draft.servings = 1;
        }

        let id = self.next_id()?;
        let stored = self.repository.insert(draft.into_recipe(id))?;
        info!(recipe_id = %stored.id, name = %stored.name, "saved custom recipe");
        Ok(stored)
    }

    pub fn delete_custom(&self, id: RecipeId) -> Result<(), RecipeError> {
        if self.catalog.get(id).is_some() {
            return Err(RecipeError::NotCustom(id));
        }
        match self.repository.delete(id) {
            Ok(()) => {
                info!(recipe_id = %id, "deleted custom recipe");
                Ok(())
            }
            Err(RepositoryError::NotFound) => Err(RecipeError::NotFound(id)),
            Err(err) => Err(err.into()),
        }
    }

    pub fn nutrients(
        &self,
        recipe: &Recipe,
        table: &NutrientTable,
    ) -> Result<NutrientTotals, RecipeError> {
        let totals = NutrientAggregator::new(table).aggregate(&recipe.ingredients)?;
        Ok(totals)
    }

    fn next_id(&self) -> Result<RecipeId, RecipeError> {
        let highest = self
            .catalog
            .recipes()
            .iter()
            .chain(self.repository.list()?.iter())
            .map(|recipe| recipe.id.0)
            .max()
            .unwrap_or(0);
        Ok(RecipeId(highest + 1))
    }
}

/// Error raised by the recipe book.
#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe name is required")]
    MissingName,
    #[error("a recipe needs at least one ingredient")]
    MissingIngredients,
    #[error("recipe {0} not found")]
    NotFound(RecipeId),
    #[error("recipe {0} is a sample recipe and cannot be deleted")]
    NotCustom(RecipeId),
    #[error(transparent)]
    Nutrient(#[from] NutrientError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
