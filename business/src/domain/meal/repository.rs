use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Meal, Recipe};

#[async_trait]
pub trait MealRepository: Send + Sync {
    /// Meals of an event; recipes may come back resolved or as bare references.
    async fn get_by_event(&self, event_id: Uuid) -> Result<Vec<Meal>, RepositoryError>;
}

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError>;
}
