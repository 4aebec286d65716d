use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Ingredient;

#[async_trait]
pub trait IngredientRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Ingredient>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError>;
}
