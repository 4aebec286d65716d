use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::ingredient::model::Ingredient;
use business::domain::ingredient::repository::IngredientRepository;

use crate::store::SnapshotStore;

pub struct IngredientRepositorySnapshot {
    store: Arc<SnapshotStore>,
}

impl IngredientRepositorySnapshot {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl IngredientRepository for IngredientRepositorySnapshot {
    async fn get_all(&self) -> Result<Vec<Ingredient>, RepositoryError> {
        let mut ingredients: Vec<Ingredient> = self
            .store
            .ingredients
            .values()
            .map(|entity| entity.clone().into_domain())
            .collect();
        ingredients.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(ingredients)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError> {
        self.store.ingredient(id).ok_or(RepositoryError::NotFound)
    }
}
