use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::meal::model::{Meal, Recipe};
use business::domain::meal::repository::{MealRepository, RecipeRepository};

use crate::store::SnapshotStore;

pub struct MealRepositorySnapshot {
    store: Arc<SnapshotStore>,
}

impl MealRepositorySnapshot {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MealRepository for MealRepositorySnapshot {
    async fn get_by_event(&self, event_id: Uuid) -> Result<Vec<Meal>, RepositoryError> {
        self.store.ensure_event(event_id)?;

        let mut meals: Vec<Meal> = self
            .store
            .meals
            .iter()
            .map(|entity| entity.clone().into_domain())
            .collect();
        meals.sort_by_key(|meal| meal.day);
        Ok(meals)
    }
}

pub struct RecipeRepositorySnapshot {
    store: Arc<SnapshotStore>,
}

impl RecipeRepositorySnapshot {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RecipeRepository for RecipeRepositorySnapshot {
    async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError> {
        self.store
            .recipes
            .get(&id)
            .map(|entity| entity.clone().into_domain())
            .ok_or(RepositoryError::NotFound)
    }
}
