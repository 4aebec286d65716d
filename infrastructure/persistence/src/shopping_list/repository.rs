use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shopping::model::DemandLine;
use business::domain::shopping::repository::ShoppingListRepository;

use crate::store::SnapshotStore;

pub struct ShoppingListRepositorySnapshot {
    store: Arc<SnapshotStore>,
}

impl ShoppingListRepositorySnapshot {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ShoppingListRepository for ShoppingListRepositorySnapshot {
    async fn get_by_event(&self, event_id: Uuid) -> Result<Vec<DemandLine>, RepositoryError> {
        self.store.ensure_event(event_id)?;

        self.store
            .shopping_list
            .iter()
            .map(|entity| {
                let ingredient = entity
                    .ingredient_id
                    .and_then(|id| self.store.ingredient(id));
                entity.clone().into_domain(ingredient)
            })
            .collect()
    }
}
