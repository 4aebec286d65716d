use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::DemandLine;

/// The shopping list the user saved for an event.
#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    async fn get_by_event(&self, event_id: Uuid) -> Result<Vec<DemandLine>, RepositoryError>;
}
