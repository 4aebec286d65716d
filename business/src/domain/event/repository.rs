use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Event;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Event, RepositoryError>;
}
