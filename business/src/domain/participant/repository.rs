use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Participant, ParticipantWindow};

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Participant, RepositoryError>;
    /// Batched lookup; ids without a participant are simply absent.
    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Participant>, RepositoryError>;
    async fn get_windows_by_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<ParticipantWindow>, RepositoryError>;
}
