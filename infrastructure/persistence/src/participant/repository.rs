use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::participant::model::{Participant, ParticipantWindow};
use business::domain::participant::repository::ParticipantRepository;

use crate::store::SnapshotStore;

pub struct ParticipantRepositorySnapshot {
    store: Arc<SnapshotStore>,
}

impl ParticipantRepositorySnapshot {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ParticipantRepository for ParticipantRepositorySnapshot {
    async fn get_by_id(&self, id: Uuid) -> Result<Participant, RepositoryError> {
        self.store.participant(id).ok_or(RepositoryError::NotFound)
    }

    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Participant>, RepositoryError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.store.participant(*id))
            .collect())
    }

    async fn get_windows_by_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<ParticipantWindow>, RepositoryError> {
        self.store.ensure_event(event_id)?;

        Ok(self
            .store
            .windows
            .iter()
            .map(|entity| {
                let participant = self.store.participant(entity.participant_id);
                entity.clone().into_domain(participant)
            })
            .collect())
    }
}
