use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::event::model::Event;
use business::domain::event::repository::EventRepository;

use crate::store::SnapshotStore;

pub struct EventRepositorySnapshot {
    store: Arc<SnapshotStore>,
}

impl EventRepositorySnapshot {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EventRepository for EventRepositorySnapshot {
    async fn get_by_id(&self, id: Uuid) -> Result<Event, RepositoryError> {
        self.store.ensure_event(id)?;
        Ok(self.store.event.clone().into_domain())
    }
}
