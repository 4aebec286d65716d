use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::ingredient::model::Ingredient;
use business::domain::participant::model::Participant;

use crate::event::entity::EventEntity;
use crate::ingredient::entity::IngredientEntity;
use crate::meal::entity::{MealEntity, RecipeEntity};
use crate::participant::entity::{ParticipantEntity, WindowEntity};
use crate::shopping_list::entity::ShoppingListEntryEntity;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot.read_error")]
    ReadError,
    #[error("snapshot.parse_error")]
    ParseError,
}

/// Serialized export of everything the planner reads for one event.
#[derive(Debug, Deserialize)]
pub struct EventSnapshot {
    pub event: EventEntity,
    #[serde(default)]
    pub ingredients: Vec<IngredientEntity>,
    #[serde(default)]
    pub recipes: Vec<RecipeEntity>,
    #[serde(default)]
    pub participants: Vec<ParticipantEntity>,
    #[serde(default)]
    pub windows: Vec<WindowEntity>,
    #[serde(default)]
    pub meals: Vec<MealEntity>,
    #[serde(default)]
    pub shopping_list: Vec<ShoppingListEntryEntity>,
}

/// Indexed, read-only view of a snapshot shared by the repository adapters.
#[derive(Debug)]
pub struct SnapshotStore {
    pub(crate) event: EventEntity,
    pub(crate) ingredients: HashMap<Uuid, IngredientEntity>,
    pub(crate) recipes: HashMap<Uuid, RecipeEntity>,
    pub(crate) participants: HashMap<Uuid, ParticipantEntity>,
    pub(crate) windows: Vec<WindowEntity>,
    pub(crate) meals: Vec<MealEntity>,
    pub(crate) shopping_list: Vec<ShoppingListEntryEntity>,
}

impl SnapshotStore {
    pub fn new(snapshot: EventSnapshot) -> Self {
        Self {
            event: snapshot.event,
            ingredients: snapshot
                .ingredients
                .into_iter()
                .map(|entity| (entity.id, entity))
                .collect(),
            recipes: snapshot
                .recipes
                .into_iter()
                .map(|entity| (entity.id, entity))
                .collect(),
            participants: snapshot
                .participants
                .into_iter()
                .map(|entity| (entity.id, entity))
                .collect(),
            windows: snapshot.windows,
            meals: snapshot.meals,
            shopping_list: snapshot.shopping_list,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: EventSnapshot = serde_json::from_str(json).map_err(|e| {
            error!("Invalid event snapshot: {}", e);
            SnapshotError::ParseError
        })?;
        Ok(Self::new(snapshot))
    }

    pub fn event_id(&self) -> Uuid {
        self.event.id
    }

    /// Fails with `NotFound` for any event other than the exported one.
    pub(crate) fn ensure_event(&self, event_id: Uuid) -> Result<(), RepositoryError> {
        if event_id == self.event.id {
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    pub(crate) fn ingredient(&self, id: Uuid) -> Option<Ingredient> {
        self.ingredients
            .get(&id)
            .map(|entity| entity.clone().into_domain())
    }

    pub(crate) fn participant(&self, id: Uuid) -> Option<Participant> {
        self.participants
            .get(&id)
            .map(|entity| entity.clone().into_domain())
    }
}

/// Reads and indexes the snapshot file at `path`.
pub async fn load_snapshot(path: &str) -> Result<SnapshotStore, SnapshotError> {
    let path = Path::new(path);

    if !path.exists() {
        error!("Snapshot file does not exist: {}", path.display());
        return Err(SnapshotError::ReadError);
    }

    let json = tokio::fs::read_to_string(path).await.map_err(|e| {
        error!("Could not read snapshot {}: {}", path.display(), e);
        SnapshotError::ReadError
    })?;

    SnapshotStore::from_json(&json)
}
