use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of looking up a referenced entity in the data layer.
///
/// References that could not be resolved are kept around with their id so the
/// caller can log them and skip the line instead of failing the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Resolution<T> {
    Resolved(T),
    Unresolved(Uuid),
}

impl<T> Resolution<T> {
    pub fn resolved(&self) -> Option<&T> {
        match self {
            Resolution::Resolved(value) => Some(value),
            Resolution::Unresolved(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}
