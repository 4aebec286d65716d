use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::shared::value_objects::Resolution;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    /// Free-form membership label (e.g. a scout troop); may be empty.
    #[serde(default)]
    pub group: String,
}

/// Attendance of one participant: valid on `[from, to)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantWindow {
    pub participant_id: Uuid,
    pub participant: Resolution<Participant>,
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(default)]
    pub cooking_group: String,
}

impl ParticipantWindow {
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.from <= day && day < self.to
    }
}
