use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use business::domain::participant::model::{Participant, ParticipantWindow};
use business::domain::shared::value_objects::Resolution;

#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantEntity {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(default)]
    pub group: String,
}

impl ParticipantEntity {
    pub fn into_domain(self) -> Participant {
        Participant {
            id: self.id,
            name: self.name,
            birthdate: self.birthdate,
            group: self.group,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowEntity {
    pub participant_id: Uuid,
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(default)]
    pub cooking_group: String,
}

impl WindowEntity {
    pub fn into_domain(self, participant: Option<Participant>) -> ParticipantWindow {
        ParticipantWindow {
            participant_id: self.participant_id,
            participant: match participant {
                Some(participant) => Resolution::Resolved(participant),
                None => Resolution::Unresolved(self.participant_id),
            },
            from: self.from,
            to: self.to,
            cooking_group: self.cooking_group,
        }
    }
}
