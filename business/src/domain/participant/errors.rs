use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParticipantError {
    #[error("participant.negative_age")]
    NegativeAge {
        birthdate: NaiveDate,
        today: NaiveDate,
    },
    #[error("participant.invalid_birthdate")]
    InvalidBirthdate {
        participant_id: Uuid,
        birthdate: NaiveDate,
    },
}
