use crate::domain::errors::RepositoryError;
use crate::domain::participant::errors::ParticipantError;

#[derive(Debug, thiserror::Error)]
pub enum ShoppingError {
    #[error("shopping.event_not_found")]
    EventNotFound,
    #[error("shopping.meals_unavailable")]
    MealsUnavailable,
    #[error("shopping.participants_unavailable")]
    ParticipantsUnavailable,
    #[error("shopping.invalid_participant")]
    Participant(#[from] ParticipantError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
