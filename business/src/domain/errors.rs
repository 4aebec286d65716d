/// Errors reported by the external data layer through the repository ports.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.unavailable")]
    Unavailable,
    #[error("repository.corrupted")]
    Corrupted,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn unavailable() -> Self {
        RepositoryError::Unavailable
    }
    pub fn corrupted() -> Self {
        RepositoryError::Corrupted
    }
}
