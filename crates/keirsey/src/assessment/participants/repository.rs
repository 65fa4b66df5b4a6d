use super::domain::{ParticipantId, ParticipantRecord};

/// Storage abstraction so the service can be exercised without a database.
pub trait AssessmentRepository: Send + Sync {
    /// Stores a new participant. Fails with `Conflict` when the id or the
    /// (already normalized) email is taken; the checks and the write are atomic.
    fn insert(&self, record: ParticipantRecord) -> Result<ParticipantRecord, RepositoryError>;

    /// Runs `change` against the stored record while holding it exclusively.
    /// The record is written back only when `change` returns `Ok`.
    fn modify<T, E, F>(&self, id: &ParticipantId, change: F) -> Result<T, E>
    where
        F: FnOnce(&mut ParticipantRecord) -> Result<T, E>,
        E: From<RepositoryError>;

    fn fetch(&self, id: &ParticipantId) -> Result<Option<ParticipantRecord>, RepositoryError>;
    fn find_by_email(&self, email: &str) -> Result<Option<ParticipantRecord>, RepositoryError>;
    fn delete(&self, id: &ParticipantId) -> Result<(), RepositoryError>;
    fn all(&self) -> Result<Vec<ParticipantRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
