//! Participant registration, assessment sessions and stored results.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentSession, AssessmentStatus, MetadataField, MetadataRename, MetadataRenameError,
    ParticipantId, ParticipantProfile, ParticipantRecord, ParticipantRegistration,
    ParticipantStatusView, PlacementUpdate, RegistrationError, ResultSnapshot,
};
pub use repository::{AssessmentRepository, RepositoryError};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError, DEFAULT_RETENTION_MONTHS};
