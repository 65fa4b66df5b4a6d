use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Months, Utc};
use tracing::{debug, info};

use super::domain::{
    normalize_email, AssessmentSession, MetadataRename, MetadataRenameError, ParticipantId,
    ParticipantProfile, ParticipantRecord, ParticipantRegistration, PlacementUpdate,
    RegistrationError, ResultSnapshot,
};
use super::repository::{AssessmentRepository, RepositoryError};
use crate::assessment::analytics::{
    list_participants, summarize, write_csv_report, AssessmentStats, ExportError,
    ParticipantFilter, ParticipantPage,
};
use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::domain::AnswerSet;
use crate::assessment::insights::{InsightProvider, InsightRequest, InsightService, Insights};
use crate::assessment::shuffle::shuffle_with_seed;

/// Service tying registration, sessions, scoring and insights to a repository.
pub struct AssessmentService<R, P> {
    repository: Arc<R>,
    catalog: Arc<QuestionCatalog>,
    insights: InsightService<P>,
    retention_months: u32,
}

pub const DEFAULT_RETENTION_MONTHS: u32 = 12;

static PARTICIPANT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_participant_id() -> ParticipantId {
    let id = PARTICIPANT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ParticipantId(format!("participant-{id:06}"))
}

impl<R, P> AssessmentService<R, P>
where
    R: AssessmentRepository + 'static,
    P: InsightProvider + 'static,
{
    pub fn new(repository: Arc<R>, catalog: Arc<QuestionCatalog>, provider: P) -> Self {
        Self {
            repository,
            catalog,
            insights: InsightService::new(provider),
            retention_months: DEFAULT_RETENTION_MONTHS,
        }
    }

    pub fn with_retention_months(mut self, months: u32) -> Self {
        self.retention_months = months;
        self
    }

    pub fn retention_months(&self) -> u32 {
        self.retention_months
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Register a participant. Emails are unique after normalization; the
    /// repository enforces that on insert.
    pub fn register(
        &self,
        registration: ParticipantRegistration,
        now: DateTime<Utc>,
    ) -> Result<ParticipantRecord, AssessmentServiceError> {
        let registration = registration.normalized()?;

        let record = ParticipantRecord {
            profile: ParticipantProfile {
                participant_id: next_participant_id(),
                full_name: registration.full_name,
                email: registration.email,
                phone: registration.phone,
                job_title: registration.job_title,
                department: registration.department,
                organization: registration.organization,
                language: registration.language,
                registered_at: now,
            },
            session: None,
            answers: AnswerSet::new(),
            result: None,
        };

        let stored = self.repository.insert(record)?;
        info!(participant = %stored.profile.participant_id.0, "participant registered");
        Ok(stored)
    }

    /// Hand out a seeded question order. Restarting an open session reshuffles it.
    pub fn start_session(
        &self,
        participant_id: &ParticipantId,
        seed: u64,
        now: DateTime<Utc>,
    ) -> Result<AssessmentSession, AssessmentServiceError> {
        let question_order = shuffle_with_seed(&self.catalog.ids(), seed);
        let session = self.repository.modify(participant_id, |record| {
            if record.result.is_some() {
                return Err(AssessmentServiceError::AlreadyCompleted);
            }
            let session = AssessmentSession {
                seed,
                question_order,
                started_at: now,
                completed_at: None,
            };
            record.session = Some(session.clone());
            Ok(session)
        })?;

        debug!(participant = %participant_id.0, seed, "assessment session started");
        Ok(session)
    }

    /// Score the submitted answers and store the result.
    pub fn submit(
        &self,
        participant_id: &ParticipantId,
        answers: AnswerSet,
        now: DateTime<Utc>,
    ) -> Result<ResultSnapshot, AssessmentServiceError> {
        let scores = self.catalog.score(&answers);
        let answered = answers
            .iter()
            .filter(|(id, _)| self.catalog.get(*id).is_some())
            .count();
        let snapshot = ResultSnapshot {
            percentages: scores.dimension_percentages(),
            scores,
            answered,
            completed_at: now,
        };

        let snapshot = self.repository.modify(participant_id, |record| {
            if record.result.is_some() {
                return Err(AssessmentServiceError::AlreadyCompleted);
            }
            let session = record.session.get_or_insert_with(|| AssessmentSession {
                seed: 0,
                question_order: self.catalog.ids(),
                started_at: now,
                completed_at: None,
            });
            session.completed_at = Some(now);
            record.answers = answers;
            record.result = Some(snapshot.clone());
            Ok(snapshot)
        })?;

        info!(
            participant = %participant_id.0,
            mbti = %snapshot.scores.mbti_code,
            dominant = %snapshot.scores.dominant_type,
            hybrid = snapshot.scores.is_hybrid,
            answered,
            "assessment scored"
        );
        Ok(snapshot)
    }

    pub fn participant(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<ParticipantRecord, AssessmentServiceError> {
        self.load(participant_id)
    }

    pub fn result(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<ResultSnapshot, AssessmentServiceError> {
        self.load(participant_id)?
            .result
            .ok_or(AssessmentServiceError::NotCompleted)
    }

    /// Narrative insights for a completed result, in the participant's language.
    pub fn insights(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<Insights, AssessmentServiceError> {
        let record = self.load(participant_id)?;
        let result = record
            .result
            .as_ref()
            .ok_or(AssessmentServiceError::NotCompleted)?;

        let request = InsightRequest::from_scores(&result.scores, record.profile.language)
            .with_role(record.profile.job_title.clone(), record.profile.department.clone());
        Ok(self.insights.insights_for(&request))
    }

    /// Whether `email` belongs to a participant who already finished the assessment.
    pub fn email_completed(&self, email: &str) -> Result<bool, AssessmentServiceError> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Ok(false);
        }
        Ok(self
            .repository
            .find_by_email(&email)?
            .is_some_and(|record| record.result.is_some()))
    }

    pub fn delete_participant(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<(), AssessmentServiceError> {
        self.repository.delete(participant_id)?;
        info!(participant = %participant_id.0, "participant deleted");
        Ok(())
    }

    pub fn update_placement(
        &self,
        participant_id: &ParticipantId,
        update: PlacementUpdate,
    ) -> Result<ParticipantProfile, AssessmentServiceError> {
        let profile = self.repository.modify(participant_id, |record| {
            update.apply(&mut record.profile);
            Ok::<_, AssessmentServiceError>(record.profile.clone())
        })?;
        debug!(participant = %participant_id.0, "placement updated");
        Ok(profile)
    }

    /// Rename one organization or department value across all participants.
    /// Returns the number of participants changed.
    pub fn rename_metadata(&self, rename: MetadataRename) -> Result<usize, AssessmentServiceError> {
        let rename = rename.normalized()?;

        let mut updated = 0;
        for record in self.repository.all()? {
            if rename.field.value(&record.profile) != Some(rename.from.as_str()) {
                continue;
            }
            let changed = self
                .repository
                .modify(&record.profile.participant_id, |stored| -> Result<bool, RepositoryError> {
                    let slot = rename.field.slot(&mut stored.profile);
                    if slot.as_deref() != Some(rename.from.as_str()) {
                        return Ok(false);
                    }
                    *slot = Some(rename.to.clone());
                    Ok(true)
                });
            match changed {
                Ok(true) => updated += 1,
                Ok(false) | Err(RepositoryError::NotFound) => {}
                Err(error) => return Err(error.into()),
            }
        }

        info!(
            field = rename.field.label(),
            from = %rename.from,
            to = %rename.to,
            updated,
            "metadata renamed"
        );
        Ok(updated)
    }

    pub fn stats(&self) -> Result<AssessmentStats, AssessmentServiceError> {
        Ok(summarize(&self.repository.all()?))
    }

    pub fn list(&self, filter: &ParticipantFilter) -> Result<ParticipantPage, AssessmentServiceError> {
        Ok(list_participants(&self.repository.all()?, filter))
    }

    /// Write completed results as CSV, returning the number of rows.
    pub fn export_csv<W>(&self, writer: W) -> Result<usize, AssessmentServiceError>
    where
        W: Write,
    {
        let records = self.repository.all()?;
        Ok(write_csv_report(&records, writer)?)
    }

    /// Delete participants registered more than `months` calendar months before `now`.
    pub fn purge_expired(
        &self,
        now: DateTime<Utc>,
        months: u32,
    ) -> Result<usize, AssessmentServiceError> {
        if months == 0 {
            return Err(AssessmentServiceError::InvalidRetention(months));
        }
        let cutoff = now
            .checked_sub_months(Months::new(months))
            .ok_or(AssessmentServiceError::InvalidRetention(months))?;

        let mut purged = 0;
        for record in self.repository.all()? {
            if record.profile.registered_at < cutoff {
                self.repository.delete(&record.profile.participant_id)?;
                purged += 1;
            }
        }

        info!(purged, retention_months = months, %cutoff, "retention purge finished");
        Ok(purged)
    }

    fn load(&self, participant_id: &ParticipantId) -> Result<ParticipantRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(participant_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Registration(#[from] RegistrationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("assessment has not been completed")]
    NotCompleted,
    #[error("assessment has already been completed")]
    AlreadyCompleted,
    #[error("retention period must be at least one month, got {0}")]
    InvalidRetention(u32),
    #[error(transparent)]
    Rename(#[from] MetadataRenameError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
