use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::domain::{AnswerOption, AnswerSet, Language};
use crate::assessment::insights::{
    InsightContent, InsightError, InsightProvider, InsightRequest, UnconfiguredInsightProvider,
};
use crate::assessment::participants::{
    AssessmentRepository, AssessmentService, ParticipantId, ParticipantRecord,
    ParticipantRegistration, RepositoryError,
};

pub(super) type MemoryService = AssessmentService<MemoryRepository, UnconfiguredInsightProvider>;

pub(super) fn timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 8, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn registration(email: &str) -> ParticipantRegistration {
    ParticipantRegistration {
        full_name: "Nur Aisyah".to_string(),
        email: email.to_string(),
        phone: Some(" +60 12-345 6789 ".to_string()),
        job_title: Some("Operations Lead".to_string()),
        department: Some("Operations".to_string()),
        organization: Some("   ".to_string()),
        language: Language::En,
        consent_given: true,
    }
}

pub(super) fn uniform_answers(option: AnswerOption) -> AnswerSet {
    QuestionCatalog::standard()
        .ids()
        .into_iter()
        .map(|id| (id, option))
        .collect()
}

pub(super) fn build_service() -> (MemoryService, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(
        repository.clone(),
        Arc::new(QuestionCatalog::standard()),
        UnconfiguredInsightProvider,
    );
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ParticipantId, ParticipantRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: ParticipantRecord) -> Result<ParticipantRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let taken = guard.contains_key(&record.profile.participant_id)
            || guard
                .values()
                .any(|existing| existing.profile.email == record.profile.email);
        if taken {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.profile.participant_id.clone(), record.clone());
        Ok(record)
    }

    fn modify<T, E, F>(&self, id: &ParticipantId, change: F) -> Result<T, E>
    where
        F: FnOnce(&mut ParticipantRecord) -> Result<T, E>,
        E: From<RepositoryError>,
    {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let stored = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        let mut draft = stored.clone();
        let outcome = change(&mut draft)?;
        *stored = draft;
        Ok(outcome)
    }

    fn fetch(&self, id: &ParticipantId) -> Result<Option<ParticipantRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<ParticipantRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .find(|record| record.profile.email == email)
            .cloned())
    }

    fn delete(&self, id: &ParticipantId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }

    fn all(&self) -> Result<Vec<ParticipantRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: ParticipantRecord) -> Result<ParticipantRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn modify<T, E, F>(&self, _id: &ParticipantId, _change: F) -> Result<T, E>
    where
        F: FnOnce(&mut ParticipantRecord) -> Result<T, E>,
        E: From<RepositoryError>,
    {
        Err(RepositoryError::Unavailable("database offline".to_string()).into())
    }

    fn fetch(&self, _id: &ParticipantId) -> Result<Option<ParticipantRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_email(&self, _email: &str) -> Result<Option<ParticipantRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete(&self, _id: &ParticipantId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn all(&self) -> Result<Vec<ParticipantRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Provider that echoes the role it was asked about.
pub(super) struct RoleAwareProvider;

impl InsightProvider for RoleAwareProvider {
    fn generate(&self, request: &InsightRequest) -> Result<InsightContent, InsightError> {
        let role = request
            .job_title
            .clone()
            .ok_or(InsightError::IncompleteResponse("job title"))?;
        let one = |text: String| vec![text];
        Ok(InsightContent {
            strengths: one(format!("{role} strengths")),
            weaknesses: one(format!("{role} blind spots")),
            careers: one(role.clone()),
            dos: one("Give clear goals".to_string()),
            donts: one("Change plans silently".to_string()),
        })
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf8 body")
}
