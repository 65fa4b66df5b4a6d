use keirsey::assessment::participants::{
    AssessmentRepository, ParticipantId, ParticipantRecord, RepositoryError,
};
use keirsey::assessment::Language;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local participant store; contents are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<ParticipantId, ParticipantRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
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

pub(crate) fn parse_language(raw: &str) -> Result<Language, String> {
    raw.parse()
}
