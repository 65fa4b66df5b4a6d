use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::domain::{MetadataRename, ParticipantId, ParticipantRegistration, PlacementUpdate};
use super::repository::{AssessmentRepository, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError};
use crate::assessment::analytics::ParticipantFilter;
use crate::assessment::domain::AnswerSet;
use crate::assessment::insights::InsightProvider;

type SharedService<R, P> = Arc<AssessmentService<R, P>>;

/// Router exposing participant, result and admin endpoints.
pub fn assessment_router<R, P>(service: SharedService<R, P>) -> Router
where
    R: AssessmentRepository + 'static,
    P: InsightProvider + 'static,
{
    Router::new()
        .route("/api/v1/participants", post(register_handler::<R, P>))
        .route(
            "/api/v1/participants/:participant_id",
            get(status_handler::<R, P>),
        )
        .route(
            "/api/v1/participants/:participant_id/session",
            post(session_handler::<R, P>),
        )
        .route(
            "/api/v1/participants/:participant_id/responses",
            post(responses_handler::<R, P>),
        )
        .route(
            "/api/v1/participants/:participant_id/result",
            get(result_handler::<R, P>),
        )
        .route(
            "/api/v1/participants/:participant_id/insights",
            get(insights_handler::<R, P>),
        )
        .route("/api/v1/check-email", get(check_email_handler::<R, P>))
        .route("/api/v1/admin/stats", get(stats_handler::<R, P>))
        .route("/api/v1/admin/participants", get(list_handler::<R, P>))
        .route(
            "/api/v1/admin/participants/:participant_id",
            delete(delete_handler::<R, P>).patch(placement_handler::<R, P>),
        )
        .route("/api/v1/admin/metadata", patch(rename_metadata_handler::<R, P>))
        .route("/api/v1/admin/export.csv", get(export_handler::<R, P>))
        .route(
            "/api/v1/admin/retention/purge",
            post(purge_handler::<R, P>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SessionQuery {
    #[serde(default)]
    seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponsesPayload {
    answers: AnswerSet,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EmailQuery {
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PurgePayload {
    #[serde(default)]
    months: Option<u32>,
}

pub(crate) fn status_for(error: &AssessmentServiceError) -> StatusCode {
    match error {
        AssessmentServiceError::Registration(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::InvalidRetention(_) | AssessmentServiceError::Rename(_) => {
            StatusCode::BAD_REQUEST
        }
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Conflict)
        | AssessmentServiceError::NotCompleted
        | AssessmentServiceError::AlreadyCompleted => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        AssessmentServiceError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = status_for(&error);
    let message = match &error {
        AssessmentServiceError::Repository(RepositoryError::Conflict) => {
            "participant already registered".to_string()
        }
        AssessmentServiceError::Repository(RepositoryError::NotFound) => {
            "participant not found".to_string()
        }
        other => other.to_string(),
    };

    (status, axum::Json(json!({ "error": message }))).into_response()
}

pub(crate) async fn register_handler<R, P>(
    State(service): State<SharedService<R, P>>,
    axum::Json(registration): axum::Json<ParticipantRegistration>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: InsightProvider + 'static,
{
    match service.register(registration, Utc::now()) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R, P>(
    State(service): State<SharedService<R, P>>,
    Path(participant_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: InsightProvider + 'static,
{
    match service.participant(&ParticipantId(participant_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn session_handler<R, P>(
    State(service): State<SharedService<R, P>>,
    Path(participant_id): Path<String>,
    Query(query): Query<SessionQuery>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: InsightProvider + 'static,
{
    let id = ParticipantId(participant_id);
    let seed = query.seed.unwrap_or_else(rand::random);
    let session = match service.start_session(&id, seed, Utc::now()) {
        Ok(session) => session,
        Err(error) => return error_response(error),
    };

    let language = match service.participant(&id) {
        Ok(record) => record.profile.language,
        Err(error) => return error_response(error),
    };
    let questions = service
        .catalog()
        .localized_in_order(&session.question_order, language);

    let payload = json!({
        "participant_id": id.0,
        "seed": session.seed,
        "started_at": session.started_at,
        "language": language,
        "questions": questions,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn responses_handler<R, P>(
    State(service): State<SharedService<R, P>>,
    Path(participant_id): Path<String>,
    axum::Json(payload): axum::Json<ResponsesPayload>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: InsightProvider + 'static,
{
    match service.submit(&ParticipantId(participant_id), payload.answers, Utc::now()) {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn result_handler<R, P>(
    State(service): State<SharedService<R, P>>,
    Path(participant_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: InsightProvider + 'static,
{
    match service.result(&ParticipantId(participant_id)) {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn insights_handler<R, P>(
    State(service): State<SharedService<R, P>>,
    Path(participant_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: InsightProvider + 'static,
{
    match service.insights(&ParticipantId(participant_id)) {
        Ok(insights) => (StatusCode::OK, axum::Json(insights)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn check_email_handler<R, P>(
    State(service): State<SharedService<R, P>>,
    Query(query): Query<EmailQuery>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: InsightProvider + 'static,
{
    let email = query.email.unwrap_or_default();
    match service.email_completed(&email) {
        Ok(exists) => (StatusCode::OK, axum::Json(json!({ "exists": exists }))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<R, P>(
    State(service): State<SharedService<R, P>>,
    Path(participant_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: InsightProvider + 'static,
{
    let id = ParticipantId(participant_id);
    match service.delete_participant(&id) {
        Ok(()) => (StatusCode::OK, axum::Json(json!({ "deleted": id }))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn placement_handler<R, P>(
    State(service): State<SharedService<R, P>>,
    Path(participant_id): Path<String>,
    axum::Json(update): axum::Json<PlacementUpdate>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: InsightProvider + 'static,
{
    match service.update_placement(&ParticipantId(participant_id), update) {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn rename_metadata_handler<R, P>(
    State(service): State<SharedService<R, P>>,
    axum::Json(rename): axum::Json<MetadataRename>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: InsightProvider + 'static,
{
    let field = rename.field;
    match service.rename_metadata(rename) {
        Ok(updated) => (
            StatusCode::OK,
            axum::Json(json!({ "field": field, "updated": updated })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn stats_handler<R, P>(State(service): State<SharedService<R, P>>) -> Response
where
    R: AssessmentRepository + 'static,
    P: InsightProvider + 'static,
{
    match service.stats() {
        Ok(stats) => (StatusCode::OK, axum::Json(stats)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R, P>(
    State(service): State<SharedService<R, P>>,
    Query(filter): Query<ParticipantFilter>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: InsightProvider + 'static,
{
    match service.list(&filter) {
        Ok(page) => (StatusCode::OK, axum::Json(page)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler<R, P>(State(service): State<SharedService<R, P>>) -> Response
where
    R: AssessmentRepository + 'static,
    P: InsightProvider + 'static,
{
    let mut buffer = Vec::new();
    match service.export_csv(&mut buffer) {
        Ok(_) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"assessment-results.csv\"",
                ),
            ],
            buffer,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn purge_handler<R, P>(
    State(service): State<SharedService<R, P>>,
    axum::Json(payload): axum::Json<PurgePayload>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: InsightProvider + 'static,
{
    let months = payload.months.unwrap_or_else(|| service.retention_months());
    match service.purge_expired(Utc::now(), months) {
        Ok(purged) => (
            StatusCode::OK,
            axum::Json(json!({ "purged": purged, "retention_months": months })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}
