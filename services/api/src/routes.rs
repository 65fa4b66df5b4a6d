use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json};
use keirsey::assessment::insights::InsightProvider;
use keirsey::assessment::participants::{
    assessment_router, AssessmentRepository, AssessmentService,
};
use keirsey::assessment::{
    AnswerSet, AssessmentScores, DimensionPercentages, Language, LocalizedQuestion,
    QuestionCatalog, CATALOG_VERSION,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuestionsQuery {
    #[serde(default)]
    pub(crate) lang: Option<Language>,
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionsResponse {
    pub(crate) catalog_version: &'static str,
    pub(crate) language: Language,
    pub(crate) seed: u64,
    pub(crate) questions: Vec<LocalizedQuestion>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) answers: AnswerSet,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    #[serde(flatten)]
    pub(crate) scores: AssessmentScores,
    pub(crate) percentages: DimensionPercentages,
    pub(crate) answered: usize,
}

pub(crate) fn with_assessment_routes<R, P>(
    service: Arc<AssessmentService<R, P>>,
) -> axum::Router
where
    R: AssessmentRepository + 'static,
    P: InsightProvider + 'static,
{
    assessment_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/questions", get(questions_endpoint))
        .route("/api/v1/scores", post(score_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Catalog in a seeded presentation order. Without a seed a fresh one is drawn.
pub(crate) async fn questions_endpoint(
    Extension(catalog): Extension<Arc<QuestionCatalog>>,
    Query(query): Query<QuestionsQuery>,
) -> Json<QuestionsResponse> {
    let language = query.lang.unwrap_or_default();
    let seed = query.seed.unwrap_or_else(rand::random);
    let order = keirsey::assessment::shuffle::shuffle_with_seed(&catalog.ids(), seed);

    Json(QuestionsResponse {
        catalog_version: CATALOG_VERSION,
        language,
        seed,
        questions: catalog.localized_in_order(&order, language),
    })
}

/// Stateless scoring; nothing is stored.
pub(crate) async fn score_endpoint(
    Extension(catalog): Extension<Arc<QuestionCatalog>>,
    Json(request): Json<ScoreRequest>,
) -> Json<ScoreResponse> {
    let scores = catalog.score(&request.answers);
    let answered = request
        .answers
        .iter()
        .filter(|(id, _)| catalog.get(*id).is_some())
        .count();
    debug!(mbti = %scores.mbti_code, answered, "scored anonymous answer set");

    Json(ScoreResponse {
        percentages: scores.dimension_percentages(),
        scores,
        answered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryAssessmentRepository;
    use axum::body::Body;
    use axum::http::Request;
    use keirsey::assessment::insights::UnconfiguredInsightProvider;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let catalog = Arc::new(QuestionCatalog::standard());
        let service = Arc::new(AssessmentService::new(
            Arc::new(InMemoryAssessmentRepository::default()),
            catalog.clone(),
            UnconfiguredInsightProvider,
        ));
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };

        with_assessment_routes(service)
            .layer(Extension(catalog))
            .layer(Extension(state))
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 512 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let response = app(false)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = app(true)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let response = app(false)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn questions_are_localized_and_seeded() {
        let response = app(true)
            .oneshot(
                Request::get("/api/v1/questions?lang=ms&seed=12")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = json_body(response).await;
        assert_eq!(payload["catalog_version"], CATALOG_VERSION);
        assert_eq!(payload["language"], "ms");
        assert_eq!(payload["seed"], 12);

        let catalog = QuestionCatalog::standard();
        let expected = keirsey::assessment::shuffle::shuffle_with_seed(&catalog.ids(), 12);
        let first_id = expected[0];
        let first = catalog.get(first_id).expect("question exists");
        assert_eq!(payload["questions"][0]["id"], first_id);
        assert_eq!(payload["questions"][0]["text"], first.text.ms);
        assert_eq!(payload["questions"].as_array().map(Vec::len), Some(100));
    }

    #[tokio::test]
    async fn score_endpoint_returns_flat_result() {
        let response = app(true)
            .oneshot(
                Request::post("/api/v1/scores")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "answers": { "3": "a", "4": "B", "500": "a" } }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = json_body(response).await;
        assert_eq!(payload["mbti_code"], "ESTP");
        assert_eq!(payload["answered"], 2);
        assert_eq!(payload["percentages"]["P"], 100);
        assert_eq!(payload["dimensions"]["T"], 1);
    }

    #[tokio::test]
    async fn participant_routes_are_mounted() {
        let response = app(true)
            .oneshot(
                Request::get("/api/v1/admin/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["total_participants"], 0);
    }
}
