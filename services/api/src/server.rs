use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAssessmentRepository};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use keirsey::assessment::insights::UnconfiguredInsightProvider;
use keirsey::assessment::participants::AssessmentService;
use keirsey::assessment::{QuestionCatalog, CATALOG_VERSION};
use keirsey::config::AppConfig;
use keirsey::error::AppError;
use keirsey::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = load_catalog(QuestionCatalog::standard())?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let assessment_service = Arc::new(
        AssessmentService::new(repository, catalog.clone(), UnconfiguredInsightProvider)
            .with_retention_months(config.assessment.retention_months),
    );

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(catalog))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        catalog = CATALOG_VERSION,
        retention_months = config.assessment.retention_months,
        "assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Validates the catalog before it is shared with the handlers.
pub(crate) fn load_catalog(catalog: QuestionCatalog) -> Result<Arc<QuestionCatalog>, AppError> {
    catalog.validate()?;
    warn_if_unbalanced(&catalog);
    Ok(Arc::new(catalog))
}

/// Returns `false` (after logging) when some poles are reachable from fewer questions.
pub(crate) fn warn_if_unbalanced(catalog: &QuestionCatalog) -> bool {
    let balance = catalog.balance();
    if balance.is_balanced() {
        return true;
    }

    warn!(
        underrepresented = ?balance.underrepresented(),
        reachable = ?balance.reachable,
        "question catalog is unbalanced"
    );
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use keirsey::assessment::domain::OptionScoring;
    use keirsey::assessment::{Axis, Pole};

    #[test]
    fn standard_catalog_loads_balanced() {
        let catalog = load_catalog(QuestionCatalog::standard()).expect("standard catalog loads");
        assert_eq!(catalog.len(), 100);
        assert!(warn_if_unbalanced(&catalog));
    }

    #[test]
    fn skewed_axes_load_but_are_reported() {
        let mut questions = QuestionCatalog::standard().questions().to_vec();
        let judging = questions
            .iter_mut()
            .find(|question| question.axis == Axis::Jp)
            .expect("catalog has JP questions");
        judging.axis = Axis::Ei;
        judging.scoring = OptionScoring {
            a: Pole::Extraversion,
            b: Pole::Introversion,
        };

        let catalog = QuestionCatalog::from_questions(questions).expect("structurally valid");
        assert!(!warn_if_unbalanced(&catalog));
        assert!(load_catalog(catalog).is_ok());
    }

    #[test]
    fn malformed_catalog_is_fatal() {
        let mut questions = QuestionCatalog::standard().questions().to_vec();
        questions.pop();
        let catalog = QuestionCatalog::from_questions(questions);
        assert!(catalog.is_err());

        let mut duplicated = QuestionCatalog::standard().questions().to_vec();
        duplicated[1].id = duplicated[0].id;
        let error = QuestionCatalog::from_questions(duplicated).expect_err("duplicate id");
        assert!(matches!(
            AppError::from(error),
            AppError::Catalog(_)
        ));
    }
}
