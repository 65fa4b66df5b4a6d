//! Narrative insight text for a scored participant.
//!
//! Insights never flow back into [`AssessmentScores`](super::scoring::AssessmentScores);
//! they are generated from its categorical fields by an external provider, with
//! a static table standing in whenever that provider is unavailable.

mod fallback;

use super::domain::{Language, Temperament};
use super::scoring::{AssessmentScores, TemperamentScores};
use fallback::fallback_entry;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Everything a provider may use to tailor its text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightRequest {
    pub dominant_type: Temperament,
    pub secondary_type: Temperament,
    pub scores: TemperamentScores,
    pub is_hybrid: bool,
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl InsightRequest {
    pub fn from_scores(scores: &AssessmentScores, language: Language) -> Self {
        Self {
            dominant_type: scores.dominant_type,
            secondary_type: scores.secondary_type,
            scores: scores.temperaments,
            is_hybrid: scores.is_hybrid,
            language,
            job_title: None,
            department: None,
        }
    }

    pub fn with_role(mut self, job_title: Option<String>, department: Option<String>) -> Self {
        self.job_title = job_title;
        self.department = department;
        self
    }
}

/// Lists of narrative text for one participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightContent {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub careers: Vec<String>,
    pub dos: Vec<String>,
    pub donts: Vec<String>,
}

impl InsightContent {
    fn first_empty_section(&self) -> Option<&'static str> {
        [
            ("strengths", &self.strengths),
            ("weaknesses", &self.weaknesses),
            ("careers", &self.careers),
            ("dos", &self.dos),
            ("donts", &self.donts),
        ]
        .into_iter()
        .find(|(_, items)| items.iter().all(|item| item.trim().is_empty()))
        .map(|(name, _)| name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightSource {
    Ai,
    Fallback,
}

/// Insight text tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub source: InsightSource,
    #[serde(flatten)]
    pub content: InsightContent,
}

/// Deterministic insight text keyed by dominant temperament and language.
pub fn fallback_insights(dominant_type: Temperament, language: Language) -> Insights {
    let entry = fallback_entry(dominant_type, language);
    let owned = |items: &[&'static str; 5]| -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    };

    Insights {
        source: InsightSource::Fallback,
        content: InsightContent {
            strengths: owned(&entry.strengths),
            weaknesses: owned(&entry.weaknesses),
            careers: owned(&entry.careers),
            dos: owned(&entry.dos),
            donts: owned(&entry.donts),
        },
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("insight provider is not configured")]
    NotConfigured,
    #[error("insight provider unavailable: {0}")]
    Unavailable(String),
    #[error("insight provider returned no {0}")]
    IncompleteResponse(&'static str),
}

/// Opaque text generator, typically backed by a hosted language model.
pub trait InsightProvider: Send + Sync {
    fn generate(&self, request: &InsightRequest) -> Result<InsightContent, InsightError>;
}

/// Provider used when no model credentials are configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredInsightProvider;

impl InsightProvider for UnconfiguredInsightProvider {
    fn generate(&self, _request: &InsightRequest) -> Result<InsightContent, InsightError> {
        Err(InsightError::NotConfigured)
    }
}

/// Calls the provider and degrades to [`fallback_insights`] on any failure.
#[derive(Debug, Clone)]
pub struct InsightService<P> {
    provider: P,
}

impl<P> InsightService<P>
where
    P: InsightProvider,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn insights_for(&self, request: &InsightRequest) -> Insights {
        let generated = self.provider.generate(request).and_then(|content| {
            match content.first_empty_section() {
                Some(section) => Err(InsightError::IncompleteResponse(section)),
                None => Ok(content),
            }
        });

        match generated {
            Ok(content) => {
                debug!(dominant = %request.dominant_type, "generated provider insights");
                Insights {
                    source: InsightSource::Ai,
                    content,
                }
            }
            Err(error) => {
                warn!(
                    dominant = %request.dominant_type,
                    language = request.language.code(),
                    %error,
                    "insight generation failed, using fallback"
                );
                fallback_insights(request.dominant_type, request.language)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedProvider(InsightContent);

    impl InsightProvider for CannedProvider {
        fn generate(&self, _request: &InsightRequest) -> Result<InsightContent, InsightError> {
            Ok(self.0.clone())
        }
    }

    struct FailingProvider;

    impl InsightProvider for FailingProvider {
        fn generate(&self, _request: &InsightRequest) -> Result<InsightContent, InsightError> {
            Err(InsightError::Unavailable("timeout after 20s".to_string()))
        }
    }

    fn request(dominant: Temperament, language: Language) -> InsightRequest {
        InsightRequest {
            dominant_type: dominant,
            secondary_type: Temperament::Idealist,
            scores: TemperamentScores {
                guardian: 40,
                rational: 80,
                idealist: 65,
                artisan: 20,
            },
            is_hybrid: false,
            language,
            job_title: Some("Analyst".to_string()),
            department: None,
        }
    }

    fn canned() -> InsightContent {
        let one = |text: &str| vec![text.to_string()];
        InsightContent {
            strengths: one("Systems thinking"),
            weaknesses: one("Impatience with routine"),
            careers: one("Architect"),
            dos: one("Share the rationale"),
            donts: one("Micromanage"),
        }
    }

    #[test]
    fn provider_text_is_tagged_ai() {
        let service = InsightService::new(CannedProvider(canned()));
        let insights = service.insights_for(&request(Temperament::Rational, Language::En));

        assert_eq!(insights.source, InsightSource::Ai);
        assert_eq!(insights.content.careers, vec!["Architect".to_string()]);
    }

    #[test]
    fn provider_failure_uses_fallback_for_dominant_type() {
        let service = InsightService::new(FailingProvider);
        let insights = service.insights_for(&request(Temperament::Artisan, Language::En));

        assert_eq!(insights, fallback_insights(Temperament::Artisan, Language::En));
        assert_eq!(insights.source, InsightSource::Fallback);
        assert!(insights
            .content
            .strengths
            .iter()
            .any(|item| item.contains("Adaptable")));
    }

    #[test]
    fn incomplete_provider_response_is_rejected() {
        let mut partial = canned();
        partial.donts = vec!["   ".to_string()];
        let service = InsightService::new(CannedProvider(partial));

        let insights = service.insights_for(&request(Temperament::Guardian, Language::Ms));
        assert_eq!(insights.source, InsightSource::Fallback);
        assert_eq!(
            insights,
            fallback_insights(Temperament::Guardian, Language::Ms)
        );
    }

    #[test]
    fn unconfigured_provider_always_falls_back() {
        let service = InsightService::new(UnconfiguredInsightProvider);
        let insights = service.insights_for(&request(Temperament::Idealist, Language::Ms));
        assert_eq!(insights.source, InsightSource::Fallback);
    }

    #[test]
    fn fallback_table_is_complete_for_every_type_and_language() {
        for temperament in Temperament::ordered() {
            for language in [Language::En, Language::Ms] {
                let insights = fallback_insights(temperament, language);
                assert!(insights.content.first_empty_section().is_none());
                assert_eq!(insights.content.strengths.len(), 5);
                assert_eq!(insights.content.donts.len(), 5);
            }
        }
        assert_ne!(
            fallback_insights(Temperament::Guardian, Language::En),
            fallback_insights(Temperament::Guardian, Language::Ms)
        );
    }

    #[test]
    fn insights_serialize_with_source_tag() {
        let value = serde_json::to_value(fallback_insights(Temperament::Rational, Language::En))
            .expect("insights serialize");
        assert_eq!(value["source"], "fallback");
        assert!(value["careers"].is_array());
        assert!(value.get("content").is_none());
    }
}
