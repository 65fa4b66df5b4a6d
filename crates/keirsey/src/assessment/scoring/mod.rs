//! Deterministic scoring of forced-choice answers.
//!
//! The pipeline is tally, then code and temperament scores off the tally, then
//! classification off the temperament scores. Nothing here performs I/O or
//! keeps state, so it can be called from any number of request handlers at once.

mod classify;
mod tally;
mod temperament;

#[cfg(test)]
mod tests;

pub use classify::{classify, rank, TemperamentClassification, HYBRID_GAP_THRESHOLD};
pub use tally::{tally_answers, DimensionTally};
pub use temperament::{
    dimension_percentages, temperament_scores, DimensionPercentages, PoleShare, TemperamentScores,
};

use super::domain::{AnswerSet, Question, Temperament};
use serde::{Deserialize, Serialize};

/// Immutable result of scoring one answer set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentScores {
    pub dimensions: DimensionTally,
    pub mbti_code: String,
    pub temperaments: TemperamentScores,
    pub dominant_type: Temperament,
    pub secondary_type: Temperament,
    pub is_hybrid: bool,
}

impl AssessmentScores {
    pub fn dominant_score(&self) -> u8 {
        self.temperaments.get(self.dominant_type)
    }

    pub fn secondary_score(&self) -> u8 {
        self.temperaments.get(self.secondary_type)
    }

    pub fn dimension_percentages(&self) -> DimensionPercentages {
        dimension_percentages(&self.dimensions)
    }
}

/// Scores `answers` against `questions`. Infallible for any input: unknown ids
/// are ignored, unanswered questions are skipped and empty axes split 50/50.
pub fn compute_scores(answers: &AnswerSet, questions: &[Question]) -> AssessmentScores {
    let dimensions = tally_answers(answers, questions);
    let mbti_code = dimensions.mbti_code();
    let temperaments = temperament_scores(&dimensions);
    let classification = classify(&temperaments);

    AssessmentScores {
        dimensions,
        mbti_code,
        temperaments,
        dominant_type: classification.dominant_type,
        secondary_type: classification.secondary_type,
        is_hybrid: classification.is_hybrid,
    }
}
