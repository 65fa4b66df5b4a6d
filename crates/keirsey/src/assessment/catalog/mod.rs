//! Versioned question catalog and its load-time validation.
//!
//! The catalog is built once at startup and shared read-only for the lifetime
//! of the process. Structural defects are reported as [`CatalogError`] before
//! any participant is scored.

mod standard;

use super::domain::{AnswerSet, Axis, Language, LocalizedQuestion, Pole, Question};
use super::scoring::{compute_scores, AssessmentScores};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Number of items in a complete instrument.
pub const CATALOG_SIZE: usize = 100;

/// Identifier of the shipped question set.
pub const CATALOG_VERSION: &str = "keirsey-100-v1";

/// Structural defects detected while loading a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("question id {0} appears more than once")]
    DuplicateId(u16),
    #[error("question id {0} is outside 1..={max}", max = CATALOG_SIZE)]
    IdOutOfRange(u16),
    #[error("question {id} maps both options to pole {pole}")]
    SamePole { id: u16, pole: Pole },
    #[error("question {id} on axis {axis} maps an option to foreign pole {pole}")]
    PoleOutsideAxis { id: u16, axis: Axis, pole: Pole },
    #[error("catalog must contain {expected} questions, found {found}")]
    UnexpectedSize { expected: usize, found: usize },
}

#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// The shipped 100-item bilingual instrument.
    pub fn standard() -> Self {
        Self {
            questions: standard::standard_questions(),
        }
    }

    /// Builds a catalog from externally supplied questions, rejecting malformed entries.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let catalog = Self { questions };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks id uniqueness and range, scoring-map integrity, and catalog size.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = BTreeSet::new();
        for question in &self.questions {
            if question.id == 0 || usize::from(question.id) > CATALOG_SIZE {
                return Err(CatalogError::IdOutOfRange(question.id));
            }
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateId(question.id));
            }
            validate_scoring(question)?;
        }

        if self.questions.len() != CATALOG_SIZE {
            return Err(CatalogError::UnexpectedSize {
                expected: CATALOG_SIZE,
                found: self.questions.len(),
            });
        }

        Ok(())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: u16) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn ids(&self) -> Vec<u16> {
        self.questions.iter().map(|question| question.id).collect()
    }

    pub fn questions_for_axis(&self, axis: Axis) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.axis == axis)
            .collect()
    }

    pub fn count_by_axis(&self) -> BTreeMap<Axis, usize> {
        let mut counts: BTreeMap<Axis, usize> =
            Axis::ordered().into_iter().map(|axis| (axis, 0)).collect();
        for question in &self.questions {
            *counts.entry(question.axis).or_default() += 1;
        }
        counts
    }

    /// How many questions can resolve to each pole.
    pub fn balance(&self) -> CatalogBalance {
        let mut reachable: BTreeMap<Pole, usize> =
            Pole::ordered().into_iter().map(|pole| (pole, 0)).collect();
        for question in &self.questions {
            *reachable.entry(question.scoring.a).or_default() += 1;
            if question.scoring.b != question.scoring.a {
                *reachable.entry(question.scoring.b).or_default() += 1;
            }
        }
        CatalogBalance { reachable }
    }

    /// Questions in the requested order and language. Unknown ids are skipped.
    pub fn localized_in_order(&self, order: &[u16], language: Language) -> Vec<LocalizedQuestion> {
        order
            .iter()
            .filter_map(|id| self.get(*id))
            .map(|question| question.localized(language))
            .collect()
    }

    pub fn score(&self, answers: &AnswerSet) -> AssessmentScores {
        compute_scores(answers, &self.questions)
    }
}

fn validate_scoring(question: &Question) -> Result<(), CatalogError> {
    let scoring = question.scoring;
    if scoring.a == scoring.b {
        return Err(CatalogError::SamePole {
            id: question.id,
            pole: scoring.a,
        });
    }

    for pole in [scoring.a, scoring.b] {
        if pole.axis() != question.axis {
            return Err(CatalogError::PoleOutsideAxis {
                id: question.id,
                axis: question.axis,
                pole,
            });
        }
    }

    Ok(())
}

/// Reachability of every pole across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogBalance {
    pub reachable: BTreeMap<Pole, usize>,
}

impl CatalogBalance {
    pub fn is_balanced(&self) -> bool {
        let mut counts = self.reachable.values();
        match counts.next() {
            Some(first) => counts.all(|count| count == first),
            None => true,
        }
    }

    /// Poles reachable by fewer questions than the best-covered pole.
    pub fn underrepresented(&self) -> Vec<Pole> {
        let max = self.reachable.values().copied().max().unwrap_or(0);
        self.reachable
            .iter()
            .filter(|(_, count)| **count < max)
            .map(|(pole, _)| *pole)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::{LocalizedText, OptionScoring};

    fn blank() -> LocalizedText {
        LocalizedText { en: "", ms: "" }
    }

    fn question(id: u16, axis: Axis, a: Pole, b: Pole) -> Question {
        Question {
            id,
            axis,
            text: blank(),
            option_a: blank(),
            option_b: blank(),
            scoring: OptionScoring { a, b },
        }
    }

    fn standard_with(replacement: Question) -> Vec<Question> {
        let mut questions = QuestionCatalog::standard().questions().to_vec();
        let slot = questions
            .iter_mut()
            .find(|question| question.id == replacement.id)
            .expect("replacement id exists in catalog");
        *slot = replacement;
        questions
    }

    #[test]
    fn standard_catalog_is_valid_and_balanced() {
        let catalog = QuestionCatalog::standard();
        catalog.validate().expect("standard catalog validates");

        assert_eq!(catalog.len(), CATALOG_SIZE);
        assert!(catalog
            .count_by_axis()
            .values()
            .all(|count| *count == 25));

        let balance = catalog.balance();
        assert!(balance.is_balanced());
        assert!(balance.underrepresented().is_empty());
        assert_eq!(balance.reachable.get(&Pole::Intuition), Some(&25));
    }

    #[test]
    fn standard_catalog_ids_cover_full_range() {
        let mut ids = QuestionCatalog::standard().ids();
        ids.sort_unstable();
        assert_eq!(ids, (1..=100).collect::<Vec<u16>>());
    }

    #[test]
    fn rejects_both_options_on_same_pole() {
        let broken = question(1, Axis::Ei, Pole::Extraversion, Pole::Extraversion);
        let error = QuestionCatalog::from_questions(standard_with(broken))
            .expect_err("same pole rejected");
        assert_eq!(
            error,
            CatalogError::SamePole {
                id: 1,
                pole: Pole::Extraversion
            }
        );
    }

    #[test]
    fn rejects_pole_from_another_axis() {
        let broken = question(2, Axis::Sn, Pole::Sensing, Pole::Feeling);
        let error = QuestionCatalog::from_questions(standard_with(broken))
            .expect_err("foreign pole rejected");
        assert!(matches!(
            error,
            CatalogError::PoleOutsideAxis {
                id: 2,
                axis: Axis::Sn,
                pole: Pole::Feeling
            }
        ));
    }

    #[test]
    fn rejects_duplicate_and_out_of_range_ids() {
        let mut questions = QuestionCatalog::standard().questions().to_vec();
        questions.push(question(7, Axis::Tf, Pole::Thinking, Pole::Feeling));
        assert_eq!(
            QuestionCatalog::from_questions(questions).expect_err("duplicate rejected"),
            CatalogError::DuplicateId(7)
        );

        let out_of_range = question(0, Axis::Tf, Pole::Thinking, Pole::Feeling);
        assert_eq!(
            QuestionCatalog::from_questions(vec![out_of_range]).expect_err("zero id rejected"),
            CatalogError::IdOutOfRange(0)
        );
    }

    #[test]
    fn rejects_incomplete_catalog() {
        let questions = QuestionCatalog::standard().questions()[..60].to_vec();
        assert_eq!(
            QuestionCatalog::from_questions(questions).expect_err("short catalog rejected"),
            CatalogError::UnexpectedSize {
                expected: 100,
                found: 60
            }
        );
    }

    #[test]
    fn reversed_mapping_stays_balanced_but_truncation_does_not() {
        let reversed = question(1, Axis::Ei, Pole::Introversion, Pole::Extraversion);
        let catalog =
            QuestionCatalog::from_questions(standard_with(reversed)).expect("reversed map is valid");
        assert!(catalog.balance().is_balanced());

        let mut skewed = QuestionCatalog::standard().questions().to_vec();
        skewed.truncate(99);
        let balance = QuestionCatalog { questions: skewed }.balance();
        assert!(!balance.is_balanced());
        assert_eq!(
            balance.underrepresented(),
            vec![Pole::Judging, Pole::Perceiving]
        );
    }

    #[test]
    fn localized_order_follows_requested_ids() {
        let catalog = QuestionCatalog::standard();
        let rendered = catalog.localized_in_order(&[3, 1, 999], Language::Ms);
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].id, 3);
        assert_eq!(rendered[1].id, 1);
        assert_eq!(rendered[1].text, "Di sebuah pesta, anda cenderung untuk:");
    }
}
