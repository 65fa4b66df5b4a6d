//! Keirsey temperament assessment: question catalog, scoring engine,
//! participant sessions and the reporting built on top of them.

pub mod analytics;
pub mod catalog;
pub mod domain;
pub mod insights;
pub mod participants;
pub mod scoring;
pub mod shuffle;

pub use catalog::{CatalogError, QuestionCatalog, CATALOG_SIZE, CATALOG_VERSION};
pub use domain::{
    AnswerOption, AnswerSet, Axis, Language, LocalizedQuestion, Pole, Question, Temperament,
};
pub use scoring::{compute_scores, AssessmentScores, DimensionPercentages, TemperamentScores};
