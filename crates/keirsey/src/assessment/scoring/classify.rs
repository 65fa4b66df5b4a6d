use super::super::domain::Temperament;
use super::temperament::TemperamentScores;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Largest dominant-minus-secondary gap still treated as a blended profile.
pub const HYBRID_GAP_THRESHOLD: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperamentClassification {
    pub dominant_type: Temperament,
    pub secondary_type: Temperament,
    pub gap: u8,
    pub is_hybrid: bool,
}

/// Ranks temperaments by score, descending. Equal scores fall back to
/// [`Temperament::priority`]: guardian, rational, idealist, artisan.
pub fn rank(scores: &TemperamentScores) -> [(Temperament, u8); 4] {
    let mut ranked = scores.entries();
    ranked.sort_by_key(|(temperament, score)| (Reverse(*score), temperament.priority()));
    ranked
}

pub fn classify(scores: &TemperamentScores) -> TemperamentClassification {
    let [(dominant_type, dominant_score), (secondary_type, secondary_score), ..] = rank(scores);
    let gap = dominant_score.saturating_sub(secondary_score);

    TemperamentClassification {
        dominant_type,
        secondary_type,
        gap,
        is_hybrid: gap <= HYBRID_GAP_THRESHOLD,
    }
}
