use super::super::domain::{AnswerSet, Axis, Pole, Question};
use serde::{Deserialize, Serialize};

/// Per-pole counts of answered questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionTally {
    #[serde(rename = "E")]
    pub extraversion: u32,
    #[serde(rename = "I")]
    pub introversion: u32,
    #[serde(rename = "S")]
    pub sensing: u32,
    #[serde(rename = "N")]
    pub intuition: u32,
    #[serde(rename = "T")]
    pub thinking: u32,
    #[serde(rename = "F")]
    pub feeling: u32,
    #[serde(rename = "J")]
    pub judging: u32,
    #[serde(rename = "P")]
    pub perceiving: u32,
}

impl DimensionTally {
    pub const fn count(&self, pole: Pole) -> u32 {
        match pole {
            Pole::Extraversion => self.extraversion,
            Pole::Introversion => self.introversion,
            Pole::Sensing => self.sensing,
            Pole::Intuition => self.intuition,
            Pole::Thinking => self.thinking,
            Pole::Feeling => self.feeling,
            Pole::Judging => self.judging,
            Pole::Perceiving => self.perceiving,
        }
    }

    fn slot_mut(&mut self, pole: Pole) -> &mut u32 {
        match pole {
            Pole::Extraversion => &mut self.extraversion,
            Pole::Introversion => &mut self.introversion,
            Pole::Sensing => &mut self.sensing,
            Pole::Intuition => &mut self.intuition,
            Pole::Thinking => &mut self.thinking,
            Pole::Feeling => &mut self.feeling,
            Pole::Judging => &mut self.judging,
            Pole::Perceiving => &mut self.perceiving,
        }
    }

    pub fn increment(&mut self, pole: Pole) {
        let slot = self.slot_mut(pole);
        *slot = slot.saturating_add(1);
    }

    pub const fn axis_total(&self, axis: Axis) -> u32 {
        let (first, second) = axis.poles();
        self.count(first) + self.count(second)
    }

    pub fn total(&self) -> u32 {
        Axis::ordered()
            .into_iter()
            .map(|axis| self.axis_total(axis))
            .sum()
    }

    /// Pole that wins the axis; the first pole wins ties, including 0 vs 0.
    pub const fn leading_pole(&self, axis: Axis) -> Pole {
        let (first, second) = axis.poles();
        if self.count(first) >= self.count(second) {
            first
        } else {
            second
        }
    }

    /// Four-letter code in `E/I, S/N, T/F, J/P` order.
    pub fn mbti_code(&self) -> String {
        Axis::ordered()
            .into_iter()
            .map(|axis| self.leading_pole(axis).letter())
            .collect()
    }
}

/// Counts one increment per answered catalog question. Answers for ids outside
/// the catalog are ignored.
pub fn tally_answers(answers: &AnswerSet, questions: &[Question]) -> DimensionTally {
    let mut tally = DimensionTally::default();
    for question in questions {
        if let Some(option) = answers.get(question.id) {
            tally.increment(question.scoring.pole_for(option));
        }
    }
    tally
}
