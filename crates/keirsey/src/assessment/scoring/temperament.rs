use super::super::domain::{Axis, Pole, Temperament};
use super::tally::DimensionTally;
use serde::{Deserialize, Serialize};

/// Exact share of an axis held by one pole, kept as a fraction so rounding
/// happens once on the true value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoleShare {
    numerator: u64,
    denominator: u64,
}

impl PoleShare {
    /// Share of `pole` on its axis; an axis with no answers splits 50/50.
    pub fn of(tally: &DimensionTally, pole: Pole) -> Self {
        let total = u64::from(tally.axis_total(pole.axis()));
        if total == 0 {
            return Self {
                numerator: 1,
                denominator: 2,
            };
        }
        Self {
            numerator: u64::from(tally.count(pole)),
            denominator: total,
        }
    }

    pub fn percent(self) -> f64 {
        self.numerator as f64 * 100.0 / self.denominator as f64
    }

    pub fn rounded_percent(self) -> u8 {
        clamp_percent(round_half_up(self.numerator * 100, self.denominator))
    }

    /// `round((self% + other%) / 2)` evaluated without floating point.
    pub fn blend(self, other: Self) -> u8 {
        let numerator =
            100 * (self.numerator * other.denominator + other.numerator * self.denominator);
        let denominator = 2 * self.denominator * other.denominator;
        clamp_percent(round_half_up(numerator, denominator))
    }
}

fn round_half_up(numerator: u64, denominator: u64) -> u64 {
    (2 * numerator + denominator) / (2 * denominator)
}

fn clamp_percent(value: u64) -> u8 {
    value.min(100) as u8
}

/// Temperament strengths on a 0-100 scale. They are independent and do not sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemperamentScores {
    pub guardian: u8,
    pub rational: u8,
    pub idealist: u8,
    pub artisan: u8,
}

impl TemperamentScores {
    pub const fn get(&self, temperament: Temperament) -> u8 {
        match temperament {
            Temperament::Guardian => self.guardian,
            Temperament::Rational => self.rational,
            Temperament::Idealist => self.idealist,
            Temperament::Artisan => self.artisan,
        }
    }

    pub fn entries(&self) -> [(Temperament, u8); 4] {
        Temperament::ordered().map(|temperament| (temperament, self.get(temperament)))
    }
}

pub fn temperament_scores(tally: &DimensionTally) -> TemperamentScores {
    let score = |temperament: Temperament| {
        let (left, right) = temperament.poles();
        PoleShare::of(tally, left).blend(PoleShare::of(tally, right))
    };

    TemperamentScores {
        guardian: score(Temperament::Guardian),
        rational: score(Temperament::Rational),
        idealist: score(Temperament::Idealist),
        artisan: score(Temperament::Artisan),
    }
}

/// Rounded per-pole percentages for display. Each pole is rounded on its own,
/// so a pair can total 101 when both sides sit on a half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionPercentages {
    #[serde(rename = "E")]
    pub extraversion: u8,
    #[serde(rename = "I")]
    pub introversion: u8,
    #[serde(rename = "S")]
    pub sensing: u8,
    #[serde(rename = "N")]
    pub intuition: u8,
    #[serde(rename = "T")]
    pub thinking: u8,
    #[serde(rename = "F")]
    pub feeling: u8,
    #[serde(rename = "J")]
    pub judging: u8,
    #[serde(rename = "P")]
    pub perceiving: u8,
}

impl DimensionPercentages {
    pub const fn get(&self, pole: Pole) -> u8 {
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

    pub fn for_axis(&self, axis: Axis) -> (u8, u8) {
        let (first, second) = axis.poles();
        (self.get(first), self.get(second))
    }
}

pub fn dimension_percentages(tally: &DimensionTally) -> DimensionPercentages {
    let percent = |pole: Pole| PoleShare::of(tally, pole).rounded_percent();

    DimensionPercentages {
        extraversion: percent(Pole::Extraversion),
        introversion: percent(Pole::Introversion),
        sensing: percent(Pole::Sensing),
        intuition: percent(Pole::Intuition),
        thinking: percent(Pole::Thinking),
        feeling: percent(Pole::Feeling),
        judging: percent(Pole::Judging),
        perceiving: percent(Pole::Perceiving),
    }
}
