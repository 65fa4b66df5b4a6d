use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One of the four bipolar trait axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Axis {
    Ei,
    Sn,
    Tf,
    Jp,
}

impl Axis {
    /// Axes in the order their letters appear in a type code.
    pub const fn ordered() -> [Self; 4] {
        [Self::Ei, Self::Sn, Self::Tf, Self::Jp]
    }

    /// `(first, second)` poles. The first pole wins ties.
    pub const fn poles(self) -> (Pole, Pole) {
        match self {
            Self::Ei => (Pole::Extraversion, Pole::Introversion),
            Self::Sn => (Pole::Sensing, Pole::Intuition),
            Self::Tf => (Pole::Thinking, Pole::Feeling),
            Self::Jp => (Pole::Judging, Pole::Perceiving),
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Ei => "EI",
            Self::Sn => "SN",
            Self::Tf => "TF",
            Self::Jp => "JP",
        }
    }

    pub const fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Ei, Language::En) => "Extraversion vs Introversion",
            (Self::Ei, Language::Ms) => "Ekstraversi vs Introversi",
            (Self::Sn, Language::En) => "Sensing vs Intuition",
            (Self::Sn, Language::Ms) => "Deria vs Intuisi",
            (Self::Tf, Language::En) => "Thinking vs Feeling",
            (Self::Tf, Language::Ms) => "Pemikiran vs Perasaan",
            (Self::Jp, Language::En) => "Judging vs Perceiving",
            (Self::Jp, Language::Ms) => "Pertimbangan vs Persepsi",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One end of an axis, serialized as its single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pole {
    #[serde(rename = "E")]
    Extraversion,
    #[serde(rename = "I")]
    Introversion,
    #[serde(rename = "S")]
    Sensing,
    #[serde(rename = "N")]
    Intuition,
    #[serde(rename = "T")]
    Thinking,
    #[serde(rename = "F")]
    Feeling,
    #[serde(rename = "J")]
    Judging,
    #[serde(rename = "P")]
    Perceiving,
}

impl Pole {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Extraversion,
            Self::Introversion,
            Self::Sensing,
            Self::Intuition,
            Self::Thinking,
            Self::Feeling,
            Self::Judging,
            Self::Perceiving,
        ]
    }

    pub const fn axis(self) -> Axis {
        match self {
            Self::Extraversion | Self::Introversion => Axis::Ei,
            Self::Sensing | Self::Intuition => Axis::Sn,
            Self::Thinking | Self::Feeling => Axis::Tf,
            Self::Judging | Self::Perceiving => Axis::Jp,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Extraversion => 'E',
            Self::Introversion => 'I',
            Self::Sensing => 'S',
            Self::Intuition => 'N',
            Self::Thinking => 'T',
            Self::Feeling => 'F',
            Self::Judging => 'J',
            Self::Perceiving => 'P',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|pole| pole.letter() == letter.to_ascii_uppercase())
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Forced-choice option picked by a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerOption {
    A,
    B,
}

impl FromStr for AnswerOption {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "a" | "A" => Ok(Self::A),
            "b" | "B" => Ok(Self::B),
            other => Err(format!("answer must be 'a' or 'b', found '{other}'")),
        }
    }
}

impl<'de> Deserialize<'de> for AnswerOption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Supported display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ms,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ms => "ms",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ms" | "malay" | "bm" => Ok(Self::Ms),
            other => Err(format!("unsupported language '{other}' (expected en or ms)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub en: &'static str,
    pub ms: &'static str,
}

impl LocalizedText {
    pub const fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Ms => self.ms,
        }
    }
}

/// Which pole each option resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionScoring {
    pub a: Pole,
    pub b: Pole,
}

impl OptionScoring {
    /// Option A maps to the first pole, option B to the second.
    pub const fn for_axis(axis: Axis) -> Self {
        let (first, second) = axis.poles();
        Self {
            a: first,
            b: second,
        }
    }

    pub const fn pole_for(&self, option: AnswerOption) -> Pole {
        match option {
            AnswerOption::A => self.a,
            AnswerOption::B => self.b,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u16,
    pub axis: Axis,
    pub text: LocalizedText,
    pub option_a: LocalizedText,
    pub option_b: LocalizedText,
    pub scoring: OptionScoring,
}

impl Question {
    pub fn localized(&self, language: Language) -> LocalizedQuestion {
        LocalizedQuestion {
            id: self.id,
            axis: self.axis,
            text: self.text.get(language),
            option_a: self.option_a.get(language),
            option_b: self.option_b.get(language),
        }
    }
}

/// Question rendered in a single language, without its scoring key.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedQuestion {
    pub id: u16,
    pub axis: Axis,
    pub text: &'static str,
    pub option_a: &'static str,
    pub option_b: &'static str,
}

/// Answers keyed by stable question id. Partial sets are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<u16, AnswerOption>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any earlier answer for the same question.
    pub fn answer(&mut self, question_id: u16, option: AnswerOption) -> Option<AnswerOption> {
        self.0.insert(question_id, option)
    }

    pub fn get(&self, question_id: u16) -> Option<AnswerOption> {
        self.0.get(&question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, AnswerOption)> + '_ {
        self.0.iter().map(|(id, option)| (*id, *option))
    }
}

/// Keys that are not a question id (`"-1"`, `"70000"`, `"q1"`) are dropped
/// like any other unknown question. Answer values stay strict.
impl<'de> Deserialize<'de> for AnswerSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AnswerSetVisitor)
    }
}

struct AnswerSetVisitor;

impl<'de> Visitor<'de> for AnswerSetVisitor {
    type Value = AnswerSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of question ids to \"a\" or \"b\"")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut answers = AnswerSet::new();
        while let Some((key, option)) = map.next_entry::<QuestionKey, AnswerOption>()? {
            if let QuestionKey(Some(id)) = key {
                answers.answer(id, option);
            }
        }
        Ok(answers)
    }
}

struct QuestionKey(Option<u16>);

impl<'de> Deserialize<'de> for QuestionKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = QuestionKey;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a question id")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(QuestionKey(value.trim().parse().ok()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(QuestionKey(u16::try_from(value).ok()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(QuestionKey(u16::try_from(value).ok()))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

impl FromIterator<(u16, AnswerOption)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (u16, AnswerOption)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Higher-order Keirsey temperaments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperament {
    Guardian,
    Rational,
    Idealist,
    Artisan,
}

impl Temperament {
    /// Declaration order doubles as the tie-break priority when scores are equal.
    pub const fn ordered() -> [Self; 4] {
        [Self::Guardian, Self::Rational, Self::Idealist, Self::Artisan]
    }

    pub const fn priority(self) -> u8 {
        match self {
            Self::Guardian => 0,
            Self::Rational => 1,
            Self::Idealist => 2,
            Self::Artisan => 3,
        }
    }

    /// The two poles whose percentages blend into this temperament.
    pub const fn poles(self) -> (Pole, Pole) {
        match self {
            Self::Guardian => (Pole::Sensing, Pole::Judging),
            Self::Rational => (Pole::Intuition, Pole::Thinking),
            Self::Idealist => (Pole::Intuition, Pole::Feeling),
            Self::Artisan => (Pole::Sensing, Pole::Perceiving),
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Guardian => "guardian",
            Self::Rational => "rational",
            Self::Idealist => "idealist",
            Self::Artisan => "artisan",
        }
    }

    pub const fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Guardian, Language::En) => "Guardian",
            (Self::Guardian, Language::Ms) => "Penguasa",
            (Self::Rational, Language::En) => "Rational",
            (Self::Rational, Language::Ms) => "Pemikir",
            (Self::Idealist, Language::En) => "Idealist",
            (Self::Idealist, Language::Ms) => "Pemulihara",
            (Self::Artisan, Language::En) => "Artisan",
            (Self::Artisan, Language::Ms) => "Penghibur",
        }
    }
}

impl FromStr for Temperament {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|temperament| temperament.key().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| format!("unknown temperament '{raw}'"))
    }
}

impl fmt::Display for Temperament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
