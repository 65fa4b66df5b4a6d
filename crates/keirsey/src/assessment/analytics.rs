//! Aggregate views over stored participants for administrators.

use super::domain::Temperament;
use super::participants::{ParticipantId, ParticipantRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

const UNSPECIFIED_DEPARTMENT: &str = "Unspecified";

/// Share of completed assessments per dominant temperament, in whole percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperamentDistribution {
    pub guardian: u8,
    pub rational: u8,
    pub idealist: u8,
    pub artisan: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperamentCounts {
    pub guardian: usize,
    pub rational: usize,
    pub idealist: usize,
    pub artisan: usize,
}

impl TemperamentCounts {
    fn record(&mut self, temperament: Temperament) {
        match temperament {
            Temperament::Guardian => self.guardian += 1,
            Temperament::Rational => self.rational += 1,
            Temperament::Idealist => self.idealist += 1,
            Temperament::Artisan => self.artisan += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.guardian + self.rational + self.idealist + self.artisan
    }

    fn distribution(&self) -> TemperamentDistribution {
        let total = self.total();
        let share = |count: usize| -> u8 {
            if total == 0 {
                return 0;
            }
            ((count * 200 + total) / (total * 2)).min(100) as u8
        };

        TemperamentDistribution {
            guardian: share(self.guardian),
            rational: share(self.rational),
            idealist: share(self.idealist),
            artisan: share(self.artisan),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentBreakdown {
    pub department: String,
    pub completed: usize,
    pub dominant_counts: TemperamentCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentStats {
    pub total_participants: usize,
    pub completed_assessments: usize,
    pub distribution: TemperamentDistribution,
    pub departments: Vec<DepartmentBreakdown>,
}

pub fn summarize(records: &[ParticipantRecord]) -> AssessmentStats {
    let mut overall = TemperamentCounts::default();
    let mut departments: BTreeMap<String, TemperamentCounts> = BTreeMap::new();

    for record in records {
        let Some(result) = &record.result else {
            continue;
        };
        let dominant = result.scores.dominant_type;
        overall.record(dominant);

        let department = record
            .profile
            .department
            .clone()
            .unwrap_or_else(|| UNSPECIFIED_DEPARTMENT.to_string());
        departments.entry(department).or_default().record(dominant);
    }

    AssessmentStats {
        total_participants: records.len(),
        completed_assessments: overall.total(),
        distribution: overall.distribution(),
        departments: departments
            .into_iter()
            .map(|(department, counts)| DepartmentBreakdown {
                department,
                completed: counts.total(),
                dominant_counts: counts,
            })
            .collect(),
    }
}

fn default_limit() -> usize {
    50
}

/// Admin listing filter. Blank or absent fields match everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default, rename = "type")]
    pub dominant_type: Option<Temperament>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

impl Default for ParticipantFilter {
    fn default() -> Self {
        Self {
            search: None,
            dominant_type: None,
            department: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl ParticipantFilter {
    fn matches(&self, record: &ParticipantRecord) -> bool {
        let profile = &record.profile;

        if let Some(needle) = self.search.as_deref().map(str::trim) {
            let needle = needle.to_lowercase();
            if !needle.is_empty()
                && !profile.full_name.to_lowercase().contains(&needle)
                && !profile.email.contains(&needle)
            {
                return false;
            }
        }

        if let Some(dominant) = self.dominant_type {
            let matches_type = record
                .result
                .as_ref()
                .is_some_and(|result| result.scores.dominant_type == dominant);
            if !matches_type {
                return false;
            }
        }

        if let Some(department) = self.department.as_deref() {
            if profile.department.as_deref() != Some(department) {
                return false;
            }
        }

        true
    }
}

/// One row of the admin participant table.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantSummaryView {
    pub participant_id: ParticipantId,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    pub registered_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mbti_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_type: Option<Temperament>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hybrid: Option<bool>,
}

impl From<&ParticipantRecord> for ParticipantSummaryView {
    fn from(record: &ParticipantRecord) -> Self {
        let profile = &record.profile;
        let scores = record.result.as_ref().map(|result| &result.scores);
        Self {
            participant_id: profile.participant_id.clone(),
            full_name: profile.full_name.clone(),
            email: profile.email.clone(),
            department: profile.department.clone(),
            job_title: profile.job_title.clone(),
            registered_at: profile.registered_at,
            mbti_code: scores.map(|scores| scores.mbti_code.clone()),
            dominant_type: scores.map(|scores| scores.dominant_type),
            is_hybrid: scores.map(|scores| scores.is_hybrid),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticipantPage {
    pub data: Vec<ParticipantSummaryView>,
    pub total: usize,
}

/// Newest registrations first, then filtered and paged.
pub fn list_participants(records: &[ParticipantRecord], filter: &ParticipantFilter) -> ParticipantPage {
    let mut matching: Vec<&ParticipantRecord> =
        records.iter().filter(|record| filter.matches(record)).collect();
    matching.sort_by(|left, right| {
        right
            .profile
            .registered_at
            .cmp(&left.profile.registered_at)
            .then_with(|| right.profile.participant_id.cmp(&left.profile.participant_id))
    });

    let total = matching.len();
    let data = matching
        .into_iter()
        .skip(filter.offset)
        .take(filter.limit)
        .map(ParticipantSummaryView::from)
        .collect();

    ParticipantPage { data, total }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    participant_id: &'a str,
    full_name: &'a str,
    email: &'a str,
    department: &'a str,
    job_title: &'a str,
    completed_at: String,
    mbti_code: &'a str,
    guardian: u8,
    rational: u8,
    idealist: u8,
    artisan: u8,
    dominant_type: &'static str,
    secondary_type: &'static str,
    is_hybrid: bool,
}

/// Writes one CSV row per completed assessment, ordered by completion time.
pub fn write_csv_report<W>(records: &[ParticipantRecord], writer: W) -> Result<usize, ExportError>
where
    W: Write,
{
    let mut completed: Vec<_> = records
        .iter()
        .filter_map(|record| record.result.as_ref().map(|result| (record, result)))
        .collect();
    completed.sort_by_key(|(record, result)| {
        (result.completed_at, record.profile.participant_id.clone())
    });

    let mut csv_writer = csv::Writer::from_writer(writer);
    for (record, result) in &completed {
        let profile = &record.profile;
        let scores = &result.scores;
        csv_writer.serialize(ExportRow {
            participant_id: &profile.participant_id.0,
            full_name: &profile.full_name,
            email: &profile.email,
            department: profile.department.as_deref().unwrap_or_default(),
            job_title: profile.job_title.as_deref().unwrap_or_default(),
            completed_at: result.completed_at.to_rfc3339(),
            mbti_code: &scores.mbti_code,
            guardian: scores.temperaments.guardian,
            rational: scores.temperaments.rational,
            idealist: scores.temperaments.idealist,
            artisan: scores.temperaments.artisan,
            dominant_type: scores.dominant_type.key(),
            secondary_type: scores.secondary_type.key(),
            is_hybrid: scores.is_hybrid,
        })?;
    }
    csv_writer.flush()?;

    Ok(completed.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog::QuestionCatalog;
    use crate::assessment::domain::{AnswerOption, AnswerSet, Language};
    use crate::assessment::participants::{ParticipantProfile, ResultSnapshot};
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, 9, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn record(id: &str, department: Option<&str>, option: Option<AnswerOption>, day: u32) -> ParticipantRecord {
        let catalog = QuestionCatalog::standard();
        let result = option.map(|option| {
            let answers: AnswerSet = catalog.ids().into_iter().map(|id| (id, option)).collect();
            let scores = catalog.score(&answers);
            ResultSnapshot {
                percentages: scores.dimension_percentages(),
                scores,
                answered: 100,
                completed_at: at(day),
            }
        });

        ParticipantRecord {
            profile: ParticipantProfile {
                participant_id: ParticipantId(id.to_string()),
                full_name: format!("Participant {id}"),
                email: format!("{id}@example.com"),
                phone: None,
                job_title: Some("Engineer".to_string()),
                department: department.map(str::to_string),
                organization: None,
                language: Language::En,
                registered_at: at(day),
            },
            session: None,
            answers: AnswerSet::new(),
            result,
        }
    }

    fn sample() -> Vec<ParticipantRecord> {
        vec![
            record("p1", Some("Finance"), Some(AnswerOption::A), 1),
            record("p2", Some("Finance"), Some(AnswerOption::A), 2),
            record("p3", None, Some(AnswerOption::B), 3),
            record("p4", Some("Design"), None, 4),
        ]
    }

    #[test]
    fn summary_counts_completed_results_by_dominant_type() {
        let stats = summarize(&sample());

        assert_eq!(stats.total_participants, 4);
        assert_eq!(stats.completed_assessments, 3);
        assert_eq!(
            stats.distribution,
            TemperamentDistribution {
                guardian: 67,
                rational: 0,
                idealist: 33,
                artisan: 0,
            }
        );

        let departments: Vec<&str> = stats
            .departments
            .iter()
            .map(|entry| entry.department.as_str())
            .collect();
        assert_eq!(departments, vec!["Finance", "Unspecified"]);
        assert_eq!(stats.departments[0].dominant_counts.guardian, 2);
        assert_eq!(stats.departments[1].dominant_counts.idealist, 1);
    }

    #[test]
    fn empty_summary_has_zero_distribution() {
        let stats = summarize(&[]);
        assert_eq!(stats.completed_assessments, 0);
        assert_eq!(stats.distribution, TemperamentDistribution::default());
        assert!(stats.departments.is_empty());
    }

    #[test]
    fn listing_filters_and_orders_newest_first() {
        let records = sample();

        let page = list_participants(&records, &ParticipantFilter::default());
        assert_eq!(page.total, 4);
        assert_eq!(page.data[0].participant_id.0, "p4");

        let guardians = ParticipantFilter {
            dominant_type: Some(Temperament::Guardian),
            ..ParticipantFilter::default()
        };
        let page = list_participants(&records, &guardians);
        assert_eq!(page.total, 2);
        assert!(page
            .data
            .iter()
            .all(|row| row.dominant_type == Some(Temperament::Guardian)));

        let search = ParticipantFilter {
            search: Some("  P3 ".to_string()),
            ..ParticipantFilter::default()
        };
        assert_eq!(list_participants(&records, &search).total, 1);

        let paged = ParticipantFilter {
            department: Some("Finance".to_string()),
            limit: 1,
            offset: 1,
            ..ParticipantFilter::default()
        };
        let page = list_participants(&records, &paged);
        assert_eq!(page.total, 2);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].participant_id.0, "p1");
    }

    #[test]
    fn csv_report_has_header_and_completed_rows() {
        let mut buffer = Vec::new();
        let rows = write_csv_report(&sample(), &mut buffer).expect("export succeeds");
        assert_eq!(rows, 3);

        let text = String::from_utf8(buffer).expect("utf8 csv");
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("participant_id,full_name,email,department,job_title,completed_at,mbti_code,guardian,rational,idealist,artisan,dominant_type,secondary_type,is_hybrid")
        );
        let first = lines.next().expect("first row");
        assert!(first.starts_with("p1,Participant p1,p1@example.com,Finance,Engineer,"));
        assert!(first.ends_with(",ESTJ,100,50,0,50,guardian,rational,false"));
        assert_eq!(lines.count(), 2);
    }
}
