use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::domain::{AnswerSet, Language};
use super::super::scoring::{AssessmentScores, DimensionPercentages};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub String);

/// Registration form as submitted by a participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRegistration {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub language: Language,
    pub consent_given: bool,
}

/// Registration rejected before anything is stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("full name is required")]
    MissingName,
    #[error("email address '{0}' is not valid")]
    InvalidEmail(String),
    #[error("consent is required before starting the assessment")]
    ConsentRequired,
}

impl ParticipantRegistration {
    /// Trims optional fields and lowercases the email.
    pub(crate) fn normalized(self) -> Result<NormalizedRegistration, RegistrationError> {
        let full_name = self.full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(RegistrationError::MissingName);
        }

        let email = normalize_email(&self.email);
        let valid_email = match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && domain.contains('.'),
            None => false,
        };
        if !valid_email {
            return Err(RegistrationError::InvalidEmail(self.email));
        }

        if !self.consent_given {
            return Err(RegistrationError::ConsentRequired);
        }

        Ok(NormalizedRegistration {
            full_name,
            email,
            phone: non_blank(self.phone),
            job_title: non_blank(self.job_title),
            department: non_blank(self.department),
            organization: non_blank(self.organization),
            language: self.language,
        })
    }
}

pub(crate) struct NormalizedRegistration {
    pub(crate) full_name: String,
    pub(crate) email: String,
    pub(crate) phone: Option<String>,
    pub(crate) job_title: Option<String>,
    pub(crate) department: Option<String>,
    pub(crate) organization: Option<String>,
    pub(crate) language: Language,
}

pub(crate) fn normalize_email(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

/// Admin correction of where a participant sits. Absent fields are left alone
/// and blank ones clear the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementUpdate {
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

impl PlacementUpdate {
    pub(crate) fn apply(self, profile: &mut ParticipantProfile) {
        if let Some(organization) = self.organization {
            profile.organization = non_blank(Some(organization));
        }
        if let Some(department) = self.department {
            profile.department = non_blank(Some(department));
        }
    }
}

/// Free-text profile fields that can be renamed in bulk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataField {
    Organization,
    Department,
}

impl MetadataField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::Department => "department",
        }
    }

    pub(crate) fn slot(self, profile: &mut ParticipantProfile) -> &mut Option<String> {
        match self {
            Self::Organization => &mut profile.organization,
            Self::Department => &mut profile.department,
        }
    }

    pub(crate) fn value(self, profile: &ParticipantProfile) -> Option<&str> {
        match self {
            Self::Organization => profile.organization.as_deref(),
            Self::Department => profile.department.as_deref(),
        }
    }
}

/// Rewrite every `from` value of `field` to `to`, e.g. merging "Ops" into "Operations".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRename {
    pub field: MetadataField,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataRenameError {
    #[error("source value is required")]
    MissingSource,
    #[error("target value is required")]
    MissingTarget,
    #[error("source and target cannot be the same")]
    Unchanged,
}

impl MetadataRename {
    pub(crate) fn normalized(self) -> Result<Self, MetadataRenameError> {
        let from = self.from.trim().to_string();
        let to = self.to.trim().to_string();
        if from.is_empty() {
            return Err(MetadataRenameError::MissingSource);
        }
        if to.is_empty() {
            return Err(MetadataRenameError::MissingTarget);
        }
        if from == to {
            return Err(MetadataRenameError::Unchanged);
        }
        Ok(Self {
            field: self.field,
            from,
            to,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantProfile {
    pub participant_id: ParticipantId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub organization: Option<String>,
    pub language: Language,
    pub registered_at: DateTime<Utc>,
}

/// Presentation order handed to one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSession {
    pub seed: u64,
    pub question_order: Vec<u16>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Stored copy of a scoring run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSnapshot {
    pub scores: AssessmentScores,
    pub percentages: DimensionPercentages,
    pub answered: usize,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Registered,
    InProgress,
    Completed,
}

impl AssessmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub profile: ParticipantProfile,
    pub session: Option<AssessmentSession>,
    pub answers: AnswerSet,
    pub result: Option<ResultSnapshot>,
}

impl ParticipantRecord {
    pub fn status(&self) -> AssessmentStatus {
        match (&self.session, &self.result) {
            (_, Some(_)) => AssessmentStatus::Completed,
            (Some(_), None) => AssessmentStatus::InProgress,
            (None, None) => AssessmentStatus::Registered,
        }
    }

    pub fn status_view(&self) -> ParticipantStatusView {
        ParticipantStatusView {
            participant_id: self.profile.participant_id.clone(),
            full_name: self.profile.full_name.clone(),
            status: self.status().label(),
            answered: self.answers.len(),
            mbti_code: self
                .result
                .as_ref()
                .map(|result| result.scores.mbti_code.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticipantStatusView {
    pub participant_id: ParticipantId,
    pub full_name: String,
    pub status: &'static str,
    pub answered: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mbti_code: Option<String>,
}
