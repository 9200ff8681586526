use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of an application. Serialized with the display strings the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[default]
    Applied,
    #[serde(rename = "In Review")]
    InReview,
    Interview,
    #[serde(rename = "Final Interview")]
    FinalInterview,
    Offer,
    Rejected,
    Accepted,
}

/// Dashboard bucket a status falls into. Every status maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStage {
    InProgress,
    InterviewInvite,
    Rejected,
    Accepted,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 7] = [
        ApplicationStatus::Applied,
        ApplicationStatus::InReview,
        ApplicationStatus::Interview,
        ApplicationStatus::FinalInterview,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
        ApplicationStatus::Accepted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::InReview => "In Review",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::FinalInterview => "Final Interview",
            ApplicationStatus::Offer => "Offer",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Accepted => "Accepted",
        }
    }

    pub fn stage(&self) -> StatusStage {
        match self {
            ApplicationStatus::Applied | ApplicationStatus::InReview => StatusStage::InProgress,
            ApplicationStatus::Interview
            | ApplicationStatus::FinalInterview
            | ApplicationStatus::Offer => StatusStage::InterviewInvite,
            ApplicationStatus::Rejected => StatusStage::Rejected,
            ApplicationStatus::Accepted => StatusStage::Accepted,
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected: Vec<&str> = ApplicationStatus::ALL.iter().map(|s| s.as_str()).collect();
        write!(
            f,
            "invalid status '{}', expected one of: {}",
            self.0,
            expected.join(", ")
        )
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: i64,
    pub user_id: i64,
    pub job_id: i64,
    pub status: ApplicationStatus,
    pub applied_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub notes: String,
    /// External workspace page id. Empty when sync was unavailable at apply time.
    pub notion_page_id: String,
}

#[derive(Debug, Clone)]
pub struct NewApplication {
    pub user_id: i64,
    pub job_id: i64,
    pub status: ApplicationStatus,
    pub applied_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub notes: String,
    pub notion_page_id: String,
}

impl NewApplication {
    /// A fresh application stamped with the current time and default fields.
    pub fn new(user_id: i64, job_id: i64) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            job_id,
            status: ApplicationStatus::default(),
            applied_date: now,
            last_updated: now,
            notes: String::new(),
            notion_page_id: String::new(),
        }
    }

    pub fn with_status(mut self, status: ApplicationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub(crate) fn into_application(self, id: i64) -> Application {
        Application {
            id,
            user_id: self.user_id,
            job_id: self.job_id,
            status: self.status,
            applied_date: self.applied_date,
            last_updated: self.last_updated,
            notes: self.notes,
            notion_page_id: self.notion_page_id,
        }
    }
}

/// Partial update for an `Application`. The store always restamps `last_updated`.
#[derive(Debug, Clone, Default)]
pub struct ApplicationPatch {
    pub status: Option<ApplicationStatus>,
    pub notes: Option<String>,
    pub notion_page_id: Option<String>,
}

impl ApplicationPatch {
    pub fn status(status: ApplicationStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub(crate) fn apply(self, application: &mut Application, now: DateTime<Utc>) {
        if let Some(status) = self.status {
            application.status = status;
        }
        if let Some(notes) = self.notes {
            application.notes = notes;
        }
        if let Some(page_id) = self.notion_page_id {
            application.notion_page_id = page_id;
        }
        application.last_updated = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_with_display_strings() {
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::InReview).unwrap(),
            "\"In Review\""
        );
        assert_eq!(
            serde_json::from_str::<ApplicationStatus>("\"Final Interview\"").unwrap(),
            ApplicationStatus::FinalInterview
        );
    }

    #[test]
    fn test_status_from_str_is_exact() {
        assert_eq!("Offer".parse::<ApplicationStatus>(), Ok(ApplicationStatus::Offer));
        assert!("offer".parse::<ApplicationStatus>().is_err());
        assert!("Ghosted".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn test_unknown_status_lists_valid_values() {
        let err = "Ghosted".parse::<ApplicationStatus>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Ghosted"));
        assert!(msg.contains("Final Interview"));
    }

    #[test]
    fn test_every_status_has_one_stage() {
        let stages: Vec<StatusStage> = ApplicationStatus::ALL.iter().map(|s| s.stage()).collect();
        assert_eq!(stages.iter().filter(|s| **s == StatusStage::InProgress).count(), 2);
        assert_eq!(stages.iter().filter(|s| **s == StatusStage::InterviewInvite).count(), 3);
        assert_eq!(stages.iter().filter(|s| **s == StatusStage::Rejected).count(), 1);
        assert_eq!(stages.iter().filter(|s| **s == StatusStage::Accepted).count(), 1);
    }

    #[test]
    fn test_patch_restamps_last_updated() {
        let mut app = NewApplication::new(1, 2).into_application(7);
        let later = app.last_updated + chrono::Duration::hours(1);
        ApplicationPatch::status(ApplicationStatus::Interview).apply(&mut app, later);
        assert_eq!(app.status, ApplicationStatus::Interview);
        assert_eq!(app.last_updated, later);
        assert_eq!(app.id, 7);
    }
}
