use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub company_name: String,
    pub company_initials: String,
    /// Display colour name used by the job card, e.g. "indigo".
    pub company_color: String,
    pub position: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
    pub description: String,
    pub requirements: String,
    pub posted_date: DateTime<Utc>,
    /// External workspace page id, empty when the job was never mirrored.
    pub notion_page_id: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub company_name: String,
    pub company_initials: String,
    pub company_color: String,
    pub position: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default = "Utc::now")]
    pub posted_date: DateTime<Utc>,
    #[serde(default)]
    pub notion_page_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewJob {
    pub(crate) fn into_job(self, id: i64) -> Job {
        Job {
            id,
            company_name: self.company_name,
            company_initials: self.company_initials,
            company_color: self.company_color,
            position: self.position,
            location: self.location,
            salary: self.salary,
            job_type: self.job_type,
            description: self.description,
            requirements: self.requirements,
            posted_date: self.posted_date,
            notion_page_id: self.notion_page_id,
            tags: self.tags,
        }
    }
}

/// Field-wise partial update for a `Job`. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    pub company_name: Option<String>,
    pub company_initials: Option<String>,
    pub company_color: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub job_type: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub posted_date: Option<DateTime<Utc>>,
    pub notion_page_id: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl JobPatch {
    pub(crate) fn apply(self, job: &mut Job) {
        if let Some(v) = self.company_name {
            job.company_name = v;
        }
        if let Some(v) = self.company_initials {
            job.company_initials = v;
        }
        if let Some(v) = self.company_color {
            job.company_color = v;
        }
        if let Some(v) = self.position {
            job.position = v;
        }
        if let Some(v) = self.location {
            job.location = v;
        }
        if let Some(v) = self.salary {
            job.salary = v;
        }
        if let Some(v) = self.job_type {
            job.job_type = v;
        }
        if let Some(v) = self.description {
            job.description = v;
        }
        if let Some(v) = self.requirements {
            job.requirements = v;
        }
        if let Some(v) = self.posted_date {
            job.posted_date = v;
        }
        if let Some(v) = self.notion_page_id {
            job.notion_page_id = v;
        }
        if let Some(v) = self.tags {
            job.tags = v;
        }
    }
}
