//! Job display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Job;
use crate::output::formatters::{format_date, truncate};

/// Public job listing row.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct JobDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "COMPANY")]
    pub company: String,

    #[tabled(rename = "LOCATION")]
    pub location: String,

    /// Local posting date
    #[tabled(rename = "POSTED")]
    pub posted: String,
}

impl From<&Job> for JobDisplay {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            title: truncate(&job.title, 40),
            company: job.company.clone(),
            location: job.location.clone(),
            posted: format_date(&job.created_at),
        }
    }
}

impl From<Job> for JobDisplay {
    fn from(job: Job) -> Self {
        Self::from(&job)
    }
}

/// Admin job listing row, with visibility.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AdminJobDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "COMPANY")]
    pub company: String,

    #[tabled(rename = "LOCATION")]
    pub location: String,

    /// "Visible" or "Hidden"
    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "POSTED")]
    pub posted: String,
}

impl From<&Job> for AdminJobDisplay {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            title: truncate(&job.title, 40),
            company: job.company.clone(),
            location: job.location.clone(),
            status: if job.hidden { "Hidden" } else { "Visible" }.to_string(),
            posted: format_date(&job.created_at),
        }
    }
}

impl From<Job> for AdminJobDisplay {
    fn from(job: Job) -> Self {
        Self::from(&job)
    }
}
