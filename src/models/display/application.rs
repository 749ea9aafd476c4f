//! Application display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Application, Job};
use crate::output::formatters::{format_date, truncate};

/// Admin application listing row.
///
/// `applied_for` names the job as "title at company" when the job is known.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ApplicationDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "APPLIED FOR")]
    pub applied_for: String,

    #[tabled(rename = "CV")]
    pub cv_link: String,

    #[tabled(rename = "APPLIED")]
    pub applied: String,

    #[tabled(skip)]
    pub job_id: String,

    #[tabled(skip)]
    pub cover_letter: String,
}

impl ApplicationDisplay {
    /// Build a row, looking up the job the application was made for
    pub fn new(application: &Application, jobs: &[Job]) -> Self {
        let applied_for = jobs
            .iter()
            .find(|job| job.id == application.job_id)
            .map(|job| format!("{} at {}", job.title, job.company))
            .unwrap_or_else(|| "--".to_string());

        Self {
            id: application.id.clone(),
            name: application.name.clone(),
            email: application.email.clone(),
            applied_for: truncate(&applied_for, 45),
            cv_link: application
                .cv_link
                .clone()
                .unwrap_or_else(|| "--".to_string()),
            applied: format_date(&application.created_at),
            job_id: application.job_id.clone(),
            cover_letter: application.cover_letter.clone(),
        }
    }
}
