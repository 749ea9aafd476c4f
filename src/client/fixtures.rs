//! Test fixtures and builders for API model types
//!
//! Import via `use crate::client::fixtures::*` in test modules.

use chrono::{DateTime, TimeZone, Utc};

use super::models::{Application, Job};

// ============================================================================
// JobBuilder
// ============================================================================

/// Builder for creating test Job instances.
///
/// # Example
/// ```ignore
/// let job = JobBuilder::new("job-1").title("Rust Engineer").hidden(true).build();
/// ```
#[derive(Debug, Clone)]
pub struct JobBuilder {
    job: Job,
}

impl JobBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            job: Job {
                title: format!("Job {}", id),
                company: "Acme".to_string(),
                location: "Remote".to_string(),
                description: "A role with plenty of interesting problems to work on every day."
                    .to_string(),
                hidden: false,
                created_at: fixed_time(),
                id,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.job.title = title.to_string();
        self
    }

    pub fn company(mut self, company: &str) -> Self {
        self.job.company = company.to_string();
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.job.location = location.to_string();
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.job.hidden = hidden;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.job.created_at = created_at;
        self
    }

    pub fn build(self) -> Job {
        self.job
    }
}

// ============================================================================
// ApplicationBuilder
// ============================================================================

/// Builder for creating test Application instances.
#[derive(Debug, Clone)]
pub struct ApplicationBuilder {
    application: Application,
}

impl ApplicationBuilder {
    /// Create a new builder for an application to `job_id`.
    pub fn new(id: impl Into<String>, job_id: impl Into<String>) -> Self {
        Self {
            application: Application {
                id: id.into(),
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                cv_link: None,
                cover_letter: "I would love to join the team and help build great software."
                    .to_string(),
                job_id: job_id.into(),
                created_at: fixed_time(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.application.name = name.to_string();
        self
    }

    pub fn cv_link(mut self, link: &str) -> Self {
        self.application.cv_link = Some(link.to_string());
        self
    }

    pub fn build(self) -> Application {
        self.application
    }
}

/// 2025-01-15 12:00:00 UTC
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}
