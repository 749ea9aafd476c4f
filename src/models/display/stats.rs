//! Admin dashboard statistics

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::models::{Application, Job};
use crate::output::table::format_pairs;

/// Counts shown on the admin dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsDisplay {
    pub total_jobs: usize,
    pub total_applications: usize,
    /// Jobs created in the current calendar month
    pub jobs_this_month: usize,
}

impl StatsDisplay {
    pub fn compute(jobs: &[Job], applications: &[Application], now: DateTime<Utc>) -> Self {
        Self {
            total_jobs: jobs.len(),
            total_applications: applications.len(),
            jobs_this_month: jobs.iter().filter(|j| j.posted_in_month_of(now)).count(),
        }
    }

    pub fn to_table(&self) -> String {
        format_pairs(&[
            ("Total jobs", self.total_jobs.to_string()),
            ("Applications", self.total_applications.to_string()),
            ("Posted this month", self.jobs_this_month.to_string()),
        ])
    }
}
