//! Job models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,

    pub title: String,

    pub company: String,

    pub location: String,

    #[serde(default)]
    pub description: String,

    /// Hidden jobs only appear in the admin listing. Absent on public responses.
    #[serde(default)]
    pub hidden: bool,

    pub created_at: DateTime<Utc>,
}

impl Job {
    /// Case-insensitive match of `query` against title, company and location
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.title, &self.company, &self.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Whether the job was posted in the same calendar month as `now`
    pub fn posted_in_month_of(&self, now: DateTime<Utc>) -> bool {
        use chrono::Datelike;
        self.created_at.year() == now.year() && self.created_at.month() == now.month()
    }
}

/// Body of `POST /jobs`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
}
