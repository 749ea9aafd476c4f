//! Jobs API trait

use async_trait::async_trait;

use crate::client::models::{Job, NewJob};
use crate::error::Result;

/// Job listing, detail and admin mutations
#[async_trait]
pub trait JobsApi: Send + Sync {
    /// List visible jobs (`GET /jobs/public`)
    async fn list_public_jobs(&self) -> Result<Vec<Job>>;

    /// Fetch a single job (`GET /jobs/{id}`)
    async fn get_job(&self, job_id: &str) -> Result<Job>;

    /// List every job including hidden ones (`GET /jobs/admin`)
    async fn list_admin_jobs(&self) -> Result<Vec<Job>>;

    /// Create a job (`POST /jobs`)
    async fn create_job(&self, job: &NewJob) -> Result<()>;

    /// Hide a job from the public listing (`PATCH /jobs/{id}/hide`)
    async fn hide_job(&self, job_id: &str) -> Result<()>;

    /// Make a hidden job public again (`PATCH /jobs/{id}/unhide`)
    async fn unhide_job(&self, job_id: &str) -> Result<()>;

    /// Delete a job (`DELETE /jobs/{id}`)
    async fn delete_job(&self, job_id: &str) -> Result<()>;
}
