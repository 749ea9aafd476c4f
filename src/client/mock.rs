//! Mock job board client for testing
//!
//! Provides an in-memory implementation of the API traits for unit tests
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{ApplicationsApi, AuthApi, JobsApi};
use super::models::{Application, CredentialBundle, Job, LoginRequest, NewApplication, NewJob};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockJobBoardClient::new().with_jobs(vec![job]);
/// let jobs = mock.list_public_jobs().await?;
/// assert_eq!(jobs.len(), 1);
/// ```
#[derive(Default)]
pub struct MockJobBoardClient {
    /// Jobs returned from the public listing and `get_job`
    jobs: Arc<Mutex<Vec<Job>>>,
    /// Jobs returned from the admin listing
    admin_jobs: Arc<Mutex<Vec<Job>>>,
    /// Applications returned from `list_applications`
    applications: Arc<Mutex<Vec<Application>>>,
    /// Bundle returned from `login`
    bundle: Arc<Mutex<Option<CredentialBundle>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Request bodies sent to the mutation endpoints
    sent: Arc<Mutex<SentBodies>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub list_public_jobs: usize,
    pub get_job: usize,
    pub list_admin_jobs: usize,
    pub create_job: usize,
    pub hide_job: usize,
    pub unhide_job: usize,
    pub delete_job: usize,
    pub list_applications: usize,
    pub submit_application: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.login
            + self.list_public_jobs
            + self.get_job
            + self.list_admin_jobs
            + self.create_job
            + self.hide_job
            + self.unhide_job
            + self.delete_job
            + self.list_applications
            + self.submit_application
    }
}

/// Bodies captured from mutation calls
#[derive(Default, Debug, Clone)]
pub struct SentBodies {
    pub logins: Vec<LoginRequest>,
    pub jobs: Vec<NewJob>,
    pub applications: Vec<NewApplication>,
}

impl MockJobBoardClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set jobs for the public listing and detail lookups
    pub fn with_jobs(self, jobs: Vec<Job>) -> Self {
        *self.jobs.try_lock().expect("mock not shared yet") = jobs;
        self
    }

    /// Set jobs for the admin listing
    pub fn with_admin_jobs(self, jobs: Vec<Job>) -> Self {
        *self.admin_jobs.try_lock().expect("mock not shared yet") = jobs;
        self
    }

    /// Set applications for the admin listing
    pub fn with_applications(self, applications: Vec<Application>) -> Self {
        *self.applications.try_lock().expect("mock not shared yet") = applications;
        self
    }

    /// Set the bundle returned by a successful login
    pub fn with_bundle(self, bundle: CredentialBundle) -> Self {
        *self.bundle.try_lock().expect("mock not shared yet") = Some(bundle);
        self
    }

    /// Fail the next call with `error`
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    pub async fn sent(&self) -> SentBodies {
        self.sent.lock().await.clone()
    }

    async fn take_error(&self) -> Result<()> {
        match self.error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AuthApi for MockJobBoardClient {
    async fn login(&self, request: &LoginRequest) -> Result<CredentialBundle> {
        self.call_count.lock().await.login += 1;
        self.sent.lock().await.logins.push(request.clone());
        self.take_error().await?;
        self.bundle
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::Unauthorized.into())
    }
}

#[async_trait]
impl JobsApi for MockJobBoardClient {
    async fn list_public_jobs(&self) -> Result<Vec<Job>> {
        self.call_count.lock().await.list_public_jobs += 1;
        self.take_error().await?;
        Ok(self.jobs.lock().await.clone())
    }

    async fn get_job(&self, job_id: &str) -> Result<Job> {
        self.call_count.lock().await.get_job += 1;
        self.take_error().await?;
        self.jobs
            .lock()
            .await
            .iter()
            .find(|job| job.id == job_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Job {}", job_id)).into())
    }

    async fn list_admin_jobs(&self) -> Result<Vec<Job>> {
        self.call_count.lock().await.list_admin_jobs += 1;
        self.take_error().await?;
        Ok(self.admin_jobs.lock().await.clone())
    }

    async fn create_job(&self, job: &NewJob) -> Result<()> {
        self.call_count.lock().await.create_job += 1;
        self.sent.lock().await.jobs.push(job.clone());
        self.take_error().await
    }

    async fn hide_job(&self, _job_id: &str) -> Result<()> {
        self.call_count.lock().await.hide_job += 1;
        self.take_error().await
    }

    async fn unhide_job(&self, _job_id: &str) -> Result<()> {
        self.call_count.lock().await.unhide_job += 1;
        self.take_error().await
    }

    async fn delete_job(&self, _job_id: &str) -> Result<()> {
        self.call_count.lock().await.delete_job += 1;
        self.take_error().await
    }
}

#[async_trait]
impl ApplicationsApi for MockJobBoardClient {
    async fn list_applications(&self) -> Result<Vec<Application>> {
        self.call_count.lock().await.list_applications += 1;
        self.take_error().await?;
        Ok(self.applications.lock().await.clone())
    }

    async fn submit_application(&self, application: &NewApplication) -> Result<()> {
        self.call_count.lock().await.submit_application += 1;
        self.sent.lock().await.applications.push(application.clone());
        self.take_error().await
    }
}
