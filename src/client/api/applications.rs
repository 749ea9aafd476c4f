//! Applications API trait

use async_trait::async_trait;

use crate::client::models::{Application, NewApplication};
use crate::error::Result;

/// Job application operations
#[async_trait]
pub trait ApplicationsApi: Send + Sync {
    /// List all applications (`GET /applications`)
    async fn list_applications(&self) -> Result<Vec<Application>>;

    /// Submit an application (`POST /applications`)
    async fn submit_application(&self, application: &NewApplication) -> Result<()>;
}
