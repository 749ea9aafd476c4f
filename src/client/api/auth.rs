//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{CredentialBundle, LoginRequest};
use crate::error::Result;

/// Authentication operations for the job board API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange admin username and password for a credential bundle
    async fn login(&self, request: &LoginRequest) -> Result<CredentialBundle>;
}
