//! Authentication models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Credential bundle returned by a successful login.
///
/// Only `access_token` is interpreted; every other field is kept so the
/// bundle is persisted exactly as the API returned it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CredentialBundle {
    /// Bundle holding only an access token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            extra: Map::new(),
        }
    }
}
