//! Job board API client implementation
//!
//! Every request goes through [`JobBoardClient::send`], which attaches the
//! session's bearer token and evicts the stored credential when the API
//! answers 401.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::{ApplicationsApi, AuthApi, JobsApi};
use super::models::{Application, CredentialBundle, Job, LoginRequest, NewApplication, NewJob};
use crate::error::{ApiError, Result};
use crate::session::Session;

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Job board REST API client
pub struct JobBoardClient {
    http: HttpClient,
    base_url: String,
    session: Arc<Session>,
}

impl JobBoardClient {
    /// Create a client for `base_url` sharing `session` with the caller
    pub fn new(base_url: impl Into<String>, session: Arc<Session>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("jobctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and return the successful response.
    ///
    /// Non-2xx statuses become [`ApiError`]s. A 401 clears the stored
    /// credential before the error is returned.
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url);

        if let Some(token) = self.session.bearer_token().await {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        log::debug!("{} {}", method, url);
        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        log::debug!("{} {} -> {}", method, path, status);

        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::UNAUTHORIZED => {
                if let Err(e) = self.session.evict().await {
                    log::warn!("Failed to clear stored credential: {}", e);
                }
                Err(ApiError::Unauthorized.into())
            }
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let detail = error_detail(response, "Resource not found").await;
                Err(ApiError::NotFound(detail).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            status if status.is_client_error() => {
                let detail = error_detail(response, "Bad request").await;
                Err(ApiError::BadRequest(detail).into())
            }
            status if status.is_server_error() => {
                let fallback = format!("Server error: {}", status);
                let detail = error_detail(response, &fallback).await;
                Err(ApiError::ServerError(detail).into())
            }
            _ => Err(ApiError::InvalidResponse(format!("Unexpected status code: {}", status)).into()),
        }
    }

    /// Send a request and decode the JSON response body
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let response = self.send(method, path, body).await?;
        let data = response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;
        Ok(data)
    }

    /// Send a request whose response body is not needed
    async fn execute(&self, method: Method, path: &str, body: Option<Value>) -> Result<()> {
        self.send(method, path, body).await?;
        Ok(())
    }
}

/// Pull a readable message out of an error response.
///
/// Understands `{"message": "..."}` and `{"message": ["...", "..."]}` bodies;
/// anything else is returned as text.
async fn error_detail(response: Response, fallback: &str) -> String {
    let text = match response.text().await {
        Ok(text) if !text.trim().is_empty() => text,
        _ => return fallback.to_string(),
    };

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => match map.get("message") {
            Some(Value::String(message)) => message.clone(),
            Some(Value::Array(messages)) => messages
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("; "),
            _ => text,
        },
        _ => text,
    }
}

fn job_path(job_id: &str) -> String {
    format!("/jobs/{}", job_id)
}

#[async_trait]
impl AuthApi for JobBoardClient {
    async fn login(&self, request: &LoginRequest) -> Result<CredentialBundle> {
        let body = serde_json::to_value(request)?;
        self.request(Method::POST, "/auth/login", Some(body)).await
    }
}

#[async_trait]
impl JobsApi for JobBoardClient {
    async fn list_public_jobs(&self) -> Result<Vec<Job>> {
        self.request(Method::GET, "/jobs/public", None).await
    }

    async fn get_job(&self, job_id: &str) -> Result<Job> {
        self.request(Method::GET, &job_path(job_id), None).await
    }

    async fn list_admin_jobs(&self) -> Result<Vec<Job>> {
        self.request(Method::GET, "/jobs/admin", None).await
    }

    async fn create_job(&self, job: &NewJob) -> Result<()> {
        let body = serde_json::to_value(job)?;
        self.execute(Method::POST, "/jobs", Some(body)).await
    }

    async fn hide_job(&self, job_id: &str) -> Result<()> {
        let path = format!("{}/hide", job_path(job_id));
        self.execute(Method::PATCH, &path, None).await
    }

    async fn unhide_job(&self, job_id: &str) -> Result<()> {
        let path = format!("{}/unhide", job_path(job_id));
        self.execute(Method::PATCH, &path, None).await
    }

    async fn delete_job(&self, job_id: &str) -> Result<()> {
        self.execute(Method::DELETE, &job_path(job_id), None).await
    }
}

#[async_trait]
impl ApplicationsApi for JobBoardClient {
    async fn list_applications(&self) -> Result<Vec<Application>> {
        self.request(Method::GET, "/applications", None).await
    }

    async fn submit_application(&self, application: &NewApplication) -> Result<()> {
        let body = serde_json::to_value(application)?;
        self.execute(Method::POST, "/applications", Some(body)).await
    }
}
