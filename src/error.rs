//! Error types for the jobctl CLI

use std::time::Duration;
use thiserror::Error;

use crate::form::FieldErrors;

/// Result type alias for jobctl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Generic message shown for client errors the user can only retry.
pub const GENERIC_FAILURE: &str = "Something went wrong, try again";

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("{0}")]
    Validation(FieldErrors),

    #[error("A submission is already in progress")]
    SubmissionPending,

    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl From<FieldErrors> for Error {
    fn from(errors: FieldErrors) -> Self {
        Error::Validation(errors)
    }
}

/// How a failure should be presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The stored credential was rejected and has been cleared
    Unauthorized,
    /// Other 4xx responses
    Client,
    /// 5xx responses, timeouts and connection failures
    Server,
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Session expired or invalid. Run `jobctl login` to sign in again.")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Classify the error into the user-facing failure categories.
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Unauthorized => FailureKind::Unauthorized,
            ApiError::Forbidden
            | ApiError::NotFound(_)
            | ApiError::RateLimit(_)
            | ApiError::BadRequest(_) => FailureKind::Client,
            ApiError::ServerError(_) | ApiError::Network(_) | ApiError::InvalidResponse(_) => {
                FailureKind::Server
            }
        }
    }

    /// Short message suitable for a notification line.
    pub fn user_message(&self) -> String {
        match self.kind() {
            FailureKind::Unauthorized => self.to_string(),
            FailureKind::Client => GENERIC_FAILURE.to_string(),
            FailureKind::Server => {
                "The job board is unavailable right now. Please try again later.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `jobctl init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error(
        "API URL not configured. Run `jobctl init`, pass --api-url, or set JOBCTL_API_URL."
    )]
    MissingApiUrl,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Session and admin-access errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Admin login required. Run `jobctl login` first.")]
    LoginRequired,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Failed to access credential store: {0}")]
    Store(String),
}

/// Query cache errors. Never fatal to a command.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Could not determine cache directory")]
    NoHome,

    #[error("Cache I/O error: {0}")]
    Io(String),

    #[error("Cache database error: {0}")]
    Database(#[from] rusqlite::Error),
}
