//! Job board API data models
//!
//! Wire types exchanged with the job board REST API. Field names follow the
//! API's camelCase JSON; the credential bundle keeps the API's snake_case.

mod application;
mod auth;
mod job;

pub use application::{Application, NewApplication};
pub use auth::{CredentialBundle, LoginRequest};
pub use job::{Job, NewJob};
