//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Admin login
//! - [`JobsApi`] - Public and admin job operations
//! - [`ApplicationsApi`] - Job applications
//!
//! The [`JobBoardApi`](super::JobBoardApi) super-trait combines all three.

mod applications;
mod auth;
mod jobs;

pub use applications::ApplicationsApi;
pub use auth::AuthApi;
pub use jobs::JobsApi;
