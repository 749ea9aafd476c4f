//! Job board API client

pub mod api;
#[cfg(test)]
pub mod fixtures;
pub mod jobboard;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{ApplicationsApi, AuthApi, JobsApi};
pub use jobboard::JobBoardClient;
#[cfg(test)]
pub use mock::MockJobBoardClient;

/// Full job board API surface.
///
/// Implemented automatically for any type implementing all sub-traits, so the
/// real client, the caching wrapper and the test mock are interchangeable.
pub trait JobBoardApi: AuthApi + JobsApi + ApplicationsApi {}

impl<T: AuthApi + JobsApi + ApplicationsApi> JobBoardApi for T {}
