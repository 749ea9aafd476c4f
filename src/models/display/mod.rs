//! Display model implementations for table and JSON output

mod application;
mod job;
mod stats;

pub use application::ApplicationDisplay;
pub use job::{AdminJobDisplay, JobDisplay};
pub use stats::StatsDisplay;
