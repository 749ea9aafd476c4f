//! Display models for CLI output
//!
//! Display models convert API response types into CLI-friendly rows and
//! summaries for table and JSON output.

pub mod display;

pub use display::{AdminJobDisplay, ApplicationDisplay, JobDisplay, StatsDisplay};
