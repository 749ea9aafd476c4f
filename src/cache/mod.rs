//! Local query cache for API responses
//!
//! Results are stored in SQLite under a query key (`jobs`, `job/<id>`,
//! `admin-jobs`, `applications`) scoped to the API base URL. Mutations
//! invalidate the queries they affect.

pub mod client;
pub mod key;
pub mod storage;

use std::time::Duration;

/// Cache TTL configuration per query
pub struct CacheTtl;

impl CacheTtl {
    // Public listing and detail pages
    pub const PUBLIC_JOBS: Duration = Duration::from_secs(60);
    pub const JOB_DETAIL: Duration = Duration::from_secs(60);

    // Admin data changes under the admin's own hand, keep it short
    pub const ADMIN_JOBS: Duration = Duration::from_secs(30);
    pub const APPLICATIONS: Duration = Duration::from_secs(30);
}

/// Who may see a cached result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Public,
    Admin,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Public => "public",
            Scope::Admin => "admin",
        }
    }
}

/// Identifier of a cached query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKey {
    PublicJobs,
    Job(String),
    AdminJobs,
    Applications,
}

impl QueryKey {
    /// Query name, shared by every entry of the same kind
    pub fn name(&self) -> &'static str {
        match self {
            QueryKey::PublicJobs => "jobs",
            QueryKey::Job(_) => "job",
            QueryKey::AdminJobs => "admin-jobs",
            QueryKey::Applications => "applications",
        }
    }

    pub fn scope(&self) -> Scope {
        match self {
            QueryKey::PublicJobs | QueryKey::Job(_) => Scope::Public,
            QueryKey::AdminJobs | QueryKey::Applications => Scope::Admin,
        }
    }

    pub fn ttl(&self) -> Duration {
        match self {
            QueryKey::PublicJobs => CacheTtl::PUBLIC_JOBS,
            QueryKey::Job(_) => CacheTtl::JOB_DETAIL,
            QueryKey::AdminJobs => CacheTtl::ADMIN_JOBS,
            QueryKey::Applications => CacheTtl::APPLICATIONS,
        }
    }

    /// Parameters distinguishing entries with the same name
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        match self {
            QueryKey::Job(id) => vec![("id", id.as_str())],
            _ => vec![],
        }
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryKey::Job(id) => write!(f, "job/{}", id),
            other => write!(f, "{}", other.name()),
        }
    }
}

pub use client::CachedJobBoardClient;
pub use key::cache_key;
pub use storage::CacheStorage;
