//! Cached wrapper for the job board API client
//!
//! Reads go through the SQLite cache; mutations go straight to the API and
//! then invalidate the queries whose results they change.

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::{Arc, Mutex};

use super::storage::EntryMeta;
use super::{CacheStorage, QueryKey, Scope, cache_key};
use crate::client::models::{
    Application, CredentialBundle, Job, LoginRequest, NewApplication, NewJob,
};
use crate::client::{ApplicationsApi, AuthApi, JobBoardApi, JobsApi};
use crate::error::{ApiError, Error, Result};

/// Cached wrapper for any [`JobBoardApi`] implementation.
///
/// Cache can be disabled via the `enabled` flag (for `--no-cache`). Cache
/// failures are logged and never fail the command.
pub struct CachedJobBoardClient<C: JobBoardApi> {
    inner: Arc<C>,
    cache: Option<Mutex<CacheStorage>>,
    api_url: String,
}

impl<C: JobBoardApi> CachedJobBoardClient<C> {
    /// Create a new cached client wrapper.
    ///
    /// # Arguments
    /// * `inner` - The underlying API client to wrap
    /// * `api_url` - Base URL the entries are scoped to
    /// * `enabled` - Whether caching is enabled (false for --no-cache)
    pub fn new(inner: C, api_url: impl Into<String>, enabled: bool) -> Self {
        let storage = if enabled {
            CacheStorage::open()
                .inspect_err(|e| log::debug!("Query cache unavailable: {}", e))
                .ok()
        } else {
            None
        };
        Self::with_storage(inner, api_url, storage)
    }

    /// Wrap `inner` with an already opened storage (or none)
    pub fn with_storage(
        inner: C,
        api_url: impl Into<String>,
        storage: Option<CacheStorage>,
    ) -> Self {
        Self {
            inner: Arc::new(inner),
            cache: storage.map(Mutex::new),
            api_url: api_url.into(),
        }
    }

    fn key_of(&self, query: &QueryKey) -> String {
        cache_key(query.name(), &self.api_url, &query.params())
    }

    /// Try to get cached data
    fn get_cached<T: DeserializeOwned>(&self, query: &QueryKey) -> Option<T> {
        let cache = self.cache.as_ref()?;
        let guard = cache.lock().ok()?;
        let data = guard.get(&self.key_of(query)).ok().flatten()?;
        let value = serde_json::from_slice(&data).ok()?;
        log::debug!("Cache hit: {}", query);
        Some(value)
    }

    /// Store data in cache under `scope`
    fn set_cached<T: Serialize>(&self, query: &QueryKey, data: &T, scope: Scope) {
        if let Some(ref cache) = self.cache
            && let Ok(guard) = cache.lock()
            && let Ok(json) = serde_json::to_vec(data)
        {
            let meta = EntryMeta {
                query: query.name(),
                api_url: &self.api_url,
                scope,
                ttl: query.ttl(),
            };
            if let Err(e) = guard.put(&self.key_of(query), &json, meta) {
                log::debug!("Failed to cache {}: {}", query, e);
            }
        }
    }

    /// Drop every cached result of the given queries
    fn invalidate(&self, queries: &[QueryKey]) {
        if let Some(ref cache) = self.cache
            && let Ok(guard) = cache.lock()
        {
            for query in queries {
                let outcome = match query {
                    QueryKey::Job(_) => guard.delete_by_key(&self.key_of(query)).map(usize::from),
                    _ => guard.delete_by_query(query.name(), &self.api_url),
                };
                match outcome {
                    Ok(n) => log::debug!("Invalidated {} ({} entries)", query, n),
                    Err(e) => log::debug!("Failed to invalidate {}: {}", query, e),
                }
            }
        }
    }

    /// Drop everything only an admin may see
    pub fn purge_admin(&self) {
        if let Some(ref cache) = self.cache
            && let Ok(guard) = cache.lock()
        {
            match guard.delete_by_scope(Scope::Admin, &self.api_url) {
                Ok(n) => log::debug!("Purged {} admin cache entries", n),
                Err(e) => log::debug!("Failed to purge admin cache: {}", e),
            }
        }
    }

    /// Purge admin data when the API rejects the credential
    fn observe<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(Error::Api(ApiError::Unauthorized)) = &result {
            self.purge_admin();
        }
        result
    }

    async fn cached<T, F>(&self, query: QueryKey, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: std::future::Future<Output = Result<T>>,
    {
        if let Some(cached) = self.get_cached(&query) {
            return Ok(cached);
        }

        let result = self.observe(fetch.await)?;
        self.set_cached(&query, &result, query.scope());
        Ok(result)
    }

    fn after_mutation(&self, result: Result<()>, affected: &[QueryKey]) -> Result<()> {
        let result = self.observe(result);
        if result.is_ok() {
            self.invalidate(affected);
        }
        result
    }
}

#[async_trait]
impl<C: JobBoardApi + 'static> AuthApi for CachedJobBoardClient<C> {
    /// Never cached. A new login starts from an empty admin scope.
    async fn login(&self, request: &LoginRequest) -> Result<CredentialBundle> {
        let bundle = self.inner.login(request).await?;
        self.purge_admin();
        Ok(bundle)
    }
}

#[async_trait]
impl<C: JobBoardApi + 'static> JobsApi for CachedJobBoardClient<C> {
    async fn list_public_jobs(&self) -> Result<Vec<Job>> {
        self.cached(QueryKey::PublicJobs, self.inner.list_public_jobs())
            .await
    }

    async fn get_job(&self, job_id: &str) -> Result<Job> {
        let query = QueryKey::Job(job_id.to_string());
        if let Some(cached) = self.get_cached(&query) {
            return Ok(cached);
        }

        let job = self.observe(self.inner.get_job(job_id).await)?;
        // Only an admin gets a hidden job back; it goes with the admin data
        let scope = if job.hidden { Scope::Admin } else { query.scope() };
        self.set_cached(&query, &job, scope);
        Ok(job)
    }

    async fn list_admin_jobs(&self) -> Result<Vec<Job>> {
        self.cached(QueryKey::AdminJobs, self.inner.list_admin_jobs())
            .await
    }

    async fn create_job(&self, job: &NewJob) -> Result<()> {
        let result = self.inner.create_job(job).await;
        self.after_mutation(result, &[QueryKey::AdminJobs, QueryKey::PublicJobs])
    }

    async fn hide_job(&self, job_id: &str) -> Result<()> {
        let result = self.inner.hide_job(job_id).await;
        self.after_mutation(result, &visibility_changed(job_id))
    }

    async fn unhide_job(&self, job_id: &str) -> Result<()> {
        let result = self.inner.unhide_job(job_id).await;
        self.after_mutation(result, &visibility_changed(job_id))
    }

    async fn delete_job(&self, job_id: &str) -> Result<()> {
        let result = self.inner.delete_job(job_id).await;
        let mut affected = visibility_changed(job_id);
        affected.push(QueryKey::Applications);
        self.after_mutation(result, &affected)
    }
}

#[async_trait]
impl<C: JobBoardApi + 'static> ApplicationsApi for CachedJobBoardClient<C> {
    async fn list_applications(&self) -> Result<Vec<Application>> {
        self.cached(QueryKey::Applications, self.inner.list_applications())
            .await
    }

    async fn submit_application(&self, application: &NewApplication) -> Result<()> {
        let result = self.inner.submit_application(application).await;
        self.after_mutation(result, &[QueryKey::Applications])
    }
}

fn visibility_changed(job_id: &str) -> Vec<QueryKey> {
    vec![
        QueryKey::AdminJobs,
        QueryKey::PublicJobs,
        QueryKey::Job(job_id.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockJobBoardClient;
    use crate::client::fixtures::{ApplicationBuilder, JobBuilder};
    use tempfile::TempDir;

    const API: &str = "http://localhost:4000";

    fn create_test_client(
        mock: MockJobBoardClient,
        enabled: bool,
    ) -> (CachedJobBoardClient<MockJobBoardClient>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = if enabled {
            Some(CacheStorage::open_at(temp_dir.path()).unwrap())
        } else {
            None
        };
        (
            CachedJobBoardClient::with_storage(mock, API, storage),
            temp_dir,
        )
    }

    fn seeded() -> MockJobBoardClient {
        MockJobBoardClient::new()
            .with_jobs(vec![JobBuilder::new("1").build(), JobBuilder::new("2").build()])
            .with_admin_jobs(vec![JobBuilder::new("1").build()])
            .with_applications(vec![ApplicationBuilder::new("a1", "1").build()])
    }

    #[tokio::test]
    async fn test_login_never_cached() {
        let mock = MockJobBoardClient::new().with_bundle(CredentialBundle::with_token("T"));
        let (client, _dir) = create_test_client(mock, true);
        let request = LoginRequest {
            username: "admin".to_string(),
            password: "secret".to_string(),
        };

        client.login(&request).await.unwrap();
        client.login(&request).await.unwrap();

        assert_eq!(client.inner.call_counts().await.login, 2);
    }

    #[tokio::test]
    async fn test_cache_disabled_bypasses_cache() {
        let (client, _dir) = create_test_client(seeded(), false);

        client.list_public_jobs().await.unwrap();
        client.list_public_jobs().await.unwrap();

        assert_eq!(client.inner.call_counts().await.list_public_jobs, 2);
    }

    #[tokio::test]
    async fn test_public_jobs_cached() {
        let (client, _dir) = create_test_client(seeded(), true);

        let first = client.list_public_jobs().await.unwrap();
        let second = client.list_public_jobs().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(client.inner.call_counts().await.list_public_jobs, 1);
    }

    #[tokio::test]
    async fn test_job_detail_cached_per_id() {
        let (client, _dir) = create_test_client(seeded(), true);

        client.get_job("1").await.unwrap();
        client.get_job("2").await.unwrap();
        client.get_job("1").await.unwrap();

        assert_eq!(client.inner.call_counts().await.get_job, 2);
    }

    #[tokio::test]
    async fn test_errors_not_cached() {
        let mock = seeded().with_error(ApiError::ServerError("down".to_string()));
        let (client, _dir) = create_test_client(mock, true);

        assert!(client.list_public_jobs().await.is_err());
        assert_eq!(client.list_public_jobs().await.unwrap().len(), 2);
        assert_eq!(client.inner.call_counts().await.list_public_jobs, 2);
    }

    #[tokio::test]
    async fn test_create_invalidates_job_lists() {
        let (client, _dir) = create_test_client(seeded(), true);

        client.list_public_jobs().await.unwrap();
        client.list_admin_jobs().await.unwrap();
        client.list_applications().await.unwrap();

        let job = NewJob {
            title: "Rust Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: "d".repeat(60),
        };
        client.create_job(&job).await.unwrap();

        client.list_public_jobs().await.unwrap();
        client.list_admin_jobs().await.unwrap();
        client.list_applications().await.unwrap();

        let counts = client.inner.call_counts().await;
        assert_eq!(counts.list_public_jobs, 2);
        assert_eq!(counts.list_admin_jobs, 2);
        // Applications are unaffected by a new job
        assert_eq!(counts.list_applications, 1);
    }

    #[tokio::test]
    async fn test_hide_invalidates_detail_of_that_job_only() {
        let (client, _dir) = create_test_client(seeded(), true);

        client.get_job("1").await.unwrap();
        client.get_job("2").await.unwrap();
        client.hide_job("1").await.unwrap();
        client.get_job("1").await.unwrap();
        client.get_job("2").await.unwrap();

        assert_eq!(client.inner.call_counts().await.get_job, 3);
    }

    #[tokio::test]
    async fn test_delete_invalidates_applications() {
        let (client, _dir) = create_test_client(seeded(), true);

        client.list_applications().await.unwrap();
        client.delete_job("1").await.unwrap();
        client.list_applications().await.unwrap();

        assert_eq!(client.inner.call_counts().await.list_applications, 2);
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_cache() {
        let (client, dir) = create_test_client(seeded(), true);

        client.list_admin_jobs().await.unwrap();

        // A later invocation against the same cache directory
        let failing = seeded().with_error(ApiError::BadRequest("nope".to_string()));
        let storage = CacheStorage::open_at(dir.path()).ok();
        let client = CachedJobBoardClient::with_storage(failing, API, storage);

        assert!(client.unhide_job("1").await.is_err());
        client.list_admin_jobs().await.unwrap();

        assert_eq!(client.inner.call_counts().await.list_admin_jobs, 0);
    }

    #[tokio::test]
    async fn test_submit_application_invalidates_applications() {
        let (client, _dir) = create_test_client(seeded(), true);

        client.list_applications().await.unwrap();
        let form = crate::form::ApplicationForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            cv_link: String::new(),
            cover_letter: "c".repeat(60),
        };
        client
            .submit_application(&form.to_new_application("1"))
            .await
            .unwrap();
        client.list_applications().await.unwrap();

        assert_eq!(client.inner.call_counts().await.list_applications, 2);
    }

    #[tokio::test]
    async fn test_unauthorized_purges_admin_scope() {
        let (client, dir) = create_test_client(seeded(), true);

        client.list_public_jobs().await.unwrap();
        client.list_admin_jobs().await.unwrap();

        let rejected = seeded().with_error(ApiError::Unauthorized);
        let storage = CacheStorage::open_at(dir.path()).ok();
        let client = CachedJobBoardClient::with_storage(rejected, API, storage);

        // Admin listing is cached, so force a call that reaches the API
        assert!(client.list_applications().await.is_err());

        client.list_admin_jobs().await.unwrap();
        client.list_public_jobs().await.unwrap();

        let counts = client.inner.call_counts().await;
        assert_eq!(counts.list_admin_jobs, 1);
        assert_eq!(counts.list_public_jobs, 0);
    }

    #[tokio::test]
    async fn test_hidden_job_detail_dropped_with_admin_scope() {
        let mock = MockJobBoardClient::new().with_jobs(vec![
            JobBuilder::new("1").build(),
            JobBuilder::new("h").hidden(true).build(),
        ]);
        let (client, _dir) = create_test_client(mock, true);

        client.get_job("1").await.unwrap();
        client.get_job("h").await.unwrap();
        client.purge_admin();

        client.get_job("1").await.unwrap();
        assert!(client.get_job("h").await.unwrap().hidden);

        assert_eq!(client.inner.call_counts().await.get_job, 3);
    }
}
