//! Command execution context
//!
//! Loads config, resolves the API URL, restores the admin session and
//! builds the cached API client in one place.

use std::io::IsTerminal;
use std::sync::Arc;

use crate::cache::CachedJobBoardClient;
use crate::cli::args::GlobalOptions;
use crate::cli::guard::{AdminGuard, GuardDecision};
use crate::cli::{OutputFormat, auth};
use crate::client::JobBoardClient;
use crate::config::Config;
use crate::error::{AuthError, Result};
use crate::session::{FileStore, Session};

/// Cached client type used by every command
pub type Client = Arc<CachedJobBoardClient<JobBoardClient>>;

/// Context for command execution containing config, session, client, and
/// runtime options.
pub struct CommandContext {
    pub config: Config,
    pub api_url: String,
    /// Shared with the client, which evicts the credential on 401
    pub session: Arc<Session>,
    pub client: Client,
    pub format: OutputFormat,
    /// Whether prompts can be shown
    pub interactive: bool,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config file is unreadable, no API URL is
    /// configured, or the credential store is corrupt.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref())?;
        let api_url = config.resolve_api_url(opts.api_url_ref())?;
        let format = opts.resolve_format(&config);

        let store = FileStore::new(Config::storage_path(opts.config_ref())?);
        let session = Arc::new(Session::load(store)?);

        let raw_client = JobBoardClient::new(api_url.clone(), session.clone())?;
        let cache_scope = raw_client.base_url().to_string();

        // Wrap with caching layer (disabled if --no-cache)
        let client = Arc::new(CachedJobBoardClient::new(
            raw_client,
            cache_scope,
            !opts.no_cache,
        ));

        Ok(Self {
            config,
            api_url,
            session,
            client,
            format,
            interactive: std::io::stdin().is_terminal(),
        })
    }

    /// Make sure an admin credential is stored before an admin command runs.
    ///
    /// Without one, an interactive terminal goes through the login flow and
    /// continues; otherwise the command fails before any request is made.
    pub async fn require_admin(&self) -> Result<()> {
        match AdminGuard::check(&self.session).await {
            GuardDecision::Allow => Ok(()),
            GuardDecision::RedirectToLogin if self.interactive => {
                eprintln!("Admin login required.");
                auth::run_login(self, auth::LoginInput::default()).await
            }
            GuardDecision::RedirectToLogin => Err(AuthError::LoginRequired.into()),
        }
    }
}
