//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::session::{FileStore, Session, SessionState};

/// Run the status command to display configuration and session status
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "jobctl Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            config
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            Config::default()
        }
    };

    println!();

    match config.resolve_api_url(opts.api_url_ref()) {
        Ok(url) => println!("{} API URL: {}", "✓".green(), url.cyan()),
        Err(_) => {
            println!("{} API URL not configured", "✗".red());
            println!("  → Run 'jobctl init' or pass --api-url");
        }
    }

    let store = FileStore::new(Config::storage_path(opts.config_ref())?);
    println!("Credential store: {}", store.path().display().to_string().cyan());
    let session = Session::load(store)?;
    match session.state().await {
        SessionState::Set(credential) if credential.access_token().is_some() => {
            println!("{} Admin credential stored", "✓".green());
        }
        SessionState::Set(_) => {
            println!(
                "{} Admin credential stored but unreadable (requests go out unauthenticated)",
                "⚠".yellow()
            );
        }
        SessionState::Unset | SessionState::Cleared => {
            println!("{} Not logged in", "○".dimmed());
            println!("  → Run 'jobctl login' to sign in as an administrator");
        }
    }

    println!();
    Ok(())
}
