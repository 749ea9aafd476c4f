//! Admin login and logout

use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cache::{CacheStorage, Scope};
use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::AuthApi;
use crate::config::Config;
use crate::error::{ApiError, AuthError, Error, Result};
use crate::form::{FormController, LoginForm, Submission};
use crate::output::{notify, progress};
use crate::session::{FileStore, Session};

/// Login values given on the command line
#[derive(Debug, Default)]
pub struct LoginInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Run the login command
pub async fn login(opts: &GlobalOptions, input: LoginInput) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    run_login(&ctx, input).await
}

/// Validate the login form, sign in and persist the returned credential.
///
/// Also used by the admin guard when a command needs a login first.
pub async fn run_login(ctx: &CommandContext, input: LoginInput) -> Result<()> {
    let form = collect(ctx.interactive, input)?;
    let request = form.to_request();
    let controller = FormController::new();

    let outcome = controller
        .submit(&form, || {
            progress::while_pending("Signing in...", ctx.client.login(&request))
        })
        .await;

    match outcome {
        Ok(Submission::Completed(bundle)) => {
            ctx.session.establish(&bundle).await?;
            notify::success("Logged in Successfully");
            Ok(())
        }
        Ok(Submission::Rejected(errors)) => Err(errors.into()),
        Err(Error::Api(ApiError::Unauthorized)) => Err(AuthError::InvalidCredentials.into()),
        Err(err) => Err(err),
    }
}

/// Fill in missing fields by prompting, when a terminal is attached
fn collect(interactive: bool, input: LoginInput) -> Result<LoginForm> {
    let theme = ColorfulTheme::default();

    let username = match input.username {
        Some(username) => username,
        None if interactive => Input::<String>::with_theme(&theme)
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()?,
        None => String::new(),
    };

    let password = match input.password {
        Some(password) => password,
        None if interactive => Password::with_theme(&theme)
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?,
        None => String::new(),
    };

    Ok(LoginForm { username, password })
}

/// Run the logout command
pub async fn logout(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_or_default(opts.config_ref())?;
    let session = Session::load(FileStore::new(Config::storage_path(opts.config_ref())?))?;

    let was_present = session.is_present().await;
    session.logout().await?;

    // Drop admin results cached for this server
    if let Ok(api_url) = config.resolve_api_url(opts.api_url_ref()) {
        match CacheStorage::open().and_then(|c| c.delete_by_scope(Scope::Admin, &api_url)) {
            Ok(n) => log::debug!("Purged {} admin cache entries", n),
            Err(e) => log::debug!("Failed to purge admin cache: {}", e),
        }
    }

    if was_present {
        notify::success("Logged out");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}
