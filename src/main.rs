//! jobctl - command-line client for the job board API

use clap::{CommandFactory, Parser};

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod form;
mod models;
mod output;
mod session;

use cli::admin::JobAction;
use cli::auth::LoginInput;
use cli::{
    AdminApplicationsCommands, AdminCommands, AdminJobsCommands, CacheCommands, Cli, Commands,
    GlobalOptions, JobsCommands,
};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        log::debug!("Command failed: {:?}", err);
        eprintln!("Error: {}", form::submit::failure_message(&err));
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or debug output for jobctl with `--debug`
fn init_logging(debug: bool) {
    let default_filter = if debug { "jobctl=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts).await,
        Commands::Version => {
            println!("jobctl version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Login { username, password } => {
            cli::auth::login(&opts, LoginInput { username, password }).await
        }
        Commands::Logout => cli::auth::logout(&opts).await,
        Commands::Jobs(jobs_cmd) => match jobs_cmd {
            JobsCommands::List { search } => cli::jobs::list(&opts, search.as_deref()).await,
            JobsCommands::Get { id } => cli::jobs::get(&opts, &id).await,
        },
        Commands::Apply(args) => cli::apply::run(&opts, args).await,
        Commands::Admin(admin_cmd) => match admin_cmd {
            AdminCommands::Jobs(jobs_cmd) => match jobs_cmd {
                AdminJobsCommands::List => cli::admin::list_jobs(&opts).await,
                AdminJobsCommands::Create(args) => cli::admin::create_job(&opts, args).await,
                AdminJobsCommands::Hide { id, yes } => {
                    cli::admin::job_action(&opts, JobAction::Hide, &id, yes).await
                }
                AdminJobsCommands::Unhide { id, yes } => {
                    cli::admin::job_action(&opts, JobAction::Unhide, &id, yes).await
                }
                AdminJobsCommands::Delete { id, yes } => {
                    cli::admin::job_action(&opts, JobAction::Delete, &id, yes).await
                }
            },
            AdminCommands::Applications(AdminApplicationsCommands::List { job }) => {
                cli::admin::list_applications(&opts, job.as_deref()).await
            }
            AdminCommands::Stats => cli::admin::stats(&opts).await,
        },
        Commands::Cache(cache_cmd) => {
            let format = opts.format.unwrap_or_default();
            match cache_cmd {
                CacheCommands::Status => cli::cache::status(format),
                CacheCommands::Clear => cli::cache::clear(format),
                CacheCommands::Path => cli::cache::path(),
            }
        }
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "jobctl", &mut std::io::stdout());
            Ok(())
        }
    }
}
