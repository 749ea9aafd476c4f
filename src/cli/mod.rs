//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod admin;
pub mod apply;
pub mod args;
pub mod auth;
pub mod cache;
pub mod context;
pub mod guard;
pub mod init;
pub mod jobs;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// jobctl - command-line client for the job board
#[derive(Parser, Debug)]
#[command(name = "jobctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "JOBCTL_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "JOBCTL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Job board API base URL
    #[arg(long, global = true, env = "JOBCTL_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "JOBCTL_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Bypass cache, fetch fresh data from API
    #[arg(long, global = true, env = "JOBCTL_NO_CACHE", hide_env = true)]
    pub no_cache: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save the job board API URL
    Init,

    /// Show configuration and session status
    Status,

    /// Display version information
    Version,

    /// Sign in as an administrator
    Login {
        /// Admin username (prompted when omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Admin password (prompted when omitted)
        #[arg(long, env = "JOBCTL_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored admin credential
    Logout,

    /// Browse public job postings
    #[command(subcommand)]
    Jobs(JobsCommands),

    /// Apply to a job
    Apply(ApplyArgs),

    /// Administer jobs and review applications
    #[command(subcommand)]
    Admin(AdminCommands),

    /// Manage local query cache
    #[command(subcommand)]
    Cache(CacheCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   jobctl completion bash > /etc/bash_completion.d/jobctl
  zsh:    jobctl completion zsh > \"${fpath[1]}/_jobctl\"
  fish:   jobctl completion fish > ~/.config/fish/completions/jobctl.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Public job subcommands
#[derive(Subcommand, Debug)]
pub enum JobsCommands {
    /// List open positions
    List {
        /// Filter by title, company or location (case-insensitive)
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Show a job posting
    Get {
        /// Job ID
        id: String,
    },
}

/// Application form fields; any that are missing are prompted for
#[derive(clap::Args, Debug, Default)]
pub struct ApplyArgs {
    /// Job ID to apply to
    pub job_id: String,

    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Link to a CV (optional)
    #[arg(long)]
    pub cv_link: Option<String>,

    /// Cover letter, at least 50 characters
    #[arg(long)]
    pub cover_letter: Option<String>,
}

/// Admin subcommands
#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Manage job postings
    #[command(subcommand)]
    Jobs(AdminJobsCommands),

    /// Review applications
    #[command(subcommand)]
    Applications(AdminApplicationsCommands),

    /// Show dashboard counts
    Stats,
}

/// Admin job subcommands
#[derive(Subcommand, Debug)]
pub enum AdminJobsCommands {
    /// List all jobs, including hidden ones
    List,

    /// Post a new job
    Create(JobArgs),

    /// Hide a job from the public listing
    Hide {
        /// Job ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show a hidden job again
    Unhide {
        /// Job ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Delete a job and its applications
    Delete {
        /// Job ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Job form fields; any that are missing are prompted for
#[derive(clap::Args, Debug, Default)]
pub struct JobArgs {
    /// Job title
    #[arg(long)]
    pub title: Option<String>,

    /// Company name
    #[arg(long)]
    pub company: Option<String>,

    /// Location
    #[arg(long)]
    pub location: Option<String>,

    /// Description, at least 50 characters
    #[arg(long)]
    pub description: Option<String>,
}

/// Admin application subcommands
#[derive(Subcommand, Debug)]
pub enum AdminApplicationsCommands {
    /// List received applications
    List {
        /// Only show applications for this job ID
        #[arg(long)]
        job: Option<String>,
    },
}

/// Cache management subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache statistics
    Status,

    /// Clear all cached data
    Clear,

    /// Show cache directory path
    Path,
}
