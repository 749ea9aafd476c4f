//! Admin commands: job management, application review and dashboard stats
//!
//! Every command passes the admin guard before its first request.

use colored::Colorize;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, JobArgs, OutputFormat};
use crate::client::models::Application;
use crate::client::{ApplicationsApi, JobsApi};
use crate::error::Result;
use crate::form::{FormController, JobForm, Submission};
use crate::models::{AdminJobDisplay, ApplicationDisplay, StatsDisplay};
use crate::output::json::print_json;
use crate::output::{Formattable, notify, progress};

/// Visibility and removal actions on a single job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobAction {
    Hide,
    Unhide,
    Delete,
}

impl JobAction {
    fn verb(&self) -> &'static str {
        match self {
            JobAction::Hide => "hide",
            JobAction::Unhide => "unhide",
            JobAction::Delete => "delete",
        }
    }

    /// Confirmation question shown before the request
    pub fn prompt(&self) -> String {
        format!("Are you sure you want to {} this job ?", self.verb())
    }

    /// Notification shown after the request succeeds
    pub fn success_message(&self) -> &'static str {
        match self {
            JobAction::Hide => "Successfully hidden the job",
            JobAction::Unhide => "Successfully unhidden the job",
            JobAction::Delete => "Successfully deleted the job",
        }
    }
}

async fn admin_context(opts: &GlobalOptions) -> Result<CommandContext> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_admin().await?;
    Ok(ctx)
}

/// List every job, hidden ones included
pub async fn list_jobs(opts: &GlobalOptions) -> Result<()> {
    let ctx = admin_context(opts).await?;

    let jobs = ctx.client.list_admin_jobs().await?;
    debug!("Fetched {} admin jobs", jobs.len());

    let display: Vec<AdminJobDisplay> = jobs.iter().map(AdminJobDisplay::from).collect();
    display.print(ctx.format)
}

/// Post a new job from flags and prompts
pub async fn create_job(opts: &GlobalOptions, args: JobArgs) -> Result<()> {
    let ctx = admin_context(opts).await?;

    let form = collect_job(ctx.interactive, &args)?;
    let body = form.to_new_job();
    let controller = FormController::new();

    let outcome = controller
        .submit(&form, || {
            progress::while_pending("Creating job...", ctx.client.create_job(&body))
        })
        .await?;

    match outcome {
        Submission::Completed(()) => {
            notify::success("Successfully created the job");
            Ok(())
        }
        Submission::Rejected(errors) => Err(errors.into()),
    }
}

/// Hide, unhide or delete a job after confirmation
pub async fn job_action(
    opts: &GlobalOptions,
    action: JobAction,
    job_id: &str,
    yes: bool,
) -> Result<()> {
    let ctx = admin_context(opts).await?;

    if !yes && !confirm(&ctx, action)? {
        println!("Cancelled.");
        return Ok(());
    }

    match action {
        JobAction::Hide => ctx.client.hide_job(job_id).await?,
        JobAction::Unhide => ctx.client.unhide_job(job_id).await?,
        JobAction::Delete => ctx.client.delete_job(job_id).await?,
    }

    notify::success(action.success_message());
    Ok(())
}

/// Ask before acting. Without a terminal there is no one to ask, so the
/// action needs `--yes`.
fn confirm(ctx: &CommandContext, action: JobAction) -> Result<bool> {
    if !ctx.interactive {
        return Err(crate::error::Error::Other(format!(
            "Refusing to {} without confirmation. Pass --yes to skip the prompt.",
            action.verb()
        )));
    }

    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(action.prompt())
        .default(false)
        .interact()?)
}

/// List applications, optionally only those for `job_filter`
pub async fn list_applications(opts: &GlobalOptions, job_filter: Option<&str>) -> Result<()> {
    let ctx = admin_context(opts).await?;

    let (jobs, applications) = futures::try_join!(
        ctx.client.list_admin_jobs(),
        ctx.client.list_applications()
    )?;
    debug!(
        "Fetched {} applications across {} jobs",
        applications.len(),
        jobs.len()
    );

    let selected = filter_applications(applications, job_filter);
    let display: Vec<ApplicationDisplay> = selected
        .iter()
        .map(|application| ApplicationDisplay::new(application, &jobs))
        .collect();

    match ctx.format {
        OutputFormat::Pretty => print_application_cards(&display),
        OutputFormat::Table | OutputFormat::Json => display.print(ctx.format)?,
    }
    Ok(())
}

/// Keep applications for `job_id`; all of them when there is no filter
pub fn filter_applications(
    applications: Vec<Application>,
    job_id: Option<&str>,
) -> Vec<Application> {
    match job_id {
        Some(id) => applications
            .into_iter()
            .filter(|application| application.job_id == id)
            .collect(),
        None => applications,
    }
}

fn print_application_cards(applications: &[ApplicationDisplay]) {
    if applications.is_empty() {
        println!("No applications yet");
        println!(
            "{}",
            "Applications will appear here once people start applying.".dimmed()
        );
        return;
    }

    for application in applications {
        println!();
        println!(
            "{}  {}",
            application.name.bold(),
            application.applied.dimmed()
        );
        println!("{}", application.email);
        println!("Applied for: {}", application.applied_for.cyan());
        if application.cv_link != "--" {
            println!("CV: {}", application.cv_link);
        }
        println!();
        println!("{}", application.cover_letter);
    }
    println!();
}

/// Show dashboard counts
pub async fn stats(opts: &GlobalOptions) -> Result<()> {
    let ctx = admin_context(opts).await?;

    let (jobs, applications) = futures::try_join!(
        ctx.client.list_admin_jobs(),
        ctx.client.list_applications()
    )?;
    let stats = StatsDisplay::compute(&jobs, &applications, chrono::Utc::now());

    match ctx.format {
        OutputFormat::Json => print_json(&stats)?,
        OutputFormat::Pretty | OutputFormat::Table => println!("{}", stats.to_table()),
    }
    Ok(())
}

/// Fill in missing job fields by prompting, when a terminal is attached
fn collect_job(interactive: bool, args: &JobArgs) -> Result<JobForm> {
    let theme = ColorfulTheme::default();
    let field = |given: &Option<String>, prompt: &str| -> Result<String> {
        match given {
            Some(value) => Ok(value.clone()),
            None if interactive => Ok(Input::<String>::with_theme(&theme)
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?),
            None => Ok(String::new()),
        }
    };

    Ok(JobForm {
        title: field(&args.title, "Title")?,
        company: field(&args.company, "Company")?,
        location: field(&args.location, "Location")?,
        description: field(&args.description, "Description")?,
    })
}
