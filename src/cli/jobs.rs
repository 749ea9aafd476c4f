//! Public job listing and detail commands

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::JobsApi;
use crate::client::models::Job;
use crate::error::{ApiError, Error, Result};
use crate::models::JobDisplay;
use crate::output::Formattable;
use crate::output::formatters::format_date;
use crate::output::json::print_json;

/// List open positions, optionally filtered by `search`
pub async fn list(opts: &GlobalOptions, search: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let jobs = ctx.client.list_public_jobs().await?;
    debug!("Fetched {} public jobs", jobs.len());

    let matching = filter_jobs(jobs, search);
    let display: Vec<JobDisplay> = matching.iter().map(JobDisplay::from).collect();
    display.print(ctx.format)?;

    if ctx.format == OutputFormat::Pretty && !matching.is_empty() {
        println!(
            "\n{} Apply with: {}",
            "→".dimmed(),
            "jobctl apply <ID>".cyan()
        );
    }
    Ok(())
}

/// Show a single job posting
pub async fn get(opts: &GlobalOptions, job_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let job = fetch_job(&ctx, job_id).await?;

    match ctx.format {
        OutputFormat::Pretty => print_job_detail(&job),
        OutputFormat::Table => vec![JobDisplay::from(&job)].print(ctx.format)?,
        OutputFormat::Json => print_json(&job)?,
    }
    Ok(())
}

/// Fetch a job, reporting a missing one as [`Error::JobNotFound`]
pub async fn fetch_job(ctx: &CommandContext, job_id: &str) -> Result<Job> {
    match ctx.client.get_job(job_id).await {
        Err(Error::Api(ApiError::NotFound(_))) => Err(Error::JobNotFound(job_id.to_string())),
        other => other,
    }
}

/// Keep jobs matching `search`; all jobs when there is no query
pub fn filter_jobs(jobs: Vec<Job>, search: Option<&str>) -> Vec<Job> {
    match search {
        Some(query) => jobs.into_iter().filter(|job| job.matches(query)).collect(),
        None => jobs,
    }
}

fn print_job_detail(job: &Job) {
    println!();
    println!("{}", job.title.bold());
    println!("{} | {}", job.company.cyan(), job.location);
    println!("{} {}", "Posted".dimmed(), format_date(&job.created_at));
    println!();
    println!("{}", job.description);
    println!();
    println!(
        "{} Apply with: {}",
        "→".dimmed(),
        format!("jobctl apply {}", job.id).cyan()
    );
}
