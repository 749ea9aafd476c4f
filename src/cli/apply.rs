//! Job application command

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::cli::jobs::fetch_job;
use crate::cli::{ApplyArgs, CommandContext, OutputFormat};
use crate::client::ApplicationsApi;
use crate::error::Result;
use crate::form::{ApplicationForm, FormController, SubmitState, Submission};
use crate::output::{notify, progress};

/// Apply to the job named on the command line.
///
/// The job is fetched first so a missing job is reported before any
/// prompting. The submitted body carries the id given on the command line,
/// even when the server reports the job under a different id.
pub async fn run(opts: &GlobalOptions, args: ApplyArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let job = fetch_job(&ctx, &args.job_id).await?;

    if ctx.format == OutputFormat::Pretty {
        println!(
            "Applying for {} at {}\n",
            job.title.bold(),
            job.company.cyan()
        );
    }

    let form = collect(ctx.interactive, &args)?;
    let body = form.to_new_application(&args.job_id);
    let controller = FormController::new();

    let outcome = controller
        .submit(&form, || {
            progress::while_pending(
                "Submitting application...",
                ctx.client.submit_application(&body),
            )
        })
        .await
        .inspect_err(|_| {
            if let SubmitState::Failed(message) = controller.state() {
                log::debug!("Application for {} not sent: {}", args.job_id, message);
            }
        })?;

    match outcome {
        Submission::Completed(()) => {
            notify::success("Successfully applied to the job");
            Ok(())
        }
        Submission::Rejected(errors) => Err(errors.into()),
    }
}

/// Fill in missing fields by prompting, when a terminal is attached
fn collect(interactive: bool, args: &ApplyArgs) -> Result<ApplicationForm> {
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

    Ok(ApplicationForm {
        name: field(&args.name, "Full name")?,
        email: field(&args.email, "Email address")?,
        cv_link: field(&args.cv_link, "CV link (optional)")?,
        cover_letter: field(&args.cover_letter, "Cover letter")?,
    })
}
