//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::config::{Config, normalize_api_url};
use crate::error::Result;

/// Run the init command.
///
/// `--api-url` skips the prompt; otherwise the current value (if any) is
/// offered as the default.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to jobctl!".bold().green());
    println!("Let's point jobctl at your job board API.\n");

    let mut config = Config::load_or_default(opts.config_ref())?;

    let entered = match opts.api_url_ref() {
        Some(url) => url.to_string(),
        None => {
            let theme = ColorfulTheme::default();
            let mut prompt = Input::<String>::with_theme(&theme)
                .with_prompt("Job board API URL")
                .validate_with(|input: &String| normalize_api_url(input).map(|_| ()));
            if let Some(current) = config.api_url.clone() {
                prompt = prompt.default(current);
            }
            prompt.interact_text()?
        }
    };

    config.api_url = Some(normalize_api_url(&entered)?);
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Browse open positions", "jobctl jobs list".cyan());
    println!("  {} - Sign in as an administrator", "jobctl login".cyan());

    Ok(())
}
