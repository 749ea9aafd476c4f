//! Spinner shown while a request is pending

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Start a spinner with `message` on stderr.
///
/// Hidden when stderr is not a terminal, so scripted output stays clean.
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Await `work` with a spinner showing `message`, clearing it afterwards
pub async fn while_pending<F: std::future::Future>(message: &str, work: F) -> F::Output {
    let bar = spinner(message);
    let output = work.await;
    bar.finish_and_clear();
    output
}
