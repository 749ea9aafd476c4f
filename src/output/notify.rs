//! One-line notifications for command outcomes

use colored::Colorize;

/// Print a success line to stdout
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message.green());
}
