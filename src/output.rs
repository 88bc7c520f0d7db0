//! User-facing status lines.
//!
//! Informational lines go to stdout, everything else to stderr, so the launcher's
//! own diagnostics never mix into the wrapped binary's stdout.

use colored::Colorize;

pub fn info(msg: &str) {
    println!("{} {}", "info:".green().bold(), msg);
}

pub fn warn(msg: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "error:".red().bold(), msg);
}
