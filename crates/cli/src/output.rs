//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output: colored status lines,
//! emphasized message fragments, and colored diffs. Color is only emitted when
//! the target stream supports it.

use buildscript_lib::diff::DiffLine;
use owo_colors::{OwoColorize, Stream, Style};

pub mod symbols {
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
}

/// Bold text on stdout.
pub fn strong(text: &str) -> String {
  text.if_supports_color(Stream::Stdout, |s| s.bold()).to_string()
}

/// Bold blue text on stdout, used for the suggestion in each message.
pub fn emphasize(text: &str) -> String {
  text
    .if_supports_color(Stream::Stdout, |s| s.style(Style::new().blue().bold()))
    .to_string()
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

/// Print a diff with added lines in green and removed lines in red.
pub fn print_diff(lines: &[DiffLine]) {
  for line in lines {
    println!("{}", format_diff_line(line));
  }
}

fn format_diff_line(line: &DiffLine) -> String {
  match line {
    DiffLine::Added(text) => format!("{} {}", line.marker(), text)
      .if_supports_color(Stream::Stdout, |s| s.green())
      .to_string(),
    DiffLine::Removed(text) => format!("{} {}", line.marker(), text)
      .if_supports_color(Stream::Stdout, |s| s.red())
      .to_string(),
    DiffLine::Context(text) => format!("{} {}", line.marker(), text),
    DiffLine::Elided(count) => format!("  ... ({} unchanged lines)", count)
      .if_supports_color(Stream::Stdout, |s| s.dimmed())
      .to_string(),
  }
}
