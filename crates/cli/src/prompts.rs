use anyhow::{Result, bail};
use std::io::{self, IsTerminal, Write};

/// How to answer the confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
  /// Ask on the terminal.
  Prompt,
  /// `--yes`
  Accept,
  /// `--no`
  Decline,
}

pub fn confirm(message: &str, decision: Decision) -> Result<bool> {
  match decision {
    Decision::Accept => return Ok(true),
    Decision::Decline => return Ok(false),
    Decision::Prompt => {}
  }

  if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
    bail!("Cannot prompt for confirmation in non-interactive mode. Use --yes to write the changes or --no to skip them.");
  }

  write!(io::stderr(), "{} [y/N] ", message)?;
  io::stderr().flush()?;

  let mut input = String::new();
  io::stdin().read_line(&mut input)?;

  Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
  matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
