mod cmd;
mod messages;
mod output;
mod prompts;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use buildscript_lib::plan::UnaffectedPolicy;

use crate::cmd::{MigrateOptions, cmd_migrate};
use crate::messages::{DEFAULT_CHANGE_DATE, DEFAULT_DOCUMENTATION_LINK, MessageConfig, Messages};
use crate::output::print_error;
use crate::prompts::Decision;

/// Prepare a Node.js app's package.json for Heroku running the "build" script automatically
#[derive(Parser)]
#[command(name = "update-node-build-script")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Directory containing package.json
  #[arg(default_value = ".")]
  directory: PathBuf,

  /// Write the suggested changes without prompting
  #[arg(short, long, conflicts_with = "no")]
  yes: bool,

  /// Show the suggested changes without writing them
  #[arg(short, long)]
  no: bool,

  /// Enable verbose output
  #[arg(long)]
  verbose: bool,

  /// Leave apps the change does not affect untouched instead of opting them in
  #[arg(long)]
  leave_unaffected: bool,

  /// When to decorate messages with emoji
  #[arg(long, value_enum, default_value_t = Glyphs::Auto)]
  glyphs: Glyphs,

  /// Date Heroku starts running the "build" script, as shown in messages
  #[arg(long, env = "UPDATE_BUILD_SCRIPT_CHANGE_DATE", default_value = DEFAULT_CHANGE_DATE)]
  change_date: String,

  /// Documentation link shown in messages
  #[arg(long, env = "UPDATE_BUILD_SCRIPT_DOCS_URL", default_value = DEFAULT_DOCUMENTATION_LINK)]
  docs_url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum Glyphs {
  /// Only where they render reliably (macOS)
  #[default]
  Auto,
  Always,
  Never,
}

impl Glyphs {
  fn enabled(self) -> bool {
    match self {
      Glyphs::Auto => cfg!(target_os = "macos"),
      Glyphs::Always => true,
      Glyphs::Never => false,
    }
  }
}

impl Cli {
  /// Parse arguments, exposing the version flag as `-v`/`--version`.
  fn parse_with_short_version() -> Self {
    let command = Cli::command().disable_version_flag(true).arg(
      Arg::new("version")
        .short('v')
        .long("version")
        .action(ArgAction::Version)
        .help("Print version"),
    );
    let matches = command.get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
  }

  fn decision(&self) -> Decision {
    if self.yes {
      Decision::Accept
    } else if self.no {
      Decision::Decline
    } else {
      Decision::Prompt
    }
  }

  fn policy(&self) -> UnaffectedPolicy {
    if self.leave_unaffected {
      UnaffectedPolicy::LeaveUntouched
    } else {
      UnaffectedPolicy::OptIn
    }
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse_with_short_version();

  let default_filter = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let directory = dunce::canonicalize(&cli.directory).unwrap_or_else(|_| cli.directory.clone());

  let options = MigrateOptions {
    directory,
    decision: cli.decision(),
    policy: cli.policy(),
    messages: Messages::new(MessageConfig {
      change_date: cli.change_date.clone(),
      documentation_link: cli.docs_url.clone(),
      decorative_glyphs: cli.glyphs.enabled(),
    }),
  };

  match cmd_migrate(&options) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}
