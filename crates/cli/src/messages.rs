//! Message templates shown to the user.
//!
//! Each plan outcome has one explanation template, selected through
//! [`Outcome::message_key`]. The change date, documentation link, and glyph
//! usage come from an injected [`MessageConfig`].

use std::path::Path;

use buildscript_lib::consts::OPT_IN_KEY;
use buildscript_lib::plan::{Outcome, Plan};

use crate::output::{emphasize, strong};

pub const DEFAULT_CHANGE_DATE: &str = "Monday, March 11";
pub const DEFAULT_DOCUMENTATION_LINK: &str = "https://help.heroku.com/P5IMU3MP/heroku-node-js-build-script-change-faq";

/// Presentation settings for rendered messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageConfig {
  /// Human-readable date the platform starts running `build`.
  pub change_date: String,
  pub documentation_link: String,
  /// Prefix headline messages with emoji.
  pub decorative_glyphs: bool,
}

impl Default for MessageConfig {
  fn default() -> Self {
    Self {
      change_date: DEFAULT_CHANGE_DATE.to_string(),
      documentation_link: DEFAULT_DOCUMENTATION_LINK.to_string(),
      decorative_glyphs: cfg!(target_os = "macos"),
    }
  }
}

/// Renders message templates with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Messages {
  config: MessageConfig,
}

impl Messages {
  pub fn new(config: MessageConfig) -> Self {
    Self { config }
  }

  /// Explanation for a plan's outcome.
  pub fn explain(&self, plan: &Plan) -> String {
    let date = &self.config.change_date;
    let build = quoted(plan.original_build());
    let postinstall = quoted(plan.original_postinstall());

    match plan.outcome() {
      Outcome::AlreadyOptedIn | Outcome::NothingToDo => self.nothing_to_do(),
      Outcome::SuggestOptIn => format!(
        r#"
This app does not rely on a "build" script running during deploys, so it
{} be affected when Heroku starts running "build" automatically on {date}.

{}
"{OPT_IN_KEY}" in package.json, so future deploys use the new behavior right away."#,
        strong("will not"),
        emphasize("We suggest opting in to the change early by setting"),
      ),
      Outcome::RemovePostinstall => format!(
        r#"
This app has a "postinstall" script:

  "postinstall": {postinstall}

It only runs the "build" script. Heroku will start running "build" automatically
on {date}.

{}
{}

Without this change, "build" will run twice on every deploy after {date}."#,
        emphasize(r#"We suggest removing the "postinstall" script and opting in to the change early"#),
        emphasize(&format!(r#"by setting "{OPT_IN_KEY}" in package.json."#)),
      ),
      Outcome::MovePostinstallToBuild => format!(
        r#"
This app has both a "postinstall" and a "build" script:

  "postinstall": {postinstall}
  "build": {build}

{}
so Heroku runs it once, as the "build" step, after {date}.

Without this change, both "postinstall" and "build" will run on every deploy
after {date}."#,
        emphasize(r#"We suggest moving the "postinstall" command into the "build" script"#),
      ),
      Outcome::AddEmptyHerokuPostbuild => format!(
        r#"
This app has a "build" script:

  "build": {build}

Heroku does not run this script today, but
{}

{}
When a "heroku-postbuild" script is present, Heroku runs it instead of "build",
so deploys after {date} keep behaving the way they do now."#,
        emphasize(&format!(r#"Heroku will start running the "build" script automatically on {date}."#)),
        emphasize(r#"We suggest adding a "heroku-postbuild" script that skips the build."#),
      ),
    }
  }

  /// Heading printed above the diff.
  pub fn proposed_change(&self) -> String {
    "\nWe suggest the following changes:\n".to_string()
  }

  pub fn nothing_to_do(&self) -> String {
    format!(
      "\n{}This app {} be affected by the upcoming change! You don't need to do anything.\n\n{}",
      self.glyph("✅  "),
      strong("will not"),
      self.learn_more(),
    )
  }

  pub fn denied_changes(&self) -> String {
    format!(
      "\n{}{}\n\n{}",
      self.glyph("⚠️  "),
      strong("No changes written to disk."),
      self.learn_more(),
    )
  }

  pub fn applied_changes(&self, path: &Path) -> String {
    format!(
      "\n{}Updated {}\n\n{}",
      self.glyph("✅  "),
      strong(&path.display().to_string()),
      self.learn_more(),
    )
  }

  fn learn_more(&self) -> String {
    format!(
      "{}To learn more about the upcoming change, read more at: {}",
      self.glyph("📖  "),
      self.config.documentation_link
    )
  }

  fn glyph(&self, glyph: &'static str) -> &'static str {
    if self.config.decorative_glyphs { glyph } else { "" }
  }
}

fn quoted(command: Option<&str>) -> String {
  match command {
    Some(command) => format!("\"{}\"", command),
    None => "(not a string)".to_string(),
  }
}
