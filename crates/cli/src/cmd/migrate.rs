//! Implementation of the migration command.
//!
//! Loads `package.json`, plans the migration, explains it with a diff, and
//! writes the proposed manifest once the user confirms.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use buildscript_lib::diff::{diff_lines, with_context};
use buildscript_lib::manifest::{Manifest, ManifestError, manifest_path, read_manifest_text};
use buildscript_lib::plan::{UnaffectedPolicy, plan};

use crate::messages::Messages;
use crate::output::{print_diff, print_info, print_warning};
use crate::prompts::{Decision, confirm};

/// Unchanged lines shown around each change in the diff.
const DIFF_CONTEXT_LINES: usize = 3;

pub struct MigrateOptions {
  /// Directory containing `package.json`.
  pub directory: PathBuf,
  pub decision: Decision,
  pub policy: UnaffectedPolicy,
  pub messages: Messages,
}

/// Execute the migration.
///
/// Returns `Ok` when the changes were written, declined, or not needed.
///
/// # Errors
///
/// Returns an error if `package.json` is missing or invalid, if the prompt
/// cannot be shown, or if writing fails.
pub fn cmd_migrate(options: &MigrateOptions) -> Result<()> {
  let path = manifest_path(&options.directory);
  let messages = &options.messages;

  let original_text = match read_manifest_text(&path) {
    Ok(text) => text,
    Err(e @ ManifestError::MissingManifest { .. }) => {
      bail!("{e}. Run this command from your app's root directory, or pass that directory as an argument.")
    }
    Err(e) => return Err(e).context("Failed to read package.json"),
  };

  let manifest = match Manifest::parse(&path, &original_text) {
    Ok(manifest) => manifest,
    Err(e @ ManifestError::InvalidManifest { .. }) => {
      bail!("{e}\nFix the formatting of package.json and run this command again.")
    }
    Err(e) => return Err(e).context("Failed to parse package.json"),
  };

  let plan = plan(&manifest, options.policy);
  info!(path = %path.display(), outcome = %plan.outcome(), "planned migration");

  if !plan.has_changes() {
    println!("{}", messages.nothing_to_do());
    return Ok(());
  }

  // Diff against the original in output formatting so only the edits show.
  let current_text = manifest.to_json_string().context("Failed to serialize package.json")?;
  let proposed_text = plan
    .manifest()
    .to_json_string()
    .context("Failed to serialize proposed package.json")?;

  if current_text != original_text {
    debug!("original formatting differs from output formatting");
    print_warning("package.json will be rewritten with 2-space indentation.");
  }

  let diff = with_context(diff_lines(&current_text, &proposed_text), DIFF_CONTEXT_LINES);

  println!("{}", messages.explain(&plan));
  println!("{}", messages.proposed_change());
  print_diff(&diff);
  println!();

  if !confirm("Write these changes to package.json?", options.decision)? {
    info!(path = %path.display(), "changes declined");
    println!("{}", messages.denied_changes());
    return Ok(());
  }

  print_info(&format!("Writing {}", path.display()));
  match plan.manifest().write(&path) {
    Ok(()) => {}
    Err(e @ ManifestError::WriteTargetMissing { .. }) => {
      return Err(e).context("Unexpected error: package.json was removed while this command was running");
    }
    Err(e) => return Err(e).context("Failed to write package.json"),
  }

  println!("{}", messages.applied_changes(&path));
  Ok(())
}
