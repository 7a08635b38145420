//! Script state classification.
//!
//! [`ScriptState`] is a snapshot of the boolean facts the planner branches on.
//! It is always derived from a manifest and never stored, so it has to be
//! recomputed after any mutation.

use crate::consts::{BUILD_SCRIPT, HEROKU_POSTBUILD_SCRIPT, POSTINSTALL_SCRIPT, RUN_BUILD_COMMANDS};
use crate::manifest::Manifest;

/// Boolean facts about a manifest's build-related scripts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptState {
  /// `scripts` is present and is an object.
  pub has_scripts: bool,
  /// The opt-in flag is set to `true`.
  pub has_opted_in: bool,
  pub has_build: bool,
  pub has_postinstall: bool,
  pub has_heroku_postbuild: bool,
  /// `postinstall` does nothing but invoke the `build` script.
  pub postinstall_is_run_build: bool,
}

impl ScriptState {
  pub fn from_manifest(manifest: &Manifest) -> Self {
    let has_postinstall = manifest.has_script(POSTINSTALL_SCRIPT);

    Self {
      has_scripts: manifest.scripts().is_some(),
      has_opted_in: manifest.is_opted_in(),
      has_build: manifest.has_script(BUILD_SCRIPT),
      has_postinstall,
      has_heroku_postbuild: manifest.has_script(HEROKU_POSTBUILD_SCRIPT),
      postinstall_is_run_build: has_postinstall
        && manifest.script(POSTINSTALL_SCRIPT).is_some_and(is_run_build_command),
    }
  }
}

/// Whether a command, once trimmed, is exactly a package-manager call to `build`.
pub fn is_run_build_command(command: &str) -> bool {
  RUN_BUILD_COMMANDS.contains(&command.trim())
}
