//! Migration planning.
//!
//! Maps a manifest's script configuration to one [`Outcome`] and produces the
//! manifest that outcome proposes. Rules are checked in order, first match
//! wins:
//!
//! | # | Condition                                                  | Outcome                   |
//! |---|------------------------------------------------------------|---------------------------|
//! | 1 | opted in                                                   | `AlreadyOptedIn`          |
//! | 2 | no `scripts`                                               | unaffected                |
//! | 3 | postinstall, build, no heroku-postbuild, postinstall = run build | `RemovePostinstall` |
//! | 4 | postinstall, build, no heroku-postbuild, anything else     | `MovePostinstallToBuild`  |
//! | 5 | build, no postinstall, no heroku-postbuild                 | `AddEmptyHerokuPostbuild` |
//! | 6 | everything else                                            | unaffected                |
//!
//! "Unaffected" resolves through [`UnaffectedPolicy`]: `SuggestOptIn` by
//! default, `NothingToDo` under `LeaveUntouched`. Every mutating outcome sets
//! the opt-in flag, so planning a planned manifest again always yields
//! `AlreadyOptedIn`.

mod types;

use serde_json::Value;
use tracing::debug;

use crate::consts::{BUILD_SCRIPT, HEROKU_POSTBUILD_SCRIPT, POSTINSTALL_SCRIPT, SKIP_BUILD_COMMAND};
use crate::manifest::Manifest;
use crate::scripts::ScriptState;

pub use types::{Outcome, Plan, UnaffectedPolicy};

/// Decide which outcome applies to a script state.
pub fn classify(state: &ScriptState, policy: UnaffectedPolicy) -> Outcome {
  if state.has_opted_in {
    return Outcome::AlreadyOptedIn;
  }
  if !state.has_scripts {
    return policy.unaffected_outcome();
  }

  match (state.has_postinstall, state.has_build, state.has_heroku_postbuild) {
    (true, true, false) if state.postinstall_is_run_build => Outcome::RemovePostinstall,
    (true, true, false) => Outcome::MovePostinstallToBuild,
    (false, true, false) => Outcome::AddEmptyHerokuPostbuild,
    _ => policy.unaffected_outcome(),
  }
}

/// Plan the migration for a manifest.
///
/// Pure and total: never fails, never touches the input.
pub fn plan(manifest: &Manifest, policy: UnaffectedPolicy) -> Plan {
  let state = ScriptState::from_manifest(manifest);
  let outcome = classify(&state, policy);
  debug!(?state, ?policy, %outcome, "classified manifest");

  let mut proposed = manifest.clone();
  apply_outcome(outcome, &mut proposed);

  Plan {
    outcome,
    manifest: proposed,
    original_build: manifest.script(BUILD_SCRIPT).map(str::to_string),
    original_postinstall: manifest.script(POSTINSTALL_SCRIPT).map(str::to_string),
  }
}

fn apply_outcome(outcome: Outcome, manifest: &mut Manifest) {
  match outcome {
    Outcome::AlreadyOptedIn | Outcome::NothingToDo => return,
    Outcome::SuggestOptIn => {}
    Outcome::RemovePostinstall => {
      manifest.remove_script(POSTINSTALL_SCRIPT);
    }
    Outcome::MovePostinstallToBuild => {
      if let Some(command) = manifest.remove_script(POSTINSTALL_SCRIPT) {
        manifest.set_script(BUILD_SCRIPT, command);
      }
    }
    Outcome::AddEmptyHerokuPostbuild => {
      manifest.set_script(HEROKU_POSTBUILD_SCRIPT, Value::String(SKIP_BUILD_COMMAND.to_string()));
    }
  }
  manifest.set_opted_in();
}
