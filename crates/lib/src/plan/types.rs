//! Plan types.

use std::fmt;

use crate::manifest::Manifest;

/// How to treat apps the build script change does not affect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnaffectedPolicy {
  /// Opt unaffected apps in anyway.
  #[default]
  OptIn,
  /// Leave unaffected apps untouched and report there is nothing to do.
  LeaveUntouched,
}

impl UnaffectedPolicy {
  pub(crate) fn unaffected_outcome(self) -> Outcome {
    match self {
      UnaffectedPolicy::OptIn => Outcome::SuggestOptIn,
      UnaffectedPolicy::LeaveUntouched => Outcome::NothingToDo,
    }
  }
}

/// The migration chosen for a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
  /// The opt-in flag is already set.
  AlreadyOptedIn,
  /// The app is unaffected and the policy leaves it alone.
  NothingToDo,
  /// The app is unaffected; only set the opt-in flag.
  SuggestOptIn,
  /// `postinstall` only runs `build`; drop it.
  RemovePostinstall,
  /// `postinstall` does real work next to `build`; it becomes the new `build`.
  MovePostinstallToBuild,
  /// `build` exists on its own; add a `heroku-postbuild` that skips it.
  AddEmptyHerokuPostbuild,
}

impl Outcome {
  /// Key of the message template explaining this outcome.
  pub fn message_key(self) -> &'static str {
    match self {
      Outcome::AlreadyOptedIn => "already-opted-in",
      Outcome::NothingToDo => "nothing-to-do",
      Outcome::SuggestOptIn => "suggest-opt-in",
      Outcome::RemovePostinstall => "remove-postinstall",
      Outcome::MovePostinstallToBuild => "move-postinstall",
      Outcome::AddEmptyHerokuPostbuild => "empty-postbuild",
    }
  }

  /// Returns true if applying this outcome changes the manifest.
  pub fn is_mutating(self) -> bool {
    !matches!(self, Outcome::AlreadyOptedIn | Outcome::NothingToDo)
  }
}

impl fmt::Display for Outcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.message_key())
  }
}

/// Result of planning a migration.
///
/// Holds a mutated copy of the manifest; the caller's original is never
/// modified, so it stays available for diffing or discarding.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
  pub(crate) outcome: Outcome,
  pub(crate) manifest: Manifest,
  pub(crate) original_build: Option<String>,
  pub(crate) original_postinstall: Option<String>,
}

impl Plan {
  pub fn outcome(&self) -> Outcome {
    self.outcome
  }

  /// The proposed manifest.
  pub fn manifest(&self) -> &Manifest {
    &self.manifest
  }

  pub fn into_manifest(self) -> Manifest {
    self.manifest
  }

  /// The `build` command before the migration, if it was a string.
  pub fn original_build(&self) -> Option<&str> {
    self.original_build.as_deref()
  }

  /// The `postinstall` command before the migration, if it was a string.
  pub fn original_postinstall(&self) -> Option<&str> {
    self.original_postinstall.as_deref()
  }

  /// Returns true if the proposed manifest differs from the original.
  pub fn has_changes(&self) -> bool {
    self.outcome.is_mutating()
  }
}
