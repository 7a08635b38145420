//! Manifest types.
//!
//! [`Manifest`] wraps the top-level JSON object of a `package.json`. The
//! workspace enables serde_json's `preserve_order` feature, so the underlying
//! map iterates in insertion order:
//! - keys that are replaced keep their position
//! - keys that are added are appended
//! - keys that are removed close the gap without reordering the rest

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::consts::{OPT_IN_KEY, SCRIPTS_KEY};

/// Errors that can occur while reading or writing a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
  #[error("no package.json found at {}", path.display())]
  MissingManifest { path: PathBuf },

  #[error("failed to read {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("{} is not a valid JSON object: {source}", path.display())]
  InvalidManifest { path: PathBuf, source: serde_json::Error },

  #[error("failed to serialize manifest: {0}")]
  Serialize(#[source] serde_json::Error),

  #[error("{} disappeared before changes could be written", path.display())]
  WriteTargetMissing { path: PathBuf },

  #[error("failed to write {}: {source}", path.display())]
  Write { path: PathBuf, source: std::io::Error },
}

/// The parsed contents of a `package.json` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest(Map<String, Value>);

impl Manifest {
  /// Wrap an existing JSON object.
  pub fn from_map(map: Map<String, Value>) -> Self {
    Self(map)
  }

  /// Parse manifest text. Anything other than a JSON object is rejected.
  pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(text)
  }

  /// Serialize with 2-space indentation and a trailing newline.
  pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
    let mut text = serde_json::to_string_pretty(&self.0)?;
    text.push('\n');
    Ok(text)
  }

  pub fn as_map(&self) -> &Map<String, Value> {
    &self.0
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self.0.get(key)
  }

  /// The `scripts` mapping, if present and an object.
  pub fn scripts(&self) -> Option<&Map<String, Value>> {
    self.0.get(SCRIPTS_KEY).and_then(Value::as_object)
  }

  /// Whether a script entry exists, whatever its value.
  pub fn has_script(&self, name: &str) -> bool {
    self.scripts().is_some_and(|scripts| scripts.contains_key(name))
  }

  /// The command string of a script, if it exists and is a string.
  pub fn script(&self, name: &str) -> Option<&str> {
    self.scripts().and_then(|scripts| scripts.get(name)).and_then(Value::as_str)
  }

  /// True only when the opt-in key holds the JSON boolean `true`.
  pub fn is_opted_in(&self) -> bool {
    matches!(self.0.get(OPT_IN_KEY), Some(Value::Bool(true)))
  }

  pub fn set_opted_in(&mut self) {
    self.0.insert(OPT_IN_KEY.to_string(), Value::Bool(true));
  }

  /// Set a script entry. No-op when `scripts` is missing or not an object.
  pub fn set_script(&mut self, name: &str, command: Value) {
    if let Some(scripts) = self.scripts_mut() {
      scripts.insert(name.to_string(), command);
    }
  }

  /// Remove a script entry, returning its previous value.
  pub fn remove_script(&mut self, name: &str) -> Option<Value> {
    self.scripts_mut().and_then(|scripts| scripts.shift_remove(name))
  }

  fn scripts_mut(&mut self) -> Option<&mut Map<String, Value>> {
    self.0.get_mut(SCRIPTS_KEY).and_then(Value::as_object_mut)
  }
}
