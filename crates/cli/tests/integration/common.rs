//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Get path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

/// Read fixture content.
pub fn fixture_content(name: &str) -> String {
  std::fs::read_to_string(fixture_path(name)).unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Isolated app directory.
///
/// Each test gets its own temporary directory holding a `package.json`.
pub struct TestApp {
  pub temp: TempDir,
  pub manifest_path: PathBuf,
}

impl TestApp {
  /// Create from a fixture file.
  ///
  /// Copies the fixture content to a temporary `package.json`.
  pub fn from_fixture(name: &str) -> Self {
    Self::with_manifest(&fixture_content(name))
  }

  /// Create with the given `package.json` content.
  pub fn with_manifest(content: &str) -> Self {
    let app = Self::empty();
    std::fs::write(&app.manifest_path, content).unwrap();
    app
  }

  /// Create an app directory without a `package.json`.
  pub fn empty() -> Self {
    let temp = TempDir::new().unwrap();
    let manifest_path = temp.path().join("package.json");
    Self { temp, manifest_path }
  }

  /// Current `package.json` content.
  pub fn manifest(&self) -> String {
    std::fs::read_to_string(&self.manifest_path).unwrap()
  }

  /// Command targeting this app's directory, with message settings pinned.
  pub fn cmd(&self) -> Command {
    let mut cmd = cargo_bin_cmd!("update-node-build-script");
    cmd
      .arg(self.temp.path())
      .env_remove("UPDATE_BUILD_SCRIPT_CHANGE_DATE")
      .env_remove("UPDATE_BUILD_SCRIPT_DOCS_URL");
    cmd
  }
}
