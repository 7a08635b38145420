//! Reading and writing `package.json` on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::types::{Manifest, ManifestError};
use crate::consts::MANIFEST_FILENAME;

/// Path of the manifest inside an application directory.
pub fn manifest_path(dir: &Path) -> PathBuf {
  dir.join(MANIFEST_FILENAME)
}

/// Read the raw manifest text at `path`.
pub fn read_manifest_text(path: &Path) -> Result<String, ManifestError> {
  match fs::read_to_string(path) {
    Ok(content) => Ok(content),
    Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ManifestError::MissingManifest {
      path: path.to_path_buf(),
    }),
    Err(e) => Err(ManifestError::Read {
      path: path.to_path_buf(),
      source: e,
    }),
  }
}

impl Manifest {
  /// Load and parse the manifest at `path`.
  pub fn load(path: &Path) -> Result<Self, ManifestError> {
    let content = read_manifest_text(path)?;
    Self::parse(path, &content)
  }

  /// Parse manifest text read from `path`, attributing errors to that path.
  pub fn parse(path: &Path, content: &str) -> Result<Self, ManifestError> {
    let manifest = Manifest::from_json_str(content).map_err(|e| ManifestError::InvalidManifest {
      path: path.to_path_buf(),
      source: e,
    })?;

    debug!(path = %path.display(), keys = manifest.as_map().len(), "parsed manifest");
    Ok(manifest)
  }

  /// Persist the manifest over an existing file at `path`.
  ///
  /// The target must still exist. Uses atomic write (write to temp, then
  /// rename) so the file is either fully rewritten or left untouched.
  pub fn write(&self, path: &Path) -> Result<(), ManifestError> {
    if !path.exists() {
      return Err(ManifestError::WriteTargetMissing {
        path: path.to_path_buf(),
      });
    }

    let content = self.to_json_string().map_err(ManifestError::Serialize)?;

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, &content).map_err(|e| ManifestError::Write {
      path: temp_path.clone(),
      source: e,
    })?;

    if let Err(e) = fs::rename(&temp_path, path) {
      if let Err(cleanup) = fs::remove_file(&temp_path) {
        warn!(path = %temp_path.display(), error = %cleanup, "failed to remove temporary manifest");
      }
      return Err(ManifestError::Write {
        path: path.to_path_buf(),
        source: e,
      });
    }

    info!(path = %path.display(), bytes = content.len(), "manifest written");
    Ok(())
  }
}

fn temp_path_for(path: &Path) -> PathBuf {
  let name = path
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .unwrap_or_else(|| MANIFEST_FILENAME.to_string());
  path.with_file_name(format!("{}.tmp", name))
}
