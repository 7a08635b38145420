//! The `package.json` manifest.
//!
//! A manifest is kept as an untyped JSON object so every key the migration
//! does not touch survives a rewrite unchanged and in its original order.

mod storage;
mod types;

pub use storage::{manifest_path, read_manifest_text};
pub use types::*;
