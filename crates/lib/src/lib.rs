//! buildscript-lib: Core types and logic for update-node-build-script
//!
//! This crate provides the pieces the CLI stitches together:
//! - `Manifest`: an order-preserving view of a `package.json` file
//! - `ScriptState`: the boolean facts derived from a manifest's scripts
//! - `plan`: the decision table mapping a manifest to a migration `Plan`
//! - `diff`: line diffs between the current and proposed manifest text

pub mod consts;
pub mod diff;
pub mod manifest;
pub mod plan;
pub mod scripts;
