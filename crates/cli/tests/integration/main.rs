//! Integration tests driving the binary against fixture apps.

mod common;
mod migrate_tests;
