mod migrate;

pub use migrate::{MigrateOptions, cmd_migrate};
