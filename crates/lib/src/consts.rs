//! Well-known `package.json` keys and script commands.

/// File name of the manifest inside an application directory.
pub const MANIFEST_FILENAME: &str = "package.json";

/// Top-level key holding the scripts mapping.
pub const SCRIPTS_KEY: &str = "scripts";

/// Top-level boolean marking that the app already adapted to the build script change.
pub const OPT_IN_KEY: &str = "heroku-build-change-opt-in";

pub const BUILD_SCRIPT: &str = "build";
pub const POSTINSTALL_SCRIPT: &str = "postinstall";
pub const HEROKU_POSTBUILD_SCRIPT: &str = "heroku-postbuild";

/// Postinstall commands whose only effect is running the `build` script.
pub const RUN_BUILD_COMMANDS: [&str; 3] = ["npm run build", "yarn run build", "yarn build"];

/// Command written to `heroku-postbuild` so the platform skips the `build` script.
pub const SKIP_BUILD_COMMAND: &str = "echo Skip build on Heroku";
