//! Migration outcomes end to end: each fixture through the real binary.

use predicates::prelude::*;

use super::common::TestApp;

const DOCS_URL: &str = "https://help.heroku.com/P5IMU3MP/heroku-node-js-build-script-change-faq";

#[test]
fn already_opted_in_needs_nothing() {
  let app = TestApp::from_fixture("already-opted-in.json");
  let before = app.manifest();

  app
    .cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("You don't need to do anything"))
    .stdout(predicate::str::contains(DOCS_URL));

  assert_eq!(app.manifest(), before);
}

#[test]
fn build_only_gets_empty_postbuild() {
  let app = TestApp::from_fixture("build-only.json");

  app
    .cmd()
    .arg("--yes")
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""build": "webpack""#))
    .stdout(predicate::str::contains(r#"+     "heroku-postbuild": "echo Skip build on Heroku""#))
    .stdout(predicate::str::contains("Updated"));

  assert_eq!(
    app.manifest(),
    r#"{
  "name": "build-only",
  "version": "1.0.0",
  "scripts": {
    "build": "webpack",
    "start": "node server.js",
    "heroku-postbuild": "echo Skip build on Heroku"
  },
  "heroku-build-change-opt-in": true
}
"#
  );
}

#[test]
fn postinstall_running_build_is_removed() {
  let app = TestApp::from_fixture("postinstall-runs-build.json");

  app
    .cmd()
    .arg("-y")
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""postinstall": "yarn build""#))
    .stdout(predicate::str::contains(r#"-     "postinstall": "yarn build","#));

  assert_eq!(
    app.manifest(),
    r#"{
  "name": "postinstall-runs-build",
  "version": "1.0.0",
  "scripts": {
    "build": "react-scripts build",
    "start": "serve -s build"
  },
  "heroku-build-change-opt-in": true
}
"#
  );
}

#[test]
fn postinstall_moves_into_build() {
  let app = TestApp::from_fixture("postinstall-and-build.json");

  app
    .cmd()
    .arg("--yes")
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""postinstall": "echo postinstall""#))
    .stdout(predicate::str::contains(r#""build": "react-scripts build""#));

  assert_eq!(
    app.manifest(),
    r#"{
  "name": "postinstall-and-build",
  "version": "1.0.0",
  "scripts": {
    "build": "echo postinstall"
  },
  "heroku-build-change-opt-in": true
}
"#
  );
}

#[test]
fn heroku_postbuild_only_is_opted_in() {
  let app = TestApp::from_fixture("heroku-postbuild-only.json");

  app.cmd().arg("--yes").assert().success();

  assert_eq!(
    app.manifest(),
    r#"{
  "name": "heroku-postbuild-only",
  "version": "1.0.0",
  "scripts": {
    "heroku-postbuild": "noop"
  },
  "heroku-build-change-opt-in": true
}
"#
  );
}

#[test]
fn no_scripts_is_opted_in() {
  let app = TestApp::from_fixture("no-scripts.json");

  app
    .cmd()
    .arg("--yes")
    .assert()
    .success()
    .stdout(predicate::str::contains("heroku-build-change-opt-in"));

  let manifest: serde_json::Value = serde_json::from_str(&app.manifest()).unwrap();
  assert_eq!(manifest["heroku-build-change-opt-in"], serde_json::json!(true));
  assert_eq!(manifest["dependencies"]["express"], serde_json::json!("^4.16.4"));
  assert!(manifest.get("scripts").is_none());
}

#[test]
fn leave_unaffected_skips_opt_in() {
  let app = TestApp::from_fixture("no-scripts.json");
  let before = app.manifest();

  app
    .cmd()
    .arg("--leave-unaffected")
    .assert()
    .success()
    .stdout(predicate::str::contains("You don't need to do anything"));

  assert_eq!(app.manifest(), before);
}

#[test]
fn no_flag_discards_changes() {
  let app = TestApp::from_fixture("build-only.json");
  let before = app.manifest();

  app
    .cmd()
    .arg("--no")
    .assert()
    .success()
    .stdout(predicate::str::contains("We suggest the following changes"))
    .stdout(predicate::str::contains("No changes written to disk."));

  assert_eq!(app.manifest(), before);
}

#[test]
fn second_run_is_a_noop() {
  let app = TestApp::from_fixture("postinstall-runs-build.json");

  app.cmd().arg("--yes").assert().success();
  let after_first = app.manifest();

  app
    .cmd()
    .arg("--yes")
    .assert()
    .success()
    .stdout(predicate::str::contains("You don't need to do anything"));

  assert_eq!(app.manifest(), after_first);
}

#[test]
fn non_interactive_without_flags_fails() {
  let app = TestApp::from_fixture("build-only.json");
  let before = app.manifest();

  app
    .cmd()
    .assert()
    .failure()
    .stderr(predicate::str::contains("--yes"));

  assert_eq!(app.manifest(), before);
}

#[test]
fn missing_manifest_fails() {
  let app = TestApp::empty();

  app
    .cmd()
    .assert()
    .failure()
    .stderr(predicate::str::contains("no package.json found"));

  assert!(!app.manifest_path.exists());
}

#[test]
fn malformed_manifest_fails_without_writing() {
  let app = TestApp::from_fixture("malformed.json");
  let before = app.manifest();

  app
    .cmd()
    .arg("--yes")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Fix the formatting"));

  assert_eq!(app.manifest(), before);
}

#[test]
fn non_object_manifest_fails() {
  let app = TestApp::with_manifest("[\"not\", \"a\", \"manifest\"]\n");

  app.cmd().arg("--yes").assert().failure();
}

#[test]
fn reformatting_is_announced() {
  let app = TestApp::from_fixture("four-space-indent.json");

  app
    .cmd()
    .arg("--yes")
    .assert()
    .success()
    .stderr(predicate::str::contains("2-space indentation"));

  assert!(app.manifest().starts_with("{\n  \"name\": \"four-space-indent\",\n"));
}

#[test]
fn change_date_from_environment() {
  let app = TestApp::from_fixture("build-only.json");

  app
    .cmd()
    .arg("--no")
    .env("UPDATE_BUILD_SCRIPT_CHANGE_DATE", "Friday, April 1")
    .assert()
    .success()
    .stdout(predicate::str::contains("Friday, April 1"))
    .stdout(predicate::str::contains("Monday, March 11").not());
}

#[test]
fn docs_url_flag() {
  let app = TestApp::from_fixture("already-opted-in.json");

  app
    .cmd()
    .arg("--docs-url")
    .arg("https://docs.example.com/build-change")
    .assert()
    .success()
    .stdout(predicate::str::contains("https://docs.example.com/build-change"));
}

#[test]
fn glyphs_always_decorates_messages() {
  let app = TestApp::from_fixture("already-opted-in.json");

  app
    .cmd()
    .arg("--glyphs")
    .arg("always")
    .assert()
    .success()
    .stdout(predicate::str::contains("✅"));
}
