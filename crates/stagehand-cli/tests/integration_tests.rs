//! Integration tests for the stagehand binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn stagehand() -> Command {
    Command::cargo_bin("stagehand").unwrap()
}

/// Lay out a vendor package plus a plan file in `root`.
///
/// Returns the plan file path. The plan uses relative paths, which the
/// loader resolves against the plan file's directory.
fn write_fixture(root: &Path) -> PathBuf {
    let assets = root.join("vendor/fixtures/scaffold-a/assets");
    fs::create_dir_all(&assets).unwrap();
    fs::write(assets.join("robots.txt"), "# robots\n").unwrap();

    let plan = root.join("scaffold-plan.json");
    fs::write(
        &plan,
        r#"{
            "web-root": "web",
            "packages": [
                {
                    "name": "fixtures/scaffold-a",
                    "install-path": "vendor/fixtures/scaffold-a",
                    "scaffold": {
                        "[web-root]/robots.txt": "assets/robots.txt"
                    }
                }
            ]
        }"#,
    )
    .unwrap();
    plan
}

#[test]
fn help_flag() {
    stagehand()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stagehand"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag() {
    stagehand()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn apply_help_lists_flags() {
    stagehand()
        .args(["apply", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--symlink"))
        .stdout(predicate::str::contains("--continue-on-error"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn apply_stages_files() {
    let temp = TempDir::new().unwrap();
    let plan = write_fixture(temp.path());

    stagehand()
        .arg("apply")
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Copy [web-root]/robots.txt from assets/robots.txt",
        ))
        .stdout(predicate::str::contains("Staged 2 file(s)"));

    let web = temp.path().join("web");
    assert_eq!(
        fs::read_to_string(web.join("robots.txt")).unwrap(),
        "# robots\n"
    );
    // The autoload bootstrap is generated by default.
    assert!(web.join("autoload.php").exists());
}

#[test]
fn apply_no_autoload() {
    let temp = TempDir::new().unwrap();
    let plan = write_fixture(temp.path());

    stagehand()
        .args(["apply", "--no-autoload"])
        .arg(&plan)
        .assert()
        .success();

    assert!(!temp.path().join("web/autoload.php").exists());
}

#[test]
fn apply_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let plan = write_fixture(temp.path());

    stagehand()
        .args(["apply", "--dry-run"])
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("[web-root]/robots.txt"));

    assert!(!temp.path().join("web").exists());
}

#[test]
fn apply_missing_plan_exits_3() {
    stagehand()
        .args(["apply", "/nonexistent/scaffold-plan.json"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Plan file not found"));
}

#[test]
fn apply_malformed_plan_exits_4() {
    let temp = TempDir::new().unwrap();
    let plan = temp.path().join("scaffold-plan.json");
    fs::write(&plan, "{ not json").unwrap();

    stagehand()
        .arg("apply")
        .arg(&plan)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("is not valid"));
}

#[test]
fn apply_missing_source_exits_3() {
    let temp = TempDir::new().unwrap();
    let plan = write_fixture(temp.path());
    // Break the fixture: remove the declared source file.
    fs::remove_file(temp.path().join("vendor/fixtures/scaffold-a/assets/robots.txt")).unwrap();

    stagehand()
        .arg("apply")
        .arg(&plan)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("not found in package"));

    assert!(!temp.path().join("web").exists());
}

#[test]
fn quiet_apply_prints_nothing() {
    let temp = TempDir::new().unwrap();
    let plan = write_fixture(temp.path());

    stagehand()
        .args(["--quiet", "apply"])
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("web/robots.txt").exists());
}

#[test]
fn plan_command_lists_without_writing() {
    let temp = TempDir::new().unwrap();
    let plan = write_fixture(temp.path());

    stagehand()
        .arg("plan")
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains("replace"))
        .stdout(predicate::str::contains("[web-root]/robots.txt"))
        .stdout(predicate::str::contains("fixtures/scaffold-a"));

    assert!(!temp.path().join("web").exists());
}

#[test]
fn plan_json_output() {
    let temp = TempDir::new().unwrap();
    let plan = write_fixture(temp.path());

    let output = stagehand()
        .args(["--output-format", "json", "plan"])
        .arg(&plan)
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["files"][0]["destination"], "[web-root]/robots.txt");
    assert_eq!(doc["files"][0]["mode"], "replace");
}

#[test]
fn shell_completions() {
    stagehand()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}
