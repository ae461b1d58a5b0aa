//! Local (non-Actions) runs: mutating commands are simulated, the transcript
//! shows what would happen, and nothing in the repository changes.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .is_ok()
}

fn run_git(dir: &Path, args: &[&str]) {
    let out = std::process::Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .expect("spawn git");
    assert!(
        out.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
}

fn init_repo(dir: &Path) {
    run_git(dir, &["init", "-q"]);
    run_git(
        dir,
        &[
            "-c",
            "user.name=test",
            "-c",
            "user.email=test@example.com",
            "commit",
            "--allow-empty",
            "-q",
            "-m",
            "init",
        ],
    );
}

/// Binary invocation pinned to local mode with a repository identity set.
fn upsync(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("upsync").unwrap();
    cmd.current_dir(dir)
        .env_remove("GITHUB_ACTIONS")
        .env_remove("GITHUB_OUTPUT")
        .env_remove("RUNNER_DEBUG")
        .env("GITHUB_REPOSITORY", "org/fork");
    cmd
}

#[test]
fn simulated_run_prints_transcript_and_synced_output() {
    if !git_available() {
        eprintln!("git not on PATH; skipping");
        return;
    }
    let repo = TempDir::new().unwrap();
    init_repo(repo.path());

    upsync(repo.path())
        .args([
            "--upstream",
            "org/upstream",
            "--token",
            "s3cret",
            "--branch",
            "feature-x",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("simulated: git fetch --depth=1 upstream"))
        .stdout(predicate::str::contains("simulated: git checkout feature-x"))
        .stdout(predicate::str::contains(
            "simulated: git push --force origin feature-x",
        ))
        .stdout(predicate::str::contains("outputs:"))
        .stdout(predicate::str::contains("synced=true"))
        // The embedded token must never reach the transcript.
        .stdout(predicate::str::contains("s3cret").not());
}

#[test]
fn simulated_run_does_not_touch_the_repository() {
    if !git_available() {
        eprintln!("git not on PATH; skipping");
        return;
    }
    let repo = TempDir::new().unwrap();
    init_repo(repo.path());

    upsync(repo.path())
        .args(["--upstream", "org/upstream", "--token", "t", "--branch", "feature-x"])
        .assert()
        .success();

    // No remote was actually added and no branch created.
    let remotes = std::process::Command::new("git")
        .current_dir(repo.path())
        .arg("remote")
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&remotes.stdout).trim(), "");
}

#[test]
fn protected_branch_is_refused() {
    if !git_available() {
        eprintln!("git not on PATH; skipping");
        return;
    }
    let repo = TempDir::new().unwrap();
    init_repo(repo.path());

    upsync(repo.path())
        .args(["--upstream", "org/upstream", "--token", "t", "--branch", "main"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("protected branch 'main'"))
        .stdout(predicate::str::contains("simulated: git push").not());
}

#[test]
fn empty_protected_list_allows_main() {
    if !git_available() {
        eprintln!("git not on PATH; skipping");
        return;
    }
    let repo = TempDir::new().unwrap();
    init_repo(repo.path());

    upsync(repo.path())
        .args([
            "--upstream",
            "org/upstream",
            "--token",
            "t",
            "--branch",
            "main",
            "--protected-branches",
            "",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("synced=true"));
}

#[test]
fn missing_repository_identity_is_a_setup_error() {
    if !git_available() {
        eprintln!("git not on PATH; skipping");
        return;
    }
    let repo = TempDir::new().unwrap();
    init_repo(repo.path());

    upsync(repo.path())
        .env_remove("GITHUB_REPOSITORY")
        .args(["--upstream", "org/upstream", "--token", "t", "--branch", "feature-x"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("GITHUB_REPOSITORY"));
}

#[test]
fn required_flags_are_enforced_by_the_parser() {
    let repo = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("upsync").unwrap();
    cmd.current_dir(repo.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--upstream"))
        .stderr(predicate::str::contains("--token"));
}

#[test]
fn invalid_depth_is_rejected_by_the_parser() {
    let repo = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("upsync").unwrap();
    cmd.current_dir(repo.path())
        .args(["--upstream", "o/u", "--token", "t", "--depth", "deep"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid fetch depth"));
}
