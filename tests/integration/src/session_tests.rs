//! Full bootstrap sessions through the compiled binary
//!
//! Each test drives a complete project-setup session the way a user
//! would: clone pinned repositories, link files into place, then check
//! directories and file contents.

#[allow(deprecated)]
use assert_cmd::Command;
use bootstrap_test_utils::git::temp_two_commit_repo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FILE1_MD5: &str = "eb260e9ae827821beceeed4104f0ad89";

#[allow(deprecated)]
fn bootstrap_cmd(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bootstrap").unwrap();
    cmd.current_dir(project);
    cmd
}

/// Lay out the documents a session needs: a repos manifest, a
/// required-directories list and a checks document, all relative to the
/// project root.
fn write_session_documents(project: &TempDir, fixture_url: &str, commit: &str) {
    fs::write(
        project.path().join("repos.yaml"),
        format!("tool_a:\n  url: {fixture_url}\n  commit: {commit}\n  output: clones/tool_a\n"),
    )
    .unwrap();
    fs::write(project.path().join("dirs.yaml"), "- clones/tool_a\n").unwrap();
    fs::write(
        project.path().join("checks.yaml"),
        format!("t1:\n  input_file: clones/tool_a/file1.txt\n  expected_md5sum: {FILE1_MD5}\n"),
    )
    .unwrap();
}

#[test]
fn test_session_clones_checks_and_validates() {
    let (fixture, commits) = temp_two_commit_repo();
    let project = TempDir::new().unwrap();
    write_session_documents(&project, &fixture.path().display().to_string(), &commits[0]);

    // Requirements are not met before the clone
    bootstrap_cmd(project.path())
        .args(["check-dirs", "dirs.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("clones/tool_a"));

    // Materialize the pinned repository
    bootstrap_cmd(project.path())
        .args(["clone-repos", "repos.yaml"])
        .assert()
        .success();
    assert!(project.path().join("clones/tool_a/file1.txt").exists());
    assert!(!project.path().join("clones/tool_a/file2.txt").exists());

    // The clone sits detached at the pinned commit
    let clone = git2::Repository::open(project.path().join("clones/tool_a")).unwrap();
    assert!(clone.head_detached().unwrap());
    assert_eq!(
        clone.head().unwrap().target().unwrap().to_string(),
        commits[0]
    );

    // Now the layout and the contents both check out
    bootstrap_cmd(project.path())
        .args(["check-dirs", "dirs.yaml"])
        .assert()
        .success();
    bootstrap_cmd(project.path())
        .args(["validate", "--yaml", "checks.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_session_reports_drift_without_failing_the_run() {
    let (fixture, commits) = temp_two_commit_repo();
    let project = TempDir::new().unwrap();
    write_session_documents(&project, &fixture.path().display().to_string(), &commits[0]);

    bootstrap_cmd(project.path())
        .args(["clone-repos", "repos.yaml"])
        .assert()
        .success();

    // Tamper with the cloned file; validation reports it but exits 0
    fs::write(project.path().join("clones/tool_a/file1.txt"), "tampered\n").unwrap();
    bootstrap_cmd(project.path())
        .args(["validate", "--yaml", "checks.yaml"])
        .assert()
        .success()
        .stdout(
            "[FAILURE]\ttest_name:t1\ttest_type:md5sum\tinput_file:clones/tool_a/file1.txt\n",
        );
}

#[test]
fn test_session_is_rerunnable() {
    let (fixture, commits) = temp_two_commit_repo();
    let project = TempDir::new().unwrap();
    write_session_documents(&project, &fixture.path().display().to_string(), &commits[0]);

    for _ in 0..2 {
        bootstrap_cmd(project.path())
            .args(["clone-repos", "repos.yaml"])
            .assert()
            .success();
    }

    // The occupied destination was skipped, not re-cloned
    assert!(project.path().join("clones/tool_a/file1.txt").exists());
    bootstrap_cmd(project.path())
        .args(["validate", "--yaml", "checks.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn test_session_links_cloned_files_into_place() {
    let (fixture, commits) = temp_two_commit_repo();
    let project = TempDir::new().unwrap();
    write_session_documents(&project, &fixture.path().display().to_string(), &commits[0]);

    bootstrap_cmd(project.path())
        .args(["clone-repos", "repos.yaml"])
        .assert()
        .success();

    bootstrap_cmd(project.path())
        .args(["link", "clones/tool_a/file1.txt", "config/file1.txt"])
        .assert()
        .success();

    let stored = fs::read_link(project.path().join("config/file1.txt")).unwrap();
    assert_eq!(stored.to_str().unwrap(), "../clones/tool_a/file1.txt");

    // Validating through the link sees the cloned bytes
    fs::write(
        project.path().join("link_checks.yaml"),
        format!("t1:\n  input_file: config/file1.txt\n  expected_md5sum: {FILE1_MD5}\n"),
    )
    .unwrap();
    bootstrap_cmd(project.path())
        .args(["validate", "--yaml", "link_checks.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
