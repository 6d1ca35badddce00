//! End-to-end workflow tests for the library crates
//!
//! These tests exercise the complete flow the CLI drives: manifest
//! loading -> pinned clones -> linking -> content validation, without
//! going through the binary.

use bootstrap_fs::{DocumentStore, NormalizedPath, digest};
use bootstrap_git::{PinnedRepo, clone_all, load_manifest};
use bootstrap_test_utils::git::temp_two_commit_repo;
use bootstrap_validate::{CheckSpec, ValidationRun, check_dirs};
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

const FILE1_MD5: &str = "eb260e9ae827821beceeed4104f0ad89";

/// Write a repos manifest pinning the fixture at the given commit.
fn write_manifest(project: &TempDir, fixture_url: &str, commit: &str, output: &str) -> String {
    let manifest = project.path().join("repos.yaml");
    fs::write(
        &manifest,
        format!("tool_a:\n  url: {fixture_url}\n  commit: {commit}\n  output: {output}\n"),
    )
    .unwrap();
    manifest.display().to_string()
}

#[test]
fn test_clone_then_validate_cloned_contents() {
    let (fixture, commits) = temp_two_commit_repo();
    let project = TempDir::new().unwrap();
    let output = project.path().join("external/tool_a");

    // 1. Materialize the pinned repository
    let manifest = write_manifest(
        &project,
        &fixture.path().display().to_string(),
        &commits[1],
        &output.display().to_string(),
    );
    clone_all(&NormalizedPath::new(&manifest)).unwrap();
    assert!(output.join("file1.txt").exists());
    assert!(output.join("file2.txt").exists());

    // 2. The cloned contents match the recorded digest
    let checks = project.path().join("checks.yaml");
    fs::write(
        &checks,
        format!(
            "t1:\n  input_file: {input}\n  expected_md5sum: {FILE1_MD5}\n",
            input = output.join("file1.txt").display()
        ),
    )
    .unwrap();

    let run = ValidationRun::from_file(&NormalizedPath::new(&checks)).unwrap();
    assert_eq!(run.failure_report().unwrap(), "");

    // 3. The materialized directories satisfy the layout requirements
    let dirs = vec![output.display().to_string()];
    assert!(check_dirs(&dirs).is_ok());
}

#[test]
fn test_validation_detects_drift_in_a_cloned_tree() {
    let (fixture, commits) = temp_two_commit_repo();
    let project = TempDir::new().unwrap();
    let output = project.path().join("external/tool_a");

    let manifest = write_manifest(
        &project,
        &fixture.path().display().to_string(),
        &commits[0],
        &output.display().to_string(),
    );
    clone_all(&NormalizedPath::new(&manifest)).unwrap();

    let input = output.join("file1.txt");
    let document: BTreeMap<String, CheckSpec> = [(
        "t1".to_string(),
        CheckSpec {
            input_file: input.display().to_string(),
            expected_md5sum: FILE1_MD5.to_string(),
            comment: None,
        },
    )]
    .into_iter()
    .collect();
    let run = ValidationRun::from_document(document).unwrap();

    // Fresh clone passes
    assert!(run.failing().unwrap().is_empty());

    // A tampered file is caught on the next run
    fs::write(&input, "tampered\n").unwrap();
    let failing = run.failing().unwrap();
    assert_eq!(failing.len(), 1);
    assert!(failing.contains_key("t1"));
}

#[cfg(unix)]
#[test]
fn test_validation_follows_links_into_the_cloned_tree() {
    use bootstrap_fs::link_relative;

    let (fixture, commits) = temp_two_commit_repo();
    let project = TempDir::new().unwrap();
    let output = project.path().join("external/tool_a");

    let manifest = write_manifest(
        &project,
        &fixture.path().display().to_string(),
        &commits[0],
        &output.display().to_string(),
    );
    clone_all(&NormalizedPath::new(&manifest)).unwrap();

    // Link the cloned file into the project's config directory
    let target = NormalizedPath::new(output.join("file1.txt"));
    let link = NormalizedPath::new(project.path().join("config/file1.txt"));
    link_relative(&target, &link).unwrap();

    let stored = fs::read_link(link.to_native()).unwrap();
    assert_eq!(stored.to_str().unwrap(), "../external/tool_a/file1.txt");

    // Digesting through the link sees the target's bytes
    assert_eq!(digest::file_md5(&link, None).unwrap(), FILE1_MD5);
}

#[test]
fn test_manifest_and_checks_use_the_same_document_loading() {
    let (fixture, commits) = temp_two_commit_repo();
    let project = TempDir::new().unwrap();

    let manifest = write_manifest(
        &project,
        &fixture.path().display().to_string(),
        &commits[0],
        "external/tool_a",
    );

    // The same store parses both document shapes
    let repos = load_manifest(&NormalizedPath::new(&manifest)).unwrap();
    assert_eq!(repos.len(), 1);
    assert_eq!(
        repos.get("tool_a"),
        Some(&PinnedRepo {
            url: fixture.path().display().to_string(),
            commit: commits[0].clone(),
            output: "external/tool_a".to_string(),
        })
    );

    let checks = project.path().join("checks.yaml");
    fs::write(
        &checks,
        format!("t1:\n  input_file: a.txt\n  expected_md5sum: {FILE1_MD5}\n"),
    )
    .unwrap();
    let document: BTreeMap<String, CheckSpec> = DocumentStore::new()
        .load(&NormalizedPath::new(&checks))
        .unwrap();
    assert_eq!(document["t1"].input_file, "a.txt");
}
