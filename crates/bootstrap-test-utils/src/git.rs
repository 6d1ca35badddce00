//! Local git repository fixtures.
//!
//! All fixtures are built through `git2` directly, so tests need neither
//! a `git` binary nor any global git configuration. A fixture's path
//! doubles as a clone URL: `git2` clones from plain local paths.

use std::fs;
use std::path::Path;

/// Initialises a real git repository using `git2` (no commits, no config).
///
/// Use for: tests that only need repository state to exist on disk.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn bare_init(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!("bare_init: failed to init repository at {}: {e}", path.display())
    })
}

/// Adds `name` with `content` to the fixture repository and commits it.
///
/// Returns the new commit id. Works on an empty repository (first commit)
/// as well as on top of existing history.
///
/// # Panics
/// Panics if any filesystem or git operation fails.
pub fn commit_file(repo: &git2::Repository, name: &str, content: &str, message: &str) -> git2::Oid {
    let workdir = repo
        .workdir()
        .unwrap_or_else(|| panic!("commit_file: fixture repository has no worktree"));
    fs::write(workdir.join(name), content)
        .unwrap_or_else(|e| panic!("commit_file: failed to write {name}: {e}"));

    let mut index = repo
        .index()
        .unwrap_or_else(|e| panic!("commit_file: failed to open index: {e}"));
    index
        .add_path(Path::new(name))
        .unwrap_or_else(|e| panic!("commit_file: failed to stage {name}: {e}"));
    index
        .write()
        .unwrap_or_else(|e| panic!("commit_file: failed to write index: {e}"));
    let tree_id = index
        .write_tree()
        .unwrap_or_else(|e| panic!("commit_file: failed to write tree: {e}"));
    let tree = repo
        .find_tree(tree_id)
        .unwrap_or_else(|e| panic!("commit_file: failed to find tree: {e}"));

    let signature = git2::Signature::now("Test User", "test@test.com")
        .unwrap_or_else(|e| panic!("commit_file: failed to build signature: {e}"));

    let parent = repo.head().ok().map(|head| {
        head.peel_to_commit()
            .unwrap_or_else(|e| panic!("commit_file: HEAD is not a commit: {e}"))
    });
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
        .unwrap_or_else(|e| panic!("commit_file: failed to commit {name}: {e}"))
}

/// Initialises a repository at `path` with two commits.
///
/// The first commit adds `file1.txt`, the second adds `file2.txt`.
/// Returns the two commit ids as hex strings, oldest first. Checking out
/// the first id should leave a worktree with `file1.txt` but no
/// `file2.txt`.
///
/// # Panics
/// Panics if any git operation fails.
pub fn two_commit_repo(path: &Path) -> Vec<String> {
    let repo = bare_init(path);
    let first = commit_file(&repo, "file1.txt", "first\n", "Add file1");
    let second = commit_file(&repo, "file2.txt", "second\n", "Add file2");
    vec![first.to_string(), second.to_string()]
}

/// [`two_commit_repo`] in a fresh temporary directory.
///
/// Returns the directory guard along with the commit ids; the fixture is
/// deleted when the guard drops.
///
/// # Panics
/// Panics if the directory or any git operation fails.
pub fn temp_two_commit_repo() -> (tempfile::TempDir, Vec<String>) {
    let dir = tempfile::tempdir()
        .unwrap_or_else(|e| panic!("temp_two_commit_repo: failed to create tempdir: {e}"));
    let commits = two_commit_repo(dir.path());
    (dir, commits)
}
