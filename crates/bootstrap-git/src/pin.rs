//! Pinned repository descriptors

use crate::Result;
use bootstrap_fs::NormalizedPath;
use serde::Deserialize;

/// A repository pinned to a specific commit.
///
/// Mirrors one entry of the repos manifest: where to clone from, which
/// commit to check out, and where the clone lives on disk. The clone
/// source may be a URL or a plain local path.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PinnedRepo {
    /// Clone source (URL or local path)
    pub url: String,
    /// Commit to detach HEAD at after cloning
    pub commit: String,
    /// Local directory the clone should occupy
    pub output: String,
}

impl PinnedRepo {
    /// Does anything already occupy the clone destination?
    pub fn exists(&self) -> bool {
        NormalizedPath::new(&self.output).exists()
    }

    /// Clone the repository to its destination.
    ///
    /// An occupied destination is left untouched.
    // TODO: verify that an occupied destination holds a clone containing
    // the pinned commit instead of trusting whatever is there.
    pub fn fetch(&self) -> Result<()> {
        if self.exists() {
            tracing::debug!(output = %self.output, "Destination occupied, skipping clone");
            return Ok(());
        }

        let dest = NormalizedPath::new(&self.output);
        if let Some(parent) = dest.parent() {
            let parent_native = parent.to_native();
            std::fs::create_dir_all(&parent_native)
                .map_err(|e| bootstrap_fs::Error::io(parent_native, e))?;
        }

        git2::build::RepoBuilder::new().clone(&self.url, &dest.to_native())?;
        tracing::debug!(url = %self.url, output = %self.output, "Cloned repository");
        Ok(())
    }

    /// Detach HEAD at the pinned commit in the cloned repository.
    ///
    /// # Errors
    ///
    /// Fails if the destination is not a git repository or the pinned
    /// commit does not resolve in it.
    pub fn checkout(&self) -> Result<()> {
        let repo = git2::Repository::open(NormalizedPath::new(&self.output).to_native())?;
        let object = repo.revparse_single(&self.commit)?;
        repo.checkout_tree(&object, None)?;
        repo.set_head_detached(object.id())?;
        tracing::debug!(commit = %self.commit, output = %self.output, "Checked out pinned commit");
        Ok(())
    }
}
