//! Repos-manifest workflow

use crate::{Error, PinnedRepo, Result};
use bootstrap_fs::{DocumentStore, NormalizedPath};
use std::collections::BTreeMap;

/// Load a repos manifest: a document mapping repository names to pins.
///
/// A manifest file that holds no document yields an empty map; a missing
/// file is an error.
pub fn load_manifest(path: &NormalizedPath) -> Result<BTreeMap<String, PinnedRepo>> {
    let manifest: BTreeMap<String, PinnedRepo> = DocumentStore::new().load(path)?;
    tracing::debug!(path = %path, repos = manifest.len(), "Loaded repos manifest");
    Ok(manifest)
}

/// Clone every repository in the manifest and check out its pinned commit.
///
/// Repositories are processed in name order; the first failure stops the
/// run and names the repository that caused it.
pub fn clone_all(path: &NormalizedPath) -> Result<()> {
    let manifest = load_manifest(path)?;
    for (name, repo) in &manifest {
        tracing::debug!(name = %name, url = %repo.url, "Materializing pinned repository");
        repo.fetch()
            .and_then(|()| repo.checkout())
            .map_err(|e| Error::materialize(name, e))?;
    }
    Ok(())
}
