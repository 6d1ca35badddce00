//! Validation runs over a checks document

use crate::{Check, CheckSpec, Result};
use bootstrap_fs::{DocumentStore, NormalizedPath};
use std::collections::BTreeMap;

/// Marker opening every failure line, for grep-ability in logs.
const FAILURE_TAG: &str = "[FAILURE]";
/// The only check type this runner produces.
const CHECK_TYPE: &str = "md5sum";

/// A set of named checksum checks parsed from one document.
///
/// Checks are keyed by name, so iteration and reporting order is the
/// name order, deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRun {
    checks: BTreeMap<String, Check>,
}

impl ValidationRun {
    /// Build a run from an in-memory document mapping.
    ///
    /// Every spec is validated on the way in; the first malformed one
    /// fails the whole document.
    pub fn from_document(document: BTreeMap<String, CheckSpec>) -> Result<Self> {
        let mut checks = BTreeMap::new();
        for (name, spec) in document {
            let check = Check::new(name.clone(), spec)?;
            checks.insert(name, check);
        }
        Ok(Self { checks })
    }

    /// Build a run from a checks document on disk.
    ///
    /// The document maps check names to specs:
    ///
    /// ```yaml
    /// # some-comment
    /// t1:
    ///   input_file: data/empty.txt
    ///   expected_md5sum: d41d8cd98f00b204e9800998ecf8427e
    /// ```
    ///
    /// An empty document yields an empty run.
    pub fn from_file(path: &NormalizedPath) -> Result<Self> {
        let document: BTreeMap<String, CheckSpec> = DocumentStore::new().load(path)?;
        tracing::debug!(path = %path, checks = document.len(), "Loaded checks document");
        Self::from_document(document)
    }

    /// Number of checks in the run.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether the run holds no checks.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check and collect the failing subset, keyed by name.
    ///
    /// # Errors
    ///
    /// An unreadable input file aborts the run; it is not a mere failed
    /// check.
    pub fn failing(&self) -> Result<BTreeMap<&str, &Check>> {
        let mut failures = BTreeMap::new();
        for check in self.checks.values() {
            if !check.is_valid()? {
                failures.insert(check.name(), check);
            }
        }
        Ok(failures)
    }

    /// Render the failure report.
    ///
    /// One tab-separated line per failing check:
    ///
    /// ```text
    /// [FAILURE]	test_name:<name>	test_type:md5sum	input_file:<path>
    /// ```
    ///
    /// Lines are joined with `\n`. All checks passing yields an empty
    /// string.
    pub fn failure_report(&self) -> Result<String> {
        let lines: Vec<String> = self
            .failing()?
            .into_values()
            .map(|check| {
                [
                    FAILURE_TAG.to_string(),
                    format!("test_name:{}", check.name()),
                    format!("test_type:{CHECK_TYPE}"),
                    format!("input_file:{}", check.input_file()),
                ]
                .join("\t")
            })
            .collect();
        Ok(lines.join("\n"))
    }
}
