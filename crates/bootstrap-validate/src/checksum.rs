//! Checksum checks against recorded digests

use crate::{Error, Result};
use bootstrap_fs::{NormalizedPath, digest};
use serde::Deserialize;

/// One checksum expectation as written in a checks document.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckSpec {
    /// File whose digest is compared
    pub input_file: String,
    /// Expected md5 digest, lowercase hex
    pub expected_md5sum: String,
    /// Comment character; lines starting with it are left out of the digest
    #[serde(default)]
    pub comment: Option<char>,
}

/// A named checksum check whose expected digest has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    name: String,
    spec: CheckSpec,
}

impl Check {
    /// Validate a spec into a runnable check.
    ///
    /// The expected digest must be 32 lowercase hex characters. A
    /// malformed digest is rejected here, where the document is parsed,
    /// rather than surfacing later as a check that can never pass.
    pub fn new(name: impl Into<String>, spec: CheckSpec) -> Result<Self> {
        let name = name.into();
        if !is_md5_hex(&spec.expected_md5sum) {
            return Err(Error::InvalidDigest {
                name,
                value: spec.expected_md5sum,
            });
        }
        Ok(Self { name, spec })
    }

    /// Name of the check, as keyed in the document.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the file this check digests.
    pub fn input_file(&self) -> &str {
        &self.spec.input_file
    }

    /// Compare the input file's digest against the recorded one.
    ///
    /// # Errors
    ///
    /// A missing or unreadable input file is an error, not a failed
    /// check.
    pub fn is_valid(&self) -> Result<bool> {
        let path = NormalizedPath::new(&self.spec.input_file);
        let actual = digest::file_md5(&path, self.spec.comment)?;
        Ok(actual == self.spec.expected_md5sum)
    }
}

fn is_md5_hex(value: &str) -> bool {
    value.len() == 32 && value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
