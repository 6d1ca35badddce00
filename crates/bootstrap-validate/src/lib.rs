//! Validation checks for Project Bootstrap
//!
//! Three families of checks: file contents against recorded md5 digests,
//! existence of required directories, and consistency of the active
//! environment prefix.

pub mod checksum;
pub mod dirs;
pub mod env;
pub mod error;
pub mod run;

pub use checksum::{Check, CheckSpec};
pub use dirs::{check_dirs, check_dirs_file};
pub use env::{EnvProbe, EnvSnapshot};
pub use error::{Error, Result};
pub use run::ValidationRun;
