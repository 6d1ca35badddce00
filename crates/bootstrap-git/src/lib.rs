//! Git materialization for Project Bootstrap
//!
//! Clones externally hosted repositories and pins each clone to the
//! commit recorded in the repos manifest.

pub mod error;
pub mod manifest;
pub mod pin;

pub use error::{Error, Result};
pub use manifest::{clone_all, load_manifest};
pub use pin::PinnedRepo;
