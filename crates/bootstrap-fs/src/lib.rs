//! Filesystem toolkit for Project Bootstrap
//!
//! Provides normalized path handling, format-agnostic document loading,
//! MD5 digests and relative symlink creation for the bootstrap crates.

pub mod digest;
pub mod document;
pub mod error;
pub mod io;
pub mod link;
pub mod path;

pub use document::DocumentStore;
pub use error::{Error, Result};
pub use link::link_relative;
pub use path::NormalizedPath;
