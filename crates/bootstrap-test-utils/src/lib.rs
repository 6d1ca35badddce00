//! Shared test utilities for the project-bootstrap workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`] - local git repository fixtures to clone from in tests

pub mod git;
