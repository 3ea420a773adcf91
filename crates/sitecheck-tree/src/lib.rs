//! Build-output tree verification for sitecheck.
//!
//! Pairs the files of an expected tree with those of an actually-built tree
//! and checks each pair: HTML files go through the path-aware comparison in
//! [`sitecheck_diff`], everything else must match byte for byte. The first
//! mismatch ends the run.
//!
//! # Key Types
//!
//! - [`FileSource`] -- A tree of files (filesystem or in-memory)
//! - [`VerifyConfig`] -- Tree roots and HTML routing
//! - [`VerifyReport`] -- Counts of files checked in a passing run
//! - [`VerifyError`] -- Size, path, content, or HTML mismatch

pub mod config;
pub mod error;
pub mod source;
pub mod verify;

pub use config::VerifyConfig;
pub use error::{VerifyError, VerifyResult};
pub use source::{DirSource, FileSource, MemorySource};
pub use verify::{verify_trees, VerifyReport};
