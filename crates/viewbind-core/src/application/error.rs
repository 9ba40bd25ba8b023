//! Application layer errors.
//!
//! These represent orchestration failures — I/O going wrong while driving
//! the registries. Business rule violations are `ConflictError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while orchestrating a binding pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A template directory existed but could not be listed. Directory
    /// listing is the only I/O in a pass and is not retried.
    #[error("failed to list template directory '{dir}': {reason}")]
    DirectoryList { dir: PathBuf, reason: String },
}
