//! Unified error handling for viewbind-core.
//!
//! [`ViewbindError`] wraps the fatal failure families: configuration
//! conflicts from the domain and orchestration failures from the
//! application layer. Lookup misses stay out of it on purpose — they are an
//! internal fallback signal ([`LookupError`]) that is always either resolved
//! or converted into a [`ConflictError`] before anything surfaces.
//!
//! [`LookupError`]: crate::domain::LookupError
//! [`ConflictError`]: crate::domain::ConflictError

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::ConflictError;

/// Root error type: anything that aborts a configuration pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewbindError {
    /// A configuration conflict. The application must not start.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// An orchestration failure (I/O during the scan).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

/// Convenient result type alias.
pub type ViewbindResult<T> = Result<T, ViewbindError>;

impl ViewbindError {
    /// The underlying conflict, when this error is one. Handy for hosts that
    /// report conflicts differently from I/O failures.
    pub fn as_conflict(&self) -> Option<&ConflictError> {
        match self {
            Self::Conflict(e) => Some(e),
            Self::Application(_) => None,
        }
    }
}
