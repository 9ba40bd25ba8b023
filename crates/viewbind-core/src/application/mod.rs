//! Application layer for viewbind.
//!
//! This layer contains:
//! - **Services**: the [`BindingPass`] orchestrator driving one
//!   configuration run
//! - **Ports**: trait definitions for external collaborators
//! - **Errors**: orchestration-specific error types
//!
//! Business rules (conflict detection, association bookkeeping) live in
//! `crate::domain`; this layer only coordinates them with the outside world.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{Filesystem, RenderPath, TemplateFactoryLookup, TemplateFileFactory, ViewFactory};
pub use services::BindingPass;
