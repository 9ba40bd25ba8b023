//! Core domain layer for viewbind.
//!
//! Pure business logic: template identity, the two registries and their
//! conflict/association bookkeeping, and the errors they raise. No I/O —
//! filesystem listing and template construction reach the domain through
//! the ports defined in the application layer.

pub mod error;
pub mod module_info;
pub mod registry;
pub mod template;

// Re-exports for convenience
pub use error::{ConflictError, LookupError};
pub use module_info::ModuleInfo;
pub use registry::{
    FileTemplateRegistry, InlineTemplateRegistry, TemplateRegistry, UnassociatedReport,
};
pub use template::{Template, TemplateSource};
