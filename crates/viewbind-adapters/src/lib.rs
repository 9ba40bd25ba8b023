//! Infrastructure adapters for viewbind.
//!
//! This crate implements the ports defined in
//! `viewbind_core::application::ports`: filesystem listing for the directory
//! scan and the extension-keyed registry of template file factories.

pub mod factories;
pub mod filesystem;

// Re-export commonly used adapters
pub use factories::{ExtensionFactories, PageTemplateFactory, TextTemplateFactory};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
