//! viewbind-core — template discovery and view binding.
//!
//! Given a set of source modules, locate template files (or inline template
//! objects), associate each with exactly one view class, detect conflicting
//! configurations, and report orphaned templates at the end of a pass.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      hosting framework configurer       │
//! │  (walks modules, finalizes view classes) │
//! └──────────────────┬──────────────────────┘
//!                    │ drives
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        BindingPass (application)        │
//! │  register_directory / bind_view / ...   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses ports
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │  Filesystem · TemplateFactoryLookup ·   │
//! │  ViewFactory   (traits)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   viewbind-adapters / host framework    │
//! └─────────────────────────────────────────┘
//!
//!        Domain layer (pure logic):
//!   TemplateRegistry · Template · ModuleInfo
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use viewbind_core::prelude::*;
//! # fn adapters() -> (Box<dyn Filesystem>, Box<dyn TemplateFactoryLookup>) { unimplemented!() }
//!
//! let (filesystem, factories) = adapters();
//! let mut pass = BindingPass::new(filesystem, factories);
//!
//! let module = ModuleInfo::module("app.views", "/src/app/views.rs");
//! pass.register_directory(&module).unwrap();
//! // ... register inline templates, bind view classes ...
//! let report = pass.check_unassociated();
//! assert!(report.is_empty());
//! ```

// Domain layer (pure business logic)
pub mod domain;

// Application layer (orchestration and ports)
pub mod application;

// Root error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BindingPass,
        ports::{Filesystem, RenderPath, TemplateFactoryLookup, TemplateFileFactory, ViewFactory},
    };
    pub use crate::domain::{
        ConflictError, LookupError, ModuleInfo, Template, TemplateRegistry, TemplateSource,
        UnassociatedReport,
    };
    pub use crate::error::{ViewbindError, ViewbindResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
