//! Template registries and the registry context.
//!
//! [`TemplateRegistry`] owns one [`InlineTemplateRegistry`] and one
//! [`FileTemplateRegistry`] and hosts everything that needs to see both
//! sides at once: cross-registry conflict checks, the unified lookup with
//! its fixed file-then-inline ordering, and the end-of-pass consistency
//! check. The context is constructed explicitly and passed around — its
//! lifetime is one configuration run, with [`TemplateRegistry::reset`] as
//! the test-isolation hook.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the
//! responsibility of the application layer, not the domain; advisory
//! warnings are emitted by the binding pass from the report returned here.

mod file;
mod inline;

pub use file::FileTemplateRegistry;
pub use inline::InlineTemplateRegistry;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::error::{ConflictError, LookupError};
use crate::domain::module_info::ModuleInfo;
use crate::domain::template::Template;

/// Both registries of one configuration run.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    inline: InlineTemplateRegistry,
    files: FileTemplateRegistry,
}

/// Templates that were registered but never bound to a view, collected at
/// the end of a pass. Advisory: reported, never fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnassociatedReport {
    /// `(module dotted name, template name)` pairs, sorted.
    pub inline: Vec<(String, String)>,
    /// Origin paths of orphaned file templates, sorted.
    pub files: Vec<PathBuf>,
}

impl UnassociatedReport {
    pub fn is_empty(&self) -> bool {
        self.inline.is_empty() && self.files.is_empty()
    }
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inline(&self) -> &InlineTemplateRegistry {
        &self.inline
    }

    pub fn inline_mut(&mut self) -> &mut InlineTemplateRegistry {
        &mut self.inline
    }

    pub fn files(&self) -> &FileTemplateRegistry {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut FileTemplateRegistry {
        &mut self.files
    }

    /// Register a template constructed inline in module source.
    ///
    /// # Errors
    ///
    /// [`ConflictError::InlineFileClash`] if the module's template directory
    /// already provides a file template of the same name.
    pub fn register_inline_template(
        &mut self,
        module: &ModuleInfo,
        name: &str,
        template: Template,
    ) -> Result<(), ConflictError> {
        if self.files.contains(module, name) {
            return Err(ConflictError::InlineFileClash {
                name: name.to_owned(),
                module: module.dotted_name().to_owned(),
                dir: module.template_dir(),
            });
        }
        self.inline.insert(module, name, template);
        Ok(())
    }

    /// Conflict checks for a candidate template file, run before any factory
    /// is consulted so clashes are caught even for extensions nobody can
    /// construct.
    ///
    /// # Errors
    ///
    /// - [`ConflictError::DuplicateExtension`] if `(dir, name)` is already
    ///   registered at a different path. A literally-equal path passes: the
    ///   file is simply re-registered.
    /// - [`ConflictError::InlineFileClash`] if the module defines an inline
    ///   template of the same name.
    pub fn check_file_candidate(
        &self,
        module: &ModuleInfo,
        dir: &Path,
        name: &str,
        path: &Path,
    ) -> Result<(), ConflictError> {
        if let Some(existing) = self.files.template_path(dir, name) {
            if existing != path {
                return Err(ConflictError::DuplicateExtension {
                    name: name.to_owned(),
                    dir: dir.to_path_buf(),
                    existing: existing.to_path_buf(),
                    conflicting: path.to_path_buf(),
                });
            }
        }
        if self.inline.contains(module, name) {
            return Err(ConflictError::InlineFileClash {
                name: name.to_owned(),
                module: module.dotted_name().to_owned(),
                dir: dir.to_path_buf(),
            });
        }
        Ok(())
    }

    /// Store a file template that passed [`check_file_candidate`].
    ///
    /// [`check_file_candidate`]: TemplateRegistry::check_file_candidate
    pub fn insert_file_template(
        &mut self,
        dir: &Path,
        name: &str,
        path: &Path,
        template: Template,
    ) {
        self.files.insert(dir, name, path, template);
    }

    /// Unified lookup: the file registry first, then the inline registry.
    ///
    /// When both registries miss, the error is the *file* registry's miss;
    /// the inline miss is discarded. Callers see a message pointing at the
    /// template directory, which is where a missing template almost always
    /// belongs.
    pub fn lookup(
        &mut self,
        module: &ModuleInfo,
        name: &str,
        mark_as_associated: bool,
    ) -> Result<&Template, LookupError> {
        if self.files.contains(module, name) {
            return self.files.lookup(module, name, mark_as_associated);
        }
        if self.inline.contains(module, name) {
            return self.inline.lookup(module, name, mark_as_associated);
        }
        Err(LookupError::File {
            name: name.to_owned(),
            dir: module.template_dir(),
        })
    }

    /// End-of-pass consistency check: collect every template that was
    /// registered but never associated with a view, as a sorted,
    /// serializable report. Pure data; the binding pass turns it into
    /// advisory warnings.
    pub fn check_unassociated(&self) -> UnassociatedReport {
        let mut inline: Vec<(String, String)> =
            self.inline.unassociated().iter().cloned().collect();
        inline.sort();
        let mut files: Vec<PathBuf> = self.files.unassociated().iter().cloned().collect();
        files.sort();
        UnassociatedReport { inline, files }
    }

    /// Drop all registry state. Intended for test harnesses; a production
    /// pass builds a fresh context instead.
    pub fn reset(&mut self) {
        self.inline.clear();
        self.files.clear();
    }
}
