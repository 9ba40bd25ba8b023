//! Source module identity and resource resolution.
//!
//! A [`ModuleInfo`] is handed to us by the hosting framework's module walker;
//! the core only ever reads from it. It carries everything the registries
//! need to key and locate templates: the dotted module name, the path of the
//! module source on disk, whether the module is a package, and the optional
//! `template_dir` directive declared in the module itself.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Identity of one source module in a configuration pass.
///
/// ## Template directory convention
///
/// A module `app.views` living at `app/views.py-equivalent` may have a
/// sibling directory `views_templates/` holding one file per template. The
/// directory name can be overridden per module with the `template_dir`
/// directive; packages never have a template directory of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleInfo {
    /// Fully qualified dotted name (e.g. `"app.views"`).
    dotted_name: String,

    /// Filesystem path of the module source file, or of the package
    /// directory when `is_package` is true.
    path: PathBuf,

    /// Packages have no per-module template directory.
    is_package: bool,

    /// Per-module `template_dir` directive override, if declared.
    template_dir_name: Option<String>,
}

impl ModuleInfo {
    /// Describe a plain (non-package) module.
    pub fn module(dotted_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            dotted_name: dotted_name.into(),
            path: path.into(),
            is_package: false,
            template_dir_name: None,
        }
    }

    /// Describe a package. `path` is the package directory itself.
    pub fn package(dotted_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            dotted_name: dotted_name.into(),
            path: path.into(),
            is_package: true,
            template_dir_name: None,
        }
    }

    /// Attach a `template_dir` directive override.
    pub fn with_template_dir(mut self, dir_name: impl Into<String>) -> Self {
        self.template_dir_name = Some(dir_name.into());
        self
    }

    pub fn dotted_name(&self) -> &str {
        &self.dotted_name
    }

    /// Last segment of the dotted name (`"app.views"` → `"views"`).
    pub fn name(&self) -> &str {
        self.dotted_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.dotted_name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_package(&self) -> bool {
        self.is_package
    }

    pub fn template_dir_name(&self) -> Option<&str> {
        self.template_dir_name.as_deref()
    }

    /// Resolve a resource name relative to the module's resource root.
    ///
    /// For a plain module the root is the directory containing the source
    /// file; for a package it is the package directory itself.
    pub fn resource_path(&self, name: &str) -> PathBuf {
        if self.is_package {
            self.path.join(name)
        } else {
            self.path
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(name)
        }
    }

    /// The template directory for this module: the `template_dir` directive
    /// if declared, otherwise the `<module-name>_templates` convention.
    pub fn template_dir(&self) -> PathBuf {
        match &self.template_dir_name {
            Some(dir_name) => self.resource_path(dir_name),
            None => self.resource_path(&format!("{}_templates", self.name())),
        }
    }
}
