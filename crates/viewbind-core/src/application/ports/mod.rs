//! Application ports (traits) for external collaborators.
//!
//! In hexagonal terms these are the interfaces the binding pass needs from
//! the outside world. `viewbind-adapters` implements the driven side
//! ([`Filesystem`], [`TemplateFactoryLookup`]); the hosting framework
//! implements [`ViewFactory`] on its view classes.

use std::path::{Path, PathBuf};

use crate::domain::Template;
use crate::error::ViewbindResult;

/// Port for the filesystem reads a directory scan needs.
///
/// Implemented by:
/// - `viewbind_adapters::filesystem::LocalFilesystem` (production)
/// - `viewbind_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Every entry directly inside `path` (no recursion), as full paths.
    fn list_dir(&self, path: &Path) -> ViewbindResult<Vec<PathBuf>>;
}

/// Constructor for one kind of template file.
///
/// One factory per file extension; the scan resolves the factory through
/// [`TemplateFactoryLookup`] and never inspects file content itself.
pub trait TemplateFileFactory: Send + Sync {
    /// Construct a template from a file named `filename` inside `dir`.
    fn create(&self, filename: &str, dir: &Path) -> ViewbindResult<Template>;
}

/// Registry of template-file factories, keyed by lowercased file extension.
///
/// The core's only contract with it: query by extension and treat `None` as
/// "unsupported extension" — the scan warns and skips the file, which keeps
/// template directories tolerant of editor artifacts.
pub trait TemplateFactoryLookup: Send + Sync {
    fn by_extension(&self, extension: &str) -> Option<&dyn TemplateFileFactory>;
}

/// How a view class can produce output, as far as template binding cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPath {
    /// No `render` method; the view needs a template.
    None,
    /// An explicit `render` method; mutually exclusive with a template.
    Method,
    /// Form-style rendering: forms carry a `render` method by construction
    /// and are allowed a template as well, or neither.
    Form,
}

/// The view-factory protocol: a view class being finalized as servable.
///
/// The binding pass reads the class name and the declared template-name
/// directive, and on a successful lookup writes the template back through
/// [`set_template`] before invoking [`on_template_bound`] exactly once.
///
/// [`set_template`]: ViewFactory::set_template
/// [`on_template_bound`]: ViewFactory::on_template_bound
pub trait ViewFactory {
    /// The view class name (e.g. `"Food"`). Its lowercased form is the
    /// default template name.
    fn name(&self) -> &str;

    /// The per-factory `template` directive override, if declared.
    fn template_name(&self) -> Option<&str>;

    /// The view's render capability.
    fn render_path(&self) -> RenderPath;

    /// Receive the resolved template. Written at most once per pass.
    fn set_template(&mut self, template: Template);

    /// Factory-initialization hook, invoked once after a template is bound.
    fn on_template_bound(&mut self) {}
}
