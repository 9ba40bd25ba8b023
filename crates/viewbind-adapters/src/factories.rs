//! Template file factories and their extension-keyed registry.
//!
//! The directory scan maps file extensions to template constructors through
//! the [`TemplateFactoryLookup`] port. [`ExtensionFactories`] is the default
//! implementation: a case-insensitive extension map that hosting frameworks
//! extend with their own template languages. "Extension not registered" is a
//! defined outcome — the scan warns and skips the file.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use viewbind_core::application::ports::{TemplateFactoryLookup, TemplateFileFactory};
use viewbind_core::domain::Template;
use viewbind_core::error::ViewbindResult;

/// Extension-keyed registry of template file factories.
pub struct ExtensionFactories {
    map: HashMap<String, Box<dyn TemplateFileFactory>>,
}

impl ExtensionFactories {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Create a registry with the built-in factories (`pt`, `txt`).
    pub fn with_builtin() -> Self {
        let mut factories = Self::new();
        factories.register("pt", Box::new(PageTemplateFactory));
        factories.register("txt", Box::new(TextTemplateFactory));
        factories
    }

    /// Register a factory for an extension. Extensions are matched
    /// case-insensitively; re-registering replaces the previous factory.
    pub fn register(&mut self, extension: &str, factory: Box<dyn TemplateFileFactory>) {
        debug!(extension, "template file factory registered");
        self.map.insert(extension.to_lowercase(), factory);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for ExtensionFactories {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl TemplateFactoryLookup for ExtensionFactories {
    fn by_extension(&self, extension: &str) -> Option<&dyn TemplateFileFactory> {
        self.map
            .get(&extension.to_lowercase())
            .map(Box::as_ref)
    }
}

/// Constructs page templates from `.pt` files.
#[derive(Debug, Clone, Copy)]
pub struct PageTemplateFactory;

impl TemplateFileFactory for PageTemplateFactory {
    fn create(&self, filename: &str, dir: &Path) -> ViewbindResult<Template> {
        Ok(template_from_file(filename, dir))
    }
}

/// Constructs plain-text templates from `.txt` files.
#[derive(Debug, Clone, Copy)]
pub struct TextTemplateFactory;

impl TemplateFileFactory for TextTemplateFactory {
    fn create(&self, filename: &str, dir: &Path) -> ViewbindResult<Template> {
        Ok(template_from_file(filename, dir))
    }
}

/// A file-backed template named after the file stem. The registry
/// re-annotates identity on insertion; this just produces a sensible
/// default.
fn template_from_file(filename: &str, dir: &Path) -> Template {
    let name = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    Template::file(name, dir.join(filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn builtin_registry_knows_pt_and_txt() {
        let factories = ExtensionFactories::with_builtin();
        assert!(factories.by_extension("pt").is_some());
        assert!(factories.by_extension("txt").is_some());
        assert!(factories.by_extension("bak").is_none());
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        let factories = ExtensionFactories::with_builtin();
        assert!(factories.by_extension("PT").is_some());

        let mut custom = ExtensionFactories::new();
        custom.register("HTML", Box::new(PageTemplateFactory));
        assert!(custom.by_extension("html").is_some());
    }

    #[test]
    fn page_factory_builds_a_file_template_named_after_the_stem() {
        let t = PageTemplateFactory
            .create("food.pt", Path::new("/tpl"))
            .unwrap();
        assert_eq!(t.name(), "food");
        assert_eq!(t.path(), Some(PathBuf::from("/tpl/food.pt").as_path()));
        assert!(!t.is_inline());
    }
}
