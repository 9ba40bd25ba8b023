//! Registry for templates constructed directly in module source.

use std::collections::{HashMap, HashSet};

use crate::domain::error::LookupError;
use crate::domain::module_info::ModuleInfo;
use crate::domain::template::Template;

/// Inline templates, keyed by `(module dotted name, template name)`.
///
/// Cross-registry conflict checking against file templates happens one level
/// up, in [`TemplateRegistry`]; this type only owns the inline side of the
/// bookkeeping.
///
/// [`TemplateRegistry`]: crate::domain::registry::TemplateRegistry
#[derive(Debug, Default)]
pub struct InlineTemplateRegistry {
    reg: HashMap<(String, String), Template>,
    unassociated: HashSet<(String, String)>,
}

impl InlineTemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a template and mark it unassociated.
    ///
    /// Registering twice under the same key overwrites: last writer wins.
    /// The file registry rejects such duplicates; the inline side never has,
    /// and the asymmetry is kept.
    pub(crate) fn insert(&mut self, module: &ModuleInfo, name: &str, template: Template) {
        let key = (module.dotted_name().to_owned(), name.to_owned());
        self.reg.insert(key.clone(), template);
        self.unassociated.insert(key);
    }

    pub fn contains(&self, module: &ModuleInfo, name: &str) -> bool {
        self.reg
            .contains_key(&(module.dotted_name().to_owned(), name.to_owned()))
    }

    /// Remove from the unassociated set. Idempotent: two views in the same
    /// module may share one inline template, so absence is not an error.
    pub fn associate(&mut self, module: &ModuleInfo, name: &str) {
        self.unassociated
            .remove(&(module.dotted_name().to_owned(), name.to_owned()));
    }

    /// Look up a template, optionally associating it as a side effect of a
    /// successful lookup.
    pub fn lookup(
        &mut self,
        module: &ModuleInfo,
        name: &str,
        mark_as_associated: bool,
    ) -> Result<&Template, LookupError> {
        let key = (module.dotted_name().to_owned(), name.to_owned());
        if mark_as_associated && self.reg.contains_key(&key) {
            self.unassociated.remove(&key);
        }
        self.reg.get(&key).ok_or_else(|| LookupError::Inline {
            name: name.to_owned(),
            module: module.dotted_name().to_owned(),
        })
    }

    /// Current `(module, name)` pairs that were registered but never bound
    /// to a view.
    pub fn unassociated(&self) -> &HashSet<(String, String)> {
        &self.unassociated
    }

    pub fn clear(&mut self) {
        self.reg.clear();
        self.unassociated.clear();
    }
}
