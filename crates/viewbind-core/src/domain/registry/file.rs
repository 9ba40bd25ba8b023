//! Registry for file-backed templates discovered by the directory scan.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::domain::error::LookupError;
use crate::domain::module_info::ModuleInfo;
use crate::domain::template::Template;

/// File templates, keyed by `(template directory, template name)`.
///
/// Association is tracked per origin *path* rather than per key: two views
/// in different modules may legitimately share one template file through the
/// `template_dir` directive, and associating it once must suffice.
///
/// The scanned-directory set makes directory scans at-most-once per registry
/// lifetime, so templates that were already associated cannot be returned to
/// the unassociated set by a re-scan.
#[derive(Debug, Default)]
pub struct FileTemplateRegistry {
    reg: HashMap<(PathBuf, String), Template>,
    unassociated: HashSet<PathBuf>,
    scanned_dirs: HashSet<PathBuf>,
}

impl FileTemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a template under `(dir, name)` and mark its path unassociated.
    ///
    /// The template is annotated with the registration name and path first,
    /// so registry identity never depends on what a factory put inside it.
    pub(crate) fn insert(
        &mut self,
        dir: &Path,
        name: &str,
        path: &Path,
        mut template: Template,
    ) {
        template.annotate(name, path);
        self.reg
            .insert((dir.to_path_buf(), name.to_owned()), template);
        self.unassociated.insert(path.to_path_buf());
    }

    pub fn contains(&self, module: &ModuleInfo, name: &str) -> bool {
        self.reg
            .contains_key(&(module.template_dir(), name.to_owned()))
    }

    /// Origin path of the template registered under `(dir, name)`, if any.
    pub fn template_path(&self, dir: &Path, name: &str) -> Option<&Path> {
        self.reg
            .get(&(dir.to_path_buf(), name.to_owned()))
            .and_then(Template::path)
    }

    /// Remove a path from the unassociated set. Idempotent; absence is not
    /// an error.
    pub fn associate(&mut self, path: &Path) {
        self.unassociated.remove(path);
    }

    /// Look up a template by the module's template directory, optionally
    /// associating its origin path on success.
    pub fn lookup(
        &mut self,
        module: &ModuleInfo,
        name: &str,
        mark_as_associated: bool,
    ) -> Result<&Template, LookupError> {
        let dir = module.template_dir();
        let key = (dir.clone(), name.to_owned());
        if mark_as_associated {
            let registered_path = self
                .reg
                .get(&key)
                .and_then(|t| t.path().map(Path::to_path_buf));
            if let Some(path) = registered_path {
                self.associate(&path);
            }
        }
        self.reg.get(&key).ok_or_else(|| LookupError::File {
            name: name.to_owned(),
            dir,
        })
    }

    /// Paths registered during this pass that no view ever bound to.
    pub fn unassociated(&self) -> &HashSet<PathBuf> {
        &self.unassociated
    }

    pub fn is_scanned(&self, dir: &Path) -> bool {
        self.scanned_dirs.contains(dir)
    }

    pub fn mark_scanned(&mut self, dir: &Path) {
        self.scanned_dirs.insert(dir.to_path_buf());
    }

    pub fn clear(&mut self) {
        self.reg.clear();
        self.unassociated.clear();
        self.scanned_dirs.clear();
    }
}
