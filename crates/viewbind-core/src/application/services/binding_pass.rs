//! The binding pass: one configuration run over a set of modules.
//!
//! A [`BindingPass`] owns the registry context and the driven ports and
//! exposes the operations a framework's configurer invokes while walking
//! modules:
//!
//! 1. [`register_directory`] for every module — populates the file registry
//!    from the module's convention-based template directory.
//! 2. [`register_inline_template`] for every template object found in module
//!    source.
//! 3. [`bind_view`] for every view class being finalized — resolves and
//!    associates its template, or verifies the view can render itself.
//! 4. [`check_unassociated`] once at the end — reports orphaned templates.
//!
//! [`register_directory`]: BindingPass::register_directory
//! [`register_inline_template`]: BindingPass::register_inline_template
//! [`bind_view`]: BindingPass::bind_view
//! [`check_unassociated`]: BindingPass::check_unassociated

use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::application::ports::{Filesystem, RenderPath, TemplateFactoryLookup, ViewFactory};
use crate::domain::{
    ConflictError, LookupError, ModuleInfo, Template, TemplateRegistry, UnassociatedReport,
};
use crate::error::ViewbindResult;

/// Render-cache artifacts some template engines drop next to their sources.
const CACHE_SUFFIX: &str = ".cache";

/// Orchestrator for one configuration pass.
pub struct BindingPass {
    registry: TemplateRegistry,
    filesystem: Box<dyn Filesystem>,
    factories: Box<dyn TemplateFactoryLookup>,
}

impl BindingPass {
    /// Create a pass with the given adapters and an empty registry context.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        factories: Box<dyn TemplateFactoryLookup>,
    ) -> Self {
        Self {
            registry: TemplateRegistry::new(),
            filesystem,
            factories,
        }
    }

    /// Scan the module's template directory into the file registry.
    ///
    /// No-op for packages (they have no per-module template directory), for
    /// directories that do not exist, and for directories already scanned in
    /// this pass — a scan is at-most-once per directory, so templates that
    /// were associated cannot be returned to the unassociated set.
    ///
    /// # Errors
    ///
    /// Conflicts from the per-file checks, or an I/O failure listing the
    /// directory. Neither is retried; both abort the pass.
    #[instrument(skip(self), fields(module = %module.dotted_name()))]
    pub fn register_directory(&mut self, module: &ModuleInfo) -> ViewbindResult<()> {
        if module.is_package() {
            return Ok(());
        }

        let dir = module.template_dir();
        if !self.filesystem.is_dir(&dir) {
            return Ok(());
        }
        if self.registry.files().is_scanned(&dir) {
            debug!(dir = %dir.display(), "template directory already scanned");
            return Ok(());
        }

        let entries = self.filesystem.list_dir(&dir)?;
        for path in &entries {
            self.register_template_file(module, &dir, path)?;
        }
        self.registry.files_mut().mark_scanned(&dir);
        debug!(dir = %dir.display(), entries = entries.len(), "template directory scanned");
        Ok(())
    }

    /// One entry of a template directory listing.
    fn register_template_file(
        &mut self,
        module: &ModuleInfo,
        dir: &Path,
        path: &Path,
    ) -> ViewbindResult<()> {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            warn!(path = %path.display(), "skipping template file with non-UTF-8 name");
            return Ok(());
        };

        // Hidden files, editor backups, and render-cache artifacts.
        if file_name.starts_with('.') || file_name.ends_with('~') {
            return Ok(());
        }
        if file_name.ends_with(CACHE_SUFFIX) {
            return Ok(());
        }

        let (name, extension) = split_template_name(file_name);

        // Conflict checks come before factory resolution: a clash with an
        // inline template or another extension is an error even when nobody
        // could construct this particular file.
        self.registry
            .check_file_candidate(module, dir, name, path)?;

        let Some(factory) = self.factories.by_extension(&extension.to_lowercase()) else {
            warn!(
                file = %file_name,
                dir = %dir.display(),
                "unrecognized template extension, skipping"
            );
            return Ok(());
        };

        let template = factory.create(file_name, dir)?;
        self.registry.insert_file_template(dir, name, path, template);
        Ok(())
    }

    /// Register a template object constructed in module source.
    pub fn register_inline_template(
        &mut self,
        module: &ModuleInfo,
        name: &str,
        template: Template,
    ) -> ViewbindResult<()> {
        self.registry
            .register_inline_template(module, name, template)?;
        Ok(())
    }

    /// Resolve and bind the template for a view class being finalized.
    ///
    /// The intended template name is the view's declared `template`
    /// directive, falling back to the lowercased class name. `kind` names
    /// the component flavor (e.g. `"view"`) in error messages.
    ///
    /// # Errors
    ///
    /// - [`ConflictError::AmbiguousTemplateName`] when a declared override
    ///   coexists with a template under the default name.
    /// - [`ConflictError::MultipleRenderPaths`] when the view has both a
    ///   `render` method and a matching template (forms are exempt).
    /// - [`ConflictError::NoRenderPath`] when it has neither.
    pub fn bind_view(
        &mut self,
        module: &ModuleInfo,
        view: &mut dyn ViewFactory,
        kind: &str,
    ) -> ViewbindResult<()> {
        let implicit = view.name().to_lowercase();
        let template_name = view
            .template_name()
            .map(str::to_owned)
            .unwrap_or_else(|| implicit.clone());

        if template_name != implicit
            && self.registry.lookup(module, &implicit, false).is_ok()
        {
            return Err(ConflictError::AmbiguousTemplateName {
                kind: kind.to_owned(),
                view: view.name().to_owned(),
                declared: template_name,
                implicit,
            }
            .into());
        }

        match self.registry.lookup(module, &template_name, true) {
            Ok(template) => {
                let template = template.clone();
                if view.render_path() == RenderPath::Method {
                    return Err(ConflictError::MultipleRenderPaths {
                        kind: kind.to_owned(),
                        view: view.name().to_owned(),
                    }
                    .into());
                }
                debug!(view = view.name(), template = %template_name, "template bound");
                view.set_template(template);
                view.on_template_bound();
            }
            Err(_) => {
                if view.render_path() == RenderPath::None {
                    return Err(ConflictError::NoRenderPath {
                        kind: kind.to_owned(),
                        view: view.name().to_owned(),
                    }
                    .into());
                }
                // Render-method-driven view; stays template-less.
            }
        }
        Ok(())
    }

    /// Unified template lookup over both registries.
    pub fn lookup(
        &mut self,
        module: &ModuleInfo,
        name: &str,
        mark_as_associated: bool,
    ) -> Result<&Template, LookupError> {
        self.registry.lookup(module, name, mark_as_associated)
    }

    /// End-of-pass consistency check: report every template that was
    /// registered but never associated with a view.
    ///
    /// Emits one `warn!` per orphaned inline template and a single aggregate
    /// `warn!` for all orphaned file templates, then returns the same data
    /// as a sorted, serializable report. Advisory only; the pass continues.
    pub fn check_unassociated(&self) -> UnassociatedReport {
        let report = self.registry.check_unassociated();
        for (module, name) in &report.inline {
            warn!(
                module = %module,
                template = %name,
                "inline template was never associated with a view class"
            );
        }
        if !report.files.is_empty() {
            warn!(
                count = report.files.len(),
                templates = ?report.files,
                "file templates were never associated with a view class"
            );
        }
        report
    }

    /// Clear all registry state. Test-isolation hook; wire it into the
    /// harness's per-test cleanup.
    pub fn reset(&mut self) {
        self.registry.reset();
    }
}

/// Split a file name into `(template name, extension)`.
///
/// `"food.pt"` → `("food", "pt")`; a final extension only, so
/// `"archive.tar.gz"` → `("archive.tar", "gz")`; no extension yields `""`.
fn split_template_name(file_name: &str) -> (&str, &str) {
    match file_name.rsplit_once('.') {
        Some((name, extension)) if !name.is_empty() => (name, extension),
        _ => (file_name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::TemplateFileFactory;
    use std::collections::{HashMap, HashSet};
    use std::path::PathBuf;

    // ── test doubles ──────────────────────────────────────────────────────

    #[derive(Default)]
    struct FakeFilesystem {
        dirs: HashSet<PathBuf>,
        entries: HashMap<PathBuf, Vec<PathBuf>>,
    }

    impl FakeFilesystem {
        fn with_dir(dir: &str, files: &[&str]) -> Self {
            let dir = PathBuf::from(dir);
            let mut fs = Self::default();
            fs.entries
                .insert(dir.clone(), files.iter().map(|f| dir.join(f)).collect());
            fs.dirs.insert(dir);
            fs
        }
    }

    impl Filesystem for FakeFilesystem {
        fn is_dir(&self, path: &Path) -> bool {
            self.dirs.contains(path)
        }

        fn list_dir(&self, path: &Path) -> ViewbindResult<Vec<PathBuf>> {
            Ok(self.entries.get(path).cloned().unwrap_or_default())
        }
    }

    struct StemFactory;

    impl TemplateFileFactory for StemFactory {
        fn create(&self, filename: &str, dir: &Path) -> ViewbindResult<Template> {
            let (name, _) = split_template_name(filename);
            Ok(Template::file(name, dir.join(filename)))
        }
    }

    struct PtOnly;

    impl TemplateFactoryLookup for PtOnly {
        fn by_extension(&self, extension: &str) -> Option<&dyn TemplateFileFactory> {
            (extension == "pt").then_some(&StemFactory as &dyn TemplateFileFactory)
        }
    }

    struct TestView {
        name: &'static str,
        template_name: Option<&'static str>,
        render_path: RenderPath,
        template: Option<Template>,
        hook_calls: usize,
    }

    impl TestView {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                template_name: None,
                render_path: RenderPath::None,
                template: None,
                hook_calls: 0,
            }
        }
    }

    impl ViewFactory for TestView {
        fn name(&self) -> &str {
            self.name
        }

        fn template_name(&self) -> Option<&str> {
            self.template_name
        }

        fn render_path(&self) -> RenderPath {
            self.render_path
        }

        fn set_template(&mut self, template: Template) {
            self.template = Some(template);
        }

        fn on_template_bound(&mut self) {
            self.hook_calls += 1;
        }
    }

    fn module() -> ModuleInfo {
        ModuleInfo::module("app.m", "/src/app/m.rs")
    }

    fn pass_with(files: &[&str]) -> BindingPass {
        BindingPass::new(
            Box::new(FakeFilesystem::with_dir("/src/app/m_templates", files)),
            Box::new(PtOnly),
        )
    }

    // ── directory scan ────────────────────────────────────────────────────

    #[test]
    fn packages_and_missing_directories_are_noops() {
        let mut pass = BindingPass::new(Box::new(FakeFilesystem::default()), Box::new(PtOnly));
        pass.register_directory(&ModuleInfo::package("app", "/src/app"))
            .unwrap();
        pass.register_directory(&module()).unwrap();
        assert!(pass.check_unassociated().is_empty());
    }

    #[test]
    fn scan_skips_hidden_backup_and_cache_files() {
        let mut pass = pass_with(&[".hidden.pt", "draft.pt~", "food.pt.cache", "food.pt"]);
        pass.register_directory(&module()).unwrap();

        let report = pass.check_unassociated();
        assert_eq!(report.files.len(), 1);
        assert_eq!(
            report.files[0],
            PathBuf::from("/src/app/m_templates/food.pt")
        );
    }

    #[test]
    fn unknown_extension_warns_and_leaves_no_entry() {
        let mut pass = pass_with(&["notes.bak"]);
        pass.register_directory(&module()).unwrap();
        assert!(pass.check_unassociated().is_empty());
        assert!(pass.lookup(&module(), "notes", false).is_err());
    }

    #[test]
    fn rescan_is_idempotent() {
        let mut pass = pass_with(&["food.pt"]);
        let m = module();
        pass.register_directory(&m).unwrap();
        pass.lookup(&m, "food", true).unwrap();
        assert!(pass.check_unassociated().is_empty());

        // A second scan must not resurrect the unassociated entry.
        pass.register_directory(&m).unwrap();
        assert!(pass.check_unassociated().is_empty());
    }

    #[test]
    fn inline_clash_is_detected_even_without_a_factory() {
        // `.bak` has no factory, but the name still clashes with the inline
        // template, and the clash wins over the unsupported-extension skip.
        let mut pass = pass_with(&["cave.bak"]);
        let m = module();
        pass.register_inline_template(&m, "cave", Template::inline("cave", "x"))
            .unwrap();

        let err = pass.register_directory(&m).unwrap_err();
        assert!(matches!(
            err.as_conflict(),
            Some(ConflictError::InlineFileClash { .. })
        ));
    }

    // ── view binding ──────────────────────────────────────────────────────

    #[test]
    fn binds_template_by_lowercased_view_name_and_fires_hook() {
        let mut pass = pass_with(&["food.pt"]);
        let m = module();
        pass.register_directory(&m).unwrap();

        let mut view = TestView::new("Food");
        pass.bind_view(&m, &mut view, "view").unwrap();

        let bound = view.template.expect("template should be bound");
        assert_eq!(bound.name(), "food");
        assert_eq!(view.hook_calls, 1);
        assert!(pass.check_unassociated().is_empty());
    }

    #[test]
    fn declared_template_name_overrides_the_default() {
        let mut pass = pass_with(&["fancy.pt"]);
        let m = module();
        pass.register_directory(&m).unwrap();

        let mut view = TestView::new("Food");
        view.template_name = Some("fancy");
        pass.bind_view(&m, &mut view, "view").unwrap();
        assert_eq!(view.template.unwrap().name(), "fancy");
    }

    #[test]
    fn override_plus_default_named_template_is_ambiguous() {
        let mut pass = pass_with(&["fancy.pt", "food.pt"]);
        let m = module();
        pass.register_directory(&m).unwrap();

        let mut view = TestView::new("Food");
        view.template_name = Some("fancy");
        let err = pass.bind_view(&m, &mut view, "view").unwrap_err();
        assert!(matches!(
            err.as_conflict(),
            Some(ConflictError::AmbiguousTemplateName { declared, implicit, .. })
                if declared == "fancy" && implicit == "food"
        ));
    }

    #[test]
    fn render_method_plus_template_is_rejected() {
        let mut pass = pass_with(&["cavepainting.pt"]);
        let m = module();
        pass.register_directory(&m).unwrap();

        let mut view = TestView::new("CavePainting");
        view.render_path = RenderPath::Method;
        let err = pass.bind_view(&m, &mut view, "view").unwrap_err();
        assert!(matches!(
            err.as_conflict(),
            Some(ConflictError::MultipleRenderPaths { .. })
        ));
        // The lookup associated the template before the conflict was raised.
        assert!(pass.check_unassociated().is_empty());
    }

    #[test]
    fn view_without_template_or_render_method_is_rejected() {
        let mut pass = pass_with(&[]);
        let m = module();

        let mut view = TestView::new("Orphan");
        let err = pass.bind_view(&m, &mut view, "view").unwrap_err();
        assert!(matches!(
            err.as_conflict(),
            Some(ConflictError::NoRenderPath { .. })
        ));
    }

    #[test]
    fn render_method_without_template_is_fine() {
        let mut pass = pass_with(&[]);
        let m = module();

        let mut view = TestView::new("Painter");
        view.render_path = RenderPath::Method;
        pass.bind_view(&m, &mut view, "view").unwrap();
        assert!(view.template.is_none());
        assert_eq!(view.hook_calls, 0);
    }

    #[test]
    fn forms_may_carry_render_and_template_or_neither() {
        let m = module();

        let mut pass = pass_with(&["editform.pt"]);
        pass.register_directory(&m).unwrap();
        let mut with_template = TestView::new("EditForm");
        with_template.render_path = RenderPath::Form;
        pass.bind_view(&m, &mut with_template, "form").unwrap();
        assert!(with_template.template.is_some());

        let mut pass = pass_with(&[]);
        let mut bare = TestView::new("EditForm");
        bare.render_path = RenderPath::Form;
        pass.bind_view(&m, &mut bare, "form").unwrap();
        assert!(bare.template.is_none());
    }

    #[test]
    fn check_unassociated_reports_orphans_from_both_registries() {
        let mut pass = pass_with(&["orphan.pt", "food.pt"]);
        let m = module();
        pass.register_directory(&m).unwrap();
        pass.register_inline_template(&m, "zeta", Template::inline("zeta", "x"))
            .unwrap();
        pass.register_inline_template(&m, "alpha", Template::inline("alpha", "x"))
            .unwrap();

        let mut food = TestView::new("Food");
        pass.bind_view(&m, &mut food, "view").unwrap();

        let report = pass.check_unassociated();
        assert_eq!(
            report.inline,
            vec![
                ("app.m".to_string(), "alpha".to_string()),
                ("app.m".to_string(), "zeta".to_string()),
            ]
        );
        assert_eq!(
            report.files,
            vec![PathBuf::from("/src/app/m_templates/orphan.pt")]
        );
    }

    #[test]
    fn binding_resolves_inline_templates_too() {
        let mut pass = pass_with(&[]);
        let m = module();
        pass.register_inline_template(&m, "club", Template::inline("club", "<h1/>"))
            .unwrap();

        let mut view = TestView::new("Club");
        pass.bind_view(&m, &mut view, "view").unwrap();
        assert!(view.template.unwrap().is_inline());
        assert!(pass.check_unassociated().is_empty());
    }

    // ── name splitting ────────────────────────────────────────────────────

    #[test]
    fn split_template_name_handles_the_edge_cases() {
        assert_eq!(split_template_name("food.pt"), ("food", "pt"));
        assert_eq!(split_template_name("archive.tar.gz"), ("archive.tar", "gz"));
        assert_eq!(split_template_name("noext"), ("noext", ""));
    }
}
