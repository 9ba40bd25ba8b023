//! The template domain object.
//!
//! A [`Template`] is an opaque renderable unit. The core never interprets
//! template content; it only tracks identity (name plus origin) so the
//! registries can detect conflicts and associate each template with exactly
//! one view class. Rendering is the business of the template engine that the
//! hosting framework plugs in through the factory ports.

use std::path::{Path, PathBuf};

/// One registrable template.
///
/// Two variants exist, distinguished by [`TemplateSource`]:
///
/// - *inline*: constructed directly in source code, carries its body but no
///   filesystem path;
/// - *file-backed*: produced by a [`TemplateFileFactory`] from a file inside
///   a module's template directory, carries its origin path.
///
/// The origin path of a file-backed template is what the file registry
/// compares to tell a harmless re-registration apart from two differently
/// extensioned files claiming the same logical name.
///
/// [`TemplateFileFactory`]: crate::application::ports::TemplateFileFactory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    source: TemplateSource,
}

/// Where a template came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Defined inline in module source; owns its body.
    Inline { body: String },

    /// Loaded from a file in a template directory.
    File { path: PathBuf },
}

impl Template {
    /// Create an inline template.
    pub fn inline(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: TemplateSource::Inline { body: body.into() },
        }
    }

    /// Create a file-backed template.
    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: TemplateSource::File { path: path.into() },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Origin path for file-backed templates, `None` for inline ones.
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            TemplateSource::File { path } => Some(path),
            TemplateSource::Inline { .. } => None,
        }
    }

    /// Body text for inline templates, `None` for file-backed ones.
    pub fn body(&self) -> Option<&str> {
        match &self.source {
            TemplateSource::Inline { body } => Some(body),
            TemplateSource::File { .. } => None,
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self.source, TemplateSource::Inline { .. })
    }

    /// Normalize identity at registration time: whatever a factory returned,
    /// the stored template carries the registration name and origin path.
    pub(crate) fn annotate(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.name = name.into();
        self.source = TemplateSource::File { path: path.into() };
    }
}
