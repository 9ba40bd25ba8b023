//! Domain errors: fatal configuration conflicts and the internal lookup miss.
//!
//! Two very different failure families live here:
//!
//! - [`ConflictError`] — a broken configuration. These abort the whole pass;
//!   the application refuses to start with an ambiguous or contradictory
//!   template setup.
//! - [`LookupError`] — "template not found". This is a control signal used
//!   to drive fallback between the file and inline registries and between
//!   override and default naming. It is always either resolved or converted
//!   into a [`ConflictError`]; it never reaches the end user as-is.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal configuration conflicts detected during a binding pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConflictError {
    /// An inline template and a file template claim the same name within one
    /// module. Raised on whichever registration comes second.
    #[error(
        "conflicting templates for name '{name}': the inline template in module '{module}' \
         conflicts with the file template in directory '{dir}'"
    )]
    InlineFileClash {
        name: String,
        module: String,
        dir: PathBuf,
    },

    /// Two files in one template directory share a base name but differ in
    /// extension, so the logical name resolves to more than one file.
    #[error(
        "conflicting templates for name '{name}' in directory '{dir}': \
         '{existing}' and '{conflicting}' claim the same name with different extensions"
    )]
    DuplicateExtension {
        name: String,
        dir: PathBuf,
        existing: PathBuf,
        conflicting: PathBuf,
    },

    /// A view declares a template-name override, but a template under the
    /// view's default (lowercased) name exists as well.
    #[error(
        "multiple possible templates for {kind} '{view}': it declares template '{declared}', \
         but there is also a template named '{implicit}'"
    )]
    AmbiguousTemplateName {
        kind: String,
        view: String,
        declared: String,
        implicit: String,
    },

    /// A view has both a `render` method and an associated template.
    #[error(
        "multiple possible ways to render {kind} '{view}': it has both a 'render' method \
         and an associated template"
    )]
    MultipleRenderPaths { kind: String, view: String },

    /// A view has neither a template nor a `render` method.
    #[error("{kind} '{view}' has no associated template or 'render' method")]
    NoRenderPath { kind: String, view: String },
}

/// A template could not be found in one registry.
///
/// Recoverable by design: callers fall back to the other registry or to a
/// different candidate name. When both registries miss, the unified lookup
/// reports the *file* registry's miss and discards the inline one, so the
/// message that eventually surfaces always points at the template directory.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("template '{name}' in '{dir}' cannot be found")]
    File { name: String, dir: PathBuf },

    #[error("inline template '{name}' in '{module}' cannot be found")]
    Inline { name: String, module: String },
}
