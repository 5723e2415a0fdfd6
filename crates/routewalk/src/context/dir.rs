/// Directory-level context
///
/// A directory declares its context through reserved files: `_config`
/// for the path pattern, `_middleware` for handlers applied to the
/// whole subtree, `_error` for the subtree's error handler. Each is
/// probed under the recognized module extensions; an absent file means
/// the default for that slot.

use crate::config::RoutePattern;
use crate::error::MapError;
use crate::handler::{ErrorHandler, RequestHandler};
use crate::module::{ModuleExports, ModuleLoader};
use crate::route::resolve_module_file;
use std::path::Path;

use super::{request_handlers, ErrorExport, MiddlewareExport};

/// Normalized context of one directory.
///
/// Directory middleware is always a flat list (the subtree applies it
/// to every verb), and the directory error handler is a single
/// handler; per-verb maps are file-level shapes and resolve to the
/// empty default here.
#[derive(Debug, Clone, Default)]
pub struct DirContext {
    /// Single-form pattern from `_config`, if any.
    pub pattern: Option<RoutePattern>,
    pub middlewares: Vec<RequestHandler>,
    pub error: Option<ErrorHandler>,
}

/// Loads and normalizes a directory's declaration files.
///
/// Loader failures are fatal: a declaration file that exists but does
/// not load aborts the mapping pass.
pub fn extract_dir_context<L: ModuleLoader + ?Sized>(
    dir: &Path,
    loader: &L,
) -> Result<DirContext, MapError> {
    let config = load_declaration(dir, "_config", loader)?;
    let middleware = load_declaration(dir, "_middleware", loader)?;
    let error = load_declaration(dir, "_error", loader)?;

    let pattern = config
        .as_ref()
        .and_then(|module| module.config())
        .and_then(|config| config.dir_pattern())
        .cloned();

    let middlewares = match middleware.as_ref().and_then(ModuleExports::middlewares) {
        None => Vec::new(),
        Some(MiddlewareExport::One(value)) => request_handlers(std::slice::from_ref(value)),
        Some(MiddlewareExport::Many(values)) => request_handlers(values),
        Some(MiddlewareExport::PerMethod(_)) => {
            tracing::warn!(dir = %dir.display(), "ignoring per-verb middleware map on a directory");
            Vec::new()
        }
    };

    let error = error
        .as_ref()
        .and_then(|module| module.error())
        .and_then(|export| match export {
            ErrorExport::One(value) => value.as_error_handler().cloned(),
            ErrorExport::PerMethod(_) => {
                tracing::warn!(dir = %dir.display(), "ignoring per-verb error map on a directory");
                None
            }
        });

    Ok(DirContext {
        pattern,
        middlewares,
        error,
    })
}

/// Probes for a declaration file and loads it when present.
fn load_declaration<L: ModuleLoader + ?Sized>(
    dir: &Path,
    stem: &str,
    loader: &L,
) -> Result<Option<ModuleExports>, MapError> {
    match resolve_module_file(dir, stem) {
        None => Ok(None),
        Some(path) => loader
            .load(&path)
            .map(Some)
            .map_err(|source| MapError::ModuleLoad { path, source }),
    }
}
