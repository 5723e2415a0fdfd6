/// File-level context
///
/// Interprets a loaded route module's `config`, `middlewares`, and
/// `error` exports. Pure: the module was already loaded by the time
/// this runs, so nothing here can fail.

use crate::config::RouteConfig;
use crate::module::ModuleExports;

use super::{ErrorHandlerSet, MiddlewareSet};

/// Normalized context of one route file.
#[derive(Debug, Clone, Default)]
pub struct FileContext {
    pub config: RouteConfig,
    pub middlewares: MiddlewareSet,
    pub error: ErrorHandlerSet,
}

/// Normalizes a route module's context exports.
pub fn extract_file_context(module: &ModuleExports) -> FileContext {
    FileContext {
        config: module.config().cloned().unwrap_or_default(),
        middlewares: MiddlewareSet::normalize(module.middlewares()),
        error: ErrorHandlerSet::normalize(module.error()),
    }
}
