/// Module loading as an injected capability
///
/// The traversal never resolves modules itself; it asks a
/// [`ModuleLoader`] for the export bag of a path. The shipped loader
/// is a pre-populated registry: applications declare their route
/// modules up front, keyed by the on-disk path of the route file.

use crate::config::RouteConfig;
use crate::context::{ErrorExport, MiddlewareExport};
use crate::handler::Exported;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure reported by a module loader. Always fatal to the mapping
/// pass: a broken route module should stop the server from starting,
/// not silently drop an endpoint.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A route-module file exists on disk but was never registered.
    #[error("no module registered for {0}")]
    Unregistered(PathBuf),
    /// The loader's own failure (the analogue of a syntax/import
    /// error in a dynamic-loading runtime).
    #[error("{0}")]
    Failed(String),
}

/// The exports of one loaded route module.
///
/// Verb handlers live under well-known export names (`_get`, `_post`,
/// ...); `config`, `middlewares`, and `error` are interpreted by the
/// context extractors.
///
/// # Examples
///
/// ```
/// use routewalk::{Exported, ModuleExports, Outcome};
///
/// let module = ModuleExports::builder()
///     .export("_get", Exported::handler("list", |_req, _res| Outcome::Done))
///     .build();
/// assert!(module.export("_get").is_some());
/// assert!(module.export("_post").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModuleExports {
    exports: HashMap<String, Exported>,
    config: Option<RouteConfig>,
    middlewares: Option<MiddlewareExport>,
    error: Option<ErrorExport>,
}

impl ModuleExports {
    pub fn builder() -> ModuleExportsBuilder {
        ModuleExportsBuilder::default()
    }

    /// Looks up an export by its raw name.
    pub fn export(&self, name: &str) -> Option<&Exported> {
        self.exports.get(name)
    }

    pub fn config(&self) -> Option<&RouteConfig> {
        self.config.as_ref()
    }

    pub fn middlewares(&self) -> Option<&MiddlewareExport> {
        self.middlewares.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorExport> {
        self.error.as_ref()
    }
}

/// Builder for [`ModuleExports`].
#[derive(Debug, Default)]
pub struct ModuleExportsBuilder {
    inner: ModuleExports,
}

impl ModuleExportsBuilder {
    /// Declares a named export (typically `_get`, `_post`, ...).
    pub fn export(mut self, name: impl Into<String>, value: Exported) -> Self {
        self.inner.exports.insert(name.into(), value);
        self
    }

    pub fn config(mut self, config: RouteConfig) -> Self {
        self.inner.config = Some(config);
        self
    }

    pub fn middlewares(mut self, middlewares: MiddlewareExport) -> Self {
        self.inner.middlewares = Some(middlewares);
        self
    }

    pub fn error(mut self, error: ErrorExport) -> Self {
        self.inner.error = Some(error);
        self
    }

    pub fn build(self) -> ModuleExports {
        self.inner
    }
}

/// Capability to resolve a path to its module exports.
///
/// Injected into the traversal so the algorithm can be exercised with
/// a fake loader against any directory-listing oracle.
pub trait ModuleLoader {
    fn load(&self, path: &Path) -> Result<ModuleExports, LoadError>;
}

/// The shipped loader: a path-keyed map of pre-registered modules.
///
/// # Examples
///
/// ```
/// use routewalk::{Exported, ModuleExports, ModuleLoader, ModuleRegistry, Outcome};
/// use std::path::Path;
///
/// let mut registry = ModuleRegistry::new();
/// registry.register(
///     "routes/users.rs",
///     ModuleExports::builder()
///         .export("_get", Exported::handler("list", |_req, _res| Outcome::Done))
///         .build(),
/// );
///
/// assert!(registry.load(Path::new("routes/users.rs")).is_ok());
/// assert!(registry.load(Path::new("routes/other.rs")).is_err());
/// ```
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: HashMap<PathBuf, ModuleExports>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module's exports under its route-file path.
    pub fn register(&mut self, path: impl Into<PathBuf>, exports: ModuleExports) {
        self.modules.insert(path.into(), exports);
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl ModuleLoader for ModuleRegistry {
    fn load(&self, path: &Path) -> Result<ModuleExports, LoadError> {
        self.modules
            .get(path)
            .cloned()
            .ok_or_else(|| LoadError::Unregistered(path.to_path_buf()))
    }
}
