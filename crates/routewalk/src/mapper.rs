/// Directory traversal and endpoint registration
///
/// [`RouteMapper`] walks a routes directory depth-first, derives a URL
/// pattern for every node, registers handlers on the [`HostApp`], and
/// appends one [`Endpoint`] row per registration to its ledger.
///
/// The walk is deterministic: children are visited in filename order,
/// so two passes over the same tree produce identical ledgers.
///
/// Failure is fatal but not destructive — the first error stops the
/// walk, and the ledger keeps every row appended before it.

use crate::app::HostApp;
use crate::context::{extract_dir_context, extract_file_context};
use crate::error::MapError;
use crate::handler::{HandlerGuard, RequestHandler};
use crate::method::Method;
use crate::module::ModuleLoader;
use crate::route::{build_endpoint, is_route_module_file, segment_from_stem};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Verb column value for directory rows.
const DIR_METHOD: &str = "-";

/// One row of the endpoint ledger.
///
/// Directory rows use `-` as the method; file rows use the lowercase
/// verb. The error-handler column is `None` (JSON `null`) when no
/// handler applies, rather than a sentinel string: rows always have a
/// method, but most have no error handler. Handler names are always
/// the unwrapped names, regardless of any guard in effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub depth: usize,
    pub name: String,
    pub endpoint: String,
    pub method: String,
    pub middlewares: Vec<String>,
    pub error_handler: Option<String>,
}

/// The outcome of a completed mapping pass.
#[derive(Debug, Clone, Serialize)]
pub struct MapReport {
    pub base: PathBuf,
    pub endpoints: Vec<Endpoint>,
}

/// Immutable per-node state threaded through the walk. Each child gets
/// a fresh context; nothing is mutated on the way back up.
#[derive(Debug, Clone)]
pub struct TraversalContext {
    /// URL pattern accumulated from the ancestors.
    pub route: String,
    /// Directory containing the current node.
    pub parent: PathBuf,
    pub depth: usize,
}

/// Options for a mapping pass.
#[derive(Debug, Clone, Default)]
pub struct MapperOptions {
    base: Option<PathBuf>,
    guard: Option<HandlerGuard>,
}

impl MapperOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes directory to walk. Defaults to `routes`.
    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Wrapper applied to file-level middleware and verb handlers just
    /// before registration. Directory middleware is never wrapped.
    pub fn with_guard(mut self, guard: HandlerGuard) -> Self {
        self.guard = Some(guard);
        self
    }

    fn base(&self) -> PathBuf {
        self.base.clone().unwrap_or_else(|| PathBuf::from("routes"))
    }
}

/// Walks a routes directory and registers its endpoints.
///
/// Holds the ledger across the walk so that an aborted pass still
/// exposes the rows registered before the failure.
pub struct RouteMapper<'a, L: ModuleLoader + ?Sized, A: HostApp> {
    app: &'a mut A,
    loader: &'a L,
    base: PathBuf,
    guard: Option<HandlerGuard>,
    endpoints: Vec<Endpoint>,
}

impl<'a, L: ModuleLoader + ?Sized, A: HostApp> RouteMapper<'a, L, A> {
    pub fn new(app: &'a mut A, loader: &'a L, options: MapperOptions) -> Self {
        Self {
            app,
            loader,
            base: options.base(),
            guard: options.guard,
            endpoints: Vec::new(),
        }
    }

    /// Runs the pass. An absent base directory is a no-op, not an
    /// error: an application without a routes directory simply has no
    /// file-based routes.
    pub fn map_routes(&mut self) -> Result<(), MapError> {
        let base = self.base.clone();
        let root = TraversalContext {
            route: String::new(),
            parent: base.clone(),
            depth: 0,
        };
        self.visit(&base, &root)
    }

    /// Ledger rows appended so far. Valid after a failed pass too.
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn into_report(self) -> MapReport {
        MapReport {
            base: self.base,
            endpoints: self.endpoints,
        }
    }

    fn visit(&mut self, target: &Path, ctx: &TraversalContext) -> Result<(), MapError> {
        let metadata = match std::fs::metadata(target) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(target = %target.display(), "skipping absent path");
                return Ok(());
            }
            Err(source) => {
                return Err(MapError::Io {
                    path: target.to_path_buf(),
                    source,
                })
            }
        };

        // The base itself contributes no segment; its row is "/".
        let stem = if target == self.base {
            String::new()
        } else {
            target
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        };

        if metadata.is_dir() {
            self.visit_dir(target, &stem, ctx)
        } else if metadata.is_file() {
            self.visit_file(target, &stem, ctx)
        } else {
            // FIFOs, sockets, and the like are not route modules.
            debug!(target = %target.display(), "skipping non-regular file");
            Ok(())
        }
    }

    fn visit_dir(&mut self, target: &Path, stem: &str, ctx: &TraversalContext) -> Result<(), MapError> {
        let dir_ctx = extract_dir_context(target, self.loader)?;
        let segment = segment_from_stem(stem);
        let endpoint = build_endpoint(
            &ctx.route,
            &segment.name,
            segment.is_param,
            dir_ctx.pattern.as_ref(),
            false,
        );
        debug!(dir = %target.display(), endpoint = %endpoint, "mapping directory");

        for middleware in &dir_ctx.middlewares {
            self.app.use_middleware(&endpoint, middleware.clone());
        }

        self.endpoints.push(Endpoint {
            depth: ctx.depth,
            name: segment.name.clone(),
            endpoint: endpoint.clone(),
            method: DIR_METHOD.to_string(),
            middlewares: dir_ctx.middlewares.iter().map(|m| m.name().to_string()).collect(),
            error_handler: dir_ctx.error.as_ref().map(|e| e.name().to_string()),
        });

        let mut children = Vec::new();
        let entries = std::fs::read_dir(target).map_err(|source| MapError::Io {
            path: target.to_path_buf(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| MapError::Io {
                path: target.to_path_buf(),
                source,
            })?;
            children.push(entry.file_name());
        }
        children.sort();

        for name in children {
            if name.to_string_lossy().starts_with('_') {
                continue;
            }
            let child_ctx = TraversalContext {
                route: endpoint.clone(),
                parent: target.to_path_buf(),
                depth: ctx.depth + 1,
            };
            self.visit(&target.join(&name), &child_ctx)?;
        }

        // Registered after the subtree so that file-level error
        // handlers take precedence over the directory's.
        if let Some(error) = &dir_ctx.error {
            self.app.use_error_handler(&endpoint, error.clone());
        }

        Ok(())
    }

    fn visit_file(&mut self, target: &Path, stem: &str, ctx: &TraversalContext) -> Result<(), MapError> {
        let basename = target
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !is_route_module_file(&basename) {
            debug!(file = %target.display(), "skipping non-module file");
            return Ok(());
        }

        let module = self
            .loader
            .load(target)
            .map_err(|source| MapError::ModuleLoad {
                path: target.to_path_buf(),
                source,
            })?;
        let file_ctx = extract_file_context(&module);
        let segment = segment_from_stem(stem);

        for method in Method::REGISTRATION_ORDER {
            let Some(export) = module.export(method.export_name()) else {
                continue;
            };
            let Some(handler) = export.as_handler() else {
                warn!(
                    file = %target.display(),
                    export = method.export_name(),
                    "skipping verb export that is not a request handler"
                );
                continue;
            };

            let endpoint = build_endpoint(
                &ctx.route,
                &segment.name,
                segment.is_param,
                file_ctx.config.pattern_for(method),
                true,
            );
            debug!(file = %target.display(), method = %method, endpoint = %endpoint, "registering route");

            let middlewares = file_ctx.middlewares.for_method(method);
            let middleware_names: Vec<String> =
                middlewares.iter().map(|m| m.name().to_string()).collect();

            let chain: Vec<_> = middlewares
                .iter()
                .map(|m| self.wrap(m.clone()))
                .collect();
            let wrapped = self.wrap(handler.clone());
            self.app.register(method, &endpoint, chain, wrapped);

            let error = file_ctx.error.for_method(method);
            if let Some(error) = error {
                self.app.use_error_handler(&endpoint, error.clone());
            }

            self.endpoints.push(Endpoint {
                depth: ctx.depth,
                name: segment.name.clone(),
                endpoint,
                method: method.as_str().to_string(),
                middlewares: middleware_names,
                error_handler: error.map(|e| e.name().to_string()),
            });
        }

        Ok(())
    }

    fn wrap(&self, handler: RequestHandler) -> RequestHandler {
        match &self.guard {
            Some(guard) => guard.wrap(handler),
            None => handler,
        }
    }
}

/// Runs one complete mapping pass.
///
/// # Examples
///
/// ```no_run
/// use routewalk::{map_routes, MapperOptions, ModuleRegistry, RecordingApp};
///
/// let registry = ModuleRegistry::new();
/// let mut app = RecordingApp::new();
/// let report = map_routes(&mut app, &registry, MapperOptions::new())?;
/// assert!(report.endpoints.is_empty());
/// # Ok::<(), routewalk::MapError>(())
/// ```
pub fn map_routes<L: ModuleLoader + ?Sized, A: HostApp>(
    app: &mut A,
    loader: &L,
    options: MapperOptions,
) -> Result<MapReport, MapError> {
    let mut mapper = RouteMapper::new(app, loader, options);
    mapper.map_routes()?;
    Ok(mapper.into_report())
}
