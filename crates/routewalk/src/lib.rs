//! # routewalk
//!
//! File-based route resolution: walk a routes directory, derive URL
//! patterns from filenames, and register the endpoints on a host web
//! framework.
//!
//! ## Conventions
//!
//! - a file or directory named `[id]` becomes the parameter `:id`
//! - a file named `index` collapses into its directory's pattern
//! - `_config`, `_middleware`, and `_error` declare a directory's
//!   pattern, subtree middleware, and error handler
//! - any other `_`-prefixed name is reserved and never mapped
//! - verb handlers are module exports named `_get`, `_post`,
//!   `_delete`, `_put`, `_patch`, `_all`
//!
//! Every registration is appended to an [`Endpoint`] ledger, suitable
//! for startup logging or a route-table dump.
//!
//! ## Example
//!
//! ```
//! use routewalk::{
//!     map_routes, Exported, MapperOptions, ModuleExports, ModuleRegistry, Outcome,
//!     RecordingApp,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let routes = tempfile::tempdir()?;
//! std::fs::write(routes.path().join("index.rs"), "")?;
//!
//! let mut registry = ModuleRegistry::new();
//! registry.register(
//!     routes.path().join("index.rs"),
//!     ModuleExports::builder()
//!         .export("_get", Exported::handler("home", |_req, res| {
//!             res.body.push_str("hello");
//!             Outcome::Done
//!         }))
//!         .build(),
//! );
//!
//! let mut app = RecordingApp::new();
//! let report = map_routes(
//!     &mut app,
//!     &registry,
//!     MapperOptions::new().with_base(routes.path()),
//! )?;
//!
//! assert_eq!(report.endpoints[0].endpoint, "/");
//! assert_eq!(report.endpoints[0].method, "-");
//! assert_eq!(report.endpoints[1].endpoint, "/");
//! assert_eq!(report.endpoints[1].method, "get");
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod mapper;
pub mod method;
pub mod module;
pub mod path;
pub mod route;

// Re-export the public surface at the crate root
pub use app::{AppCall, HostApp, RecordingApp};
pub use config::{PatternSource, RouteConfig, RoutePattern};
pub use context::{
    extract_dir_context, extract_file_context, DirContext, ErrorExport, ErrorHandlerSet,
    FileContext, MiddlewareExport, MiddlewareSet, MiddlewareSlot,
};
pub use error::MapError;
pub use handler::{
    ErrorHandler, Exported, HandlerGuard, Outcome, Request, RequestHandler, Response, RouteError,
};
pub use mapper::{map_routes, Endpoint, MapReport, MapperOptions, RouteMapper, TraversalContext};
pub use method::Method;
pub use module::{LoadError, ModuleExports, ModuleExportsBuilder, ModuleLoader, ModuleRegistry};
pub use path::{clean_pattern_source, one_leading_slash};
pub use route::{
    build_endpoint, is_route_module_file, resolve_module_file, segment_from_stem, Segment,
    MODULE_EXTENSIONS,
};
