/// Host application abstraction
///
/// The mapper registers everything through [`HostApp`]; any web
/// framework can sit behind it. [`RecordingApp`] is the reference
/// implementation used throughout the test suite: it stores every
/// registration call in order, by handler name.

use crate::handler::{ErrorHandler, RequestHandler};
use crate::method::Method;
use serde::Serialize;

/// What the mapper needs from the host framework.
pub trait HostApp {
    /// Mounts a middleware at a path pattern (directory scope).
    fn use_middleware(&mut self, pattern: &str, handler: RequestHandler);

    /// Mounts an error handler at a path pattern.
    fn use_error_handler(&mut self, pattern: &str, handler: ErrorHandler);

    /// Registers a verb handler with its middleware chain.
    fn register(
        &mut self,
        method: Method,
        pattern: &str,
        middlewares: Vec<RequestHandler>,
        handler: RequestHandler,
    );
}

/// One recorded host call, reduced to names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum AppCall {
    Use {
        pattern: String,
        handler: String,
    },
    UseError {
        pattern: String,
        handler: String,
    },
    Register {
        method: Method,
        pattern: String,
        /// Middleware names followed by the terminal handler name.
        chain: Vec<String>,
    },
}

/// A host that records calls instead of serving.
///
/// # Examples
///
/// ```
/// use routewalk::{AppCall, HostApp, Method, RecordingApp, RequestHandler, Outcome};
///
/// let mut app = RecordingApp::new();
/// app.register(
///     Method::Get,
///     "/users",
///     vec![],
///     RequestHandler::new("list", |_req, _res| Outcome::Done),
/// );
///
/// assert_eq!(
///     app.calls()[0],
///     AppCall::Register {
///         method: Method::Get,
///         pattern: "/users".into(),
///         chain: vec!["list".into()],
///     }
/// );
/// ```
#[derive(Debug, Default)]
pub struct RecordingApp {
    calls: Vec<AppCall>,
}

impl RecordingApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[AppCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<AppCall> {
        self.calls
    }
}

impl HostApp for RecordingApp {
    fn use_middleware(&mut self, pattern: &str, handler: RequestHandler) {
        self.calls.push(AppCall::Use {
            pattern: pattern.to_string(),
            handler: handler.name().to_string(),
        });
    }

    fn use_error_handler(&mut self, pattern: &str, handler: ErrorHandler) {
        self.calls.push(AppCall::UseError {
            pattern: pattern.to_string(),
            handler: handler.name().to_string(),
        });
    }

    fn register(
        &mut self,
        method: Method,
        pattern: &str,
        middlewares: Vec<RequestHandler>,
        handler: RequestHandler,
    ) {
        let mut chain: Vec<String> = middlewares
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        chain.push(handler.name().to_string());

        self.calls.push(AppCall::Register {
            method,
            pattern: pattern.to_string(),
            chain,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::Outcome;

    #[test]
    fn test_records_calls_in_order() {
        let mut app = RecordingApp::new();
        app.use_middleware("/api", RequestHandler::new("auth", |_req, _res| Outcome::Next));
        app.register(
            Method::Post,
            "/api/users",
            vec![RequestHandler::new("csrf", |_req, _res| Outcome::Next)],
            RequestHandler::new("create", |_req, _res| Outcome::Done),
        );
        app.use_error_handler(
            "/api",
            ErrorHandler::new("catch", |_err, _req, _res| Outcome::Done),
        );

        assert_eq!(
            app.into_calls(),
            vec![
                AppCall::Use {
                    pattern: "/api".into(),
                    handler: "auth".into(),
                },
                AppCall::Register {
                    method: Method::Post,
                    pattern: "/api/users".into(),
                    chain: vec!["csrf".into(), "create".into()],
                },
                AppCall::UseError {
                    pattern: "/api".into(),
                    handler: "catch".into(),
                },
            ]
        );
    }
}
