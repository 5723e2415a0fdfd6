/// Typed model for route-module exports
///
/// A module export is classified once, at declaration time, into an
/// explicit tagged union: request handler, error handler, or plain
/// value. Registration decisions are made on the discriminant, never
/// by inspecting the callable itself.

use crate::method::Method;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// What a handler tells the chain to do after running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Pass control to the next handler in the chain.
    Next,
    /// The response is complete; stop the chain.
    Done,
}

/// Error value passed to error handlers.
#[derive(Debug, Clone)]
pub struct RouteError {
    pub message: String,
}

impl RouteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Request surface the host hands to handlers.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub params: HashMap<String, String>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: HashMap::new(),
        }
    }
}

/// Response surface handlers write into.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: 200,
            body: String::new(),
        }
    }
}

type HandlerFn = dyn Fn(&mut Request, &mut Response) -> Outcome + Send + Sync;
type ErrorHandlerFn = dyn Fn(&RouteError, &mut Request, &mut Response) -> Outcome + Send + Sync;

/// A named request handler: `(request, response) -> Outcome`.
///
/// The name is what ledger rows and host registrations report; the
/// callable itself is opaque to the mapper.
///
/// # Examples
///
/// ```
/// use routewalk::{Outcome, RequestHandler};
///
/// let handler = RequestHandler::new("list_users", |_req, res| {
///     res.body.push_str("[]");
///     Outcome::Done
/// });
/// assert_eq!(handler.name(), "list_users");
/// ```
#[derive(Clone)]
pub struct RequestHandler {
    name: String,
    func: Arc<HandlerFn>,
}

impl RequestHandler {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut Request, &mut Response) -> Outcome + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, req: &mut Request, res: &mut Response) -> Outcome {
        (self.func)(req, res)
    }
}

impl fmt::Debug for RequestHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestHandler({})", self.name)
    }
}

/// A named error handler: `(error, request, response) -> Outcome`.
#[derive(Clone)]
pub struct ErrorHandler {
    name: String,
    func: Arc<ErrorHandlerFn>,
}

impl ErrorHandler {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&RouteError, &mut Request, &mut Response) -> Outcome + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, err: &RouteError, req: &mut Request, res: &mut Response) -> Outcome {
        (self.func)(err, req, res)
    }
}

impl fmt::Debug for ErrorHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErrorHandler({})", self.name)
    }
}

/// A single module export, tagged by shape.
///
/// The tag decides how the export may be used: only `Handler` values
/// register as request handlers or middleware, only `Error` values as
/// error handlers. `Value` covers everything else a module might
/// export; it is never registered.
///
/// # Examples
///
/// ```
/// use routewalk::{Exported, Outcome};
///
/// let get = Exported::handler("home", |_req, _res| Outcome::Done);
/// assert!(get.is_request_handler());
/// assert!(!get.is_error_handler());
///
/// assert!(!Exported::Value.is_request_handler());
/// ```
#[derive(Debug, Clone)]
pub enum Exported {
    Handler(RequestHandler),
    Error(ErrorHandler),
    /// A non-callable export. Never registered anywhere.
    Value,
}

impl Exported {
    /// Convenience constructor for a request-handler export.
    pub fn handler<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut Request, &mut Response) -> Outcome + Send + Sync + 'static,
    {
        Exported::Handler(RequestHandler::new(name, func))
    }

    /// Convenience constructor for an error-handler export.
    pub fn error_handler<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&RouteError, &mut Request, &mut Response) -> Outcome + Send + Sync + 'static,
    {
        Exported::Error(ErrorHandler::new(name, func))
    }

    pub fn as_handler(&self) -> Option<&RequestHandler> {
        match self {
            Exported::Handler(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_error_handler(&self) -> Option<&ErrorHandler> {
        match self {
            Exported::Error(h) => Some(h),
            _ => None,
        }
    }

    pub fn is_request_handler(&self) -> bool {
        matches!(self, Exported::Handler(_))
    }

    pub fn is_error_handler(&self) -> bool {
        matches!(self, Exported::Error(_))
    }
}

/// Optional wrapper applied to file-level middleware and route
/// handlers just before registration.
///
/// Lets an application inject a cross-cutting shim (panic guard,
/// timing, etc.) without touching route modules. Ledger rows always
/// record the unwrapped handler's name; only the value handed to the
/// host is wrapped.
#[derive(Clone)]
pub struct HandlerGuard {
    func: Arc<dyn Fn(RequestHandler) -> RequestHandler + Send + Sync>,
}

impl HandlerGuard {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(RequestHandler) -> RequestHandler + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    pub fn wrap(&self, handler: RequestHandler) -> RequestHandler {
        (self.func)(handler)
    }
}

impl fmt::Debug for HandlerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HandlerGuard")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifiers_on_discriminant() {
        let handler = Exported::handler("h", |_req, _res| Outcome::Next);
        let error = Exported::error_handler("e", |_err, _req, _res| Outcome::Done);

        assert!(handler.is_request_handler());
        assert!(!handler.is_error_handler());
        assert!(error.is_error_handler());
        assert!(!error.is_request_handler());
        assert!(!Exported::Value.is_request_handler());
        assert!(!Exported::Value.is_error_handler());
    }

    #[test]
    fn test_as_handler_rejects_other_shapes() {
        let error = Exported::error_handler("e", |_err, _req, _res| Outcome::Done);
        assert!(error.as_handler().is_none());
        assert!(Exported::Value.as_handler().is_none());
        assert!(Exported::Value.as_error_handler().is_none());
    }

    #[test]
    fn test_handler_call() {
        let handler = RequestHandler::new("hello", |_req, res| {
            res.body.push_str("hi");
            Outcome::Done
        });

        let mut req = Request::new(Method::Get, "/");
        let mut res = Response::default();
        assert_eq!(handler.call(&mut req, &mut res), Outcome::Done);
        assert_eq!(res.body, "hi");
    }

    #[test]
    fn test_guard_wraps_handler() {
        let guard = HandlerGuard::new(|inner| {
            RequestHandler::new("guarded", move |req, res| {
                res.status = 299;
                inner.call(req, res)
            })
        });

        let wrapped = guard.wrap(RequestHandler::new("plain", |_req, _res| Outcome::Done));
        assert_eq!(wrapped.name(), "guarded");

        let mut req = Request::new(Method::Get, "/");
        let mut res = Response::default();
        wrapped.call(&mut req, &mut res);
        assert_eq!(res.status, 299);
    }
}
