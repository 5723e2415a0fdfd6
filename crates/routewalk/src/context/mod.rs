/// Context extraction for directories and route files
///
/// Two symmetric pipelines turn raw module exports into normalized
/// middleware and error-handler sets:
/// - `dir`: reads the reserved `_config` / `_middleware` / `_error`
///   declaration files of a directory
/// - `file`: interprets an already-loaded route module's exports
///
/// Normalization filters out anything the classifiers reject; shape
/// mismatches never abort the traversal.

use crate::handler::{ErrorHandler, Exported, RequestHandler};
use crate::method::Method;
use std::collections::HashMap;

pub mod dir;
pub mod file;

pub use dir::{extract_dir_context, DirContext};
pub use file::{extract_file_context, FileContext};

/// One per-method middleware slot before normalization: a single
/// handler or an ordered sequence.
#[derive(Debug, Clone)]
pub enum MiddlewareSlot {
    One(Exported),
    Many(Vec<Exported>),
}

impl MiddlewareSlot {
    fn request_handlers(&self) -> Vec<RequestHandler> {
        match self {
            MiddlewareSlot::One(value) => request_handlers(std::slice::from_ref(value)),
            MiddlewareSlot::Many(values) => request_handlers(values),
        }
    }
}

/// Raw shape of a `middlewares` export: a single handler, an ordered
/// sequence, or a per-verb map (with `all` fallback) of either.
#[derive(Debug, Clone)]
pub enum MiddlewareExport {
    One(Exported),
    Many(Vec<Exported>),
    PerMethod(HashMap<String, MiddlewareSlot>),
}

/// Raw shape of an `error` export: a single handler or a per-verb map
/// with `all` fallback.
#[derive(Debug, Clone)]
pub enum ErrorExport {
    One(Exported),
    PerMethod(HashMap<String, Exported>),
}

/// Keeps only the exports that classify as request handlers.
fn request_handlers(values: &[Exported]) -> Vec<RequestHandler> {
    values
        .iter()
        .filter_map(|value| {
            let handler = value.as_handler();
            if handler.is_none() {
                tracing::warn!("dropping middleware entry that is not a request handler");
            }
            handler.cloned()
        })
        .collect()
}

/// Normalized middleware set: one list for every verb, or a per-verb
/// map. Invalid entries were already dropped per slot.
///
/// # Examples
///
/// ```
/// use routewalk::{Exported, Method, MiddlewareExport, MiddlewareSet, Outcome};
///
/// let raw = MiddlewareExport::Many(vec![
///     Exported::handler("auth", |_req, _res| Outcome::Next),
///     Exported::Value, // dropped
/// ]);
/// let set = MiddlewareSet::normalize(Some(&raw));
/// assert_eq!(set.for_method(Method::Get).len(), 1);
/// ```
#[derive(Debug, Clone)]
pub enum MiddlewareSet {
    Global(Vec<RequestHandler>),
    PerMethod(HashMap<Method, Vec<RequestHandler>>),
}

impl Default for MiddlewareSet {
    fn default() -> Self {
        MiddlewareSet::Global(Vec::new())
    }
}

impl MiddlewareSet {
    /// Normalizes a raw export, filtering invalid entries per slot and
    /// dropping unrecognized verb keys.
    pub fn normalize(raw: Option<&MiddlewareExport>) -> MiddlewareSet {
        match raw {
            None => MiddlewareSet::default(),
            Some(MiddlewareExport::One(value)) => {
                MiddlewareSet::Global(request_handlers(std::slice::from_ref(value)))
            }
            Some(MiddlewareExport::Many(values)) => {
                MiddlewareSet::Global(request_handlers(values))
            }
            Some(MiddlewareExport::PerMethod(map)) => {
                let mut normalized = HashMap::new();
                for (key, slot) in map {
                    match Method::parse(key) {
                        Some(method) => {
                            normalized.insert(method, slot.request_handlers());
                        }
                        None => {
                            tracing::warn!(key = %key, "dropping middleware map entry with unrecognized verb");
                        }
                    }
                }
                MiddlewareSet::PerMethod(normalized)
            }
        }
    }

    /// Middleware chain for a verb. A global set applies to every
    /// verb; a per-verb map uses the verb's own slot when present
    /// (even if empty), else the `all` slot, else nothing.
    pub fn for_method(&self, method: Method) -> &[RequestHandler] {
        match self {
            MiddlewareSet::Global(list) => list,
            MiddlewareSet::PerMethod(map) => map
                .get(&method)
                .or_else(|| map.get(&Method::All))
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        }
    }
}

/// Normalized error-handler set.
///
/// Per-verb maps keep an entry for every recognized key so that a
/// present-but-invalid slot still falls through to the `all` entry.
#[derive(Debug, Clone, Default)]
pub enum ErrorHandlerSet {
    #[default]
    None,
    Global(ErrorHandler),
    PerMethod(HashMap<Method, Option<ErrorHandler>>),
}

impl ErrorHandlerSet {
    pub fn normalize(raw: Option<&ErrorExport>) -> ErrorHandlerSet {
        match raw {
            None => ErrorHandlerSet::None,
            Some(ErrorExport::One(value)) => match value.as_error_handler() {
                Some(handler) => ErrorHandlerSet::Global(handler.clone()),
                None => ErrorHandlerSet::None,
            },
            Some(ErrorExport::PerMethod(map)) => {
                let mut normalized = HashMap::new();
                for (key, value) in map {
                    match Method::parse(key) {
                        Some(method) => {
                            normalized.insert(method, value.as_error_handler().cloned());
                        }
                        None => {
                            tracing::warn!(key = %key, "dropping error map entry with unrecognized verb");
                        }
                    }
                }
                ErrorHandlerSet::PerMethod(normalized)
            }
        }
    }

    /// Error handler for a verb, falling back to the `all` slot when
    /// the verb's own slot is absent or was filtered out.
    pub fn for_method(&self, method: Method) -> Option<&ErrorHandler> {
        match self {
            ErrorHandlerSet::None => None,
            ErrorHandlerSet::Global(handler) => Some(handler),
            ErrorHandlerSet::PerMethod(map) => map
                .get(&method)
                .and_then(|slot| slot.as_ref())
                .or_else(|| map.get(&Method::All).and_then(|slot| slot.as_ref())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::Outcome;

    fn mw(name: &str) -> Exported {
        Exported::handler(name, |_req, _res| Outcome::Next)
    }

    fn err(name: &str) -> Exported {
        Exported::error_handler(name, |_err, _req, _res| Outcome::Done)
    }

    fn names(handlers: &[RequestHandler]) -> Vec<&str> {
        handlers.iter().map(|h| h.name()).collect()
    }

    #[test]
    fn test_normalize_single_middleware() {
        let set = MiddlewareSet::normalize(Some(&MiddlewareExport::One(mw("log"))));
        assert_eq!(names(set.for_method(Method::Get)), vec!["log"]);
        assert_eq!(names(set.for_method(Method::Delete)), vec!["log"]);
    }

    #[test]
    fn test_normalize_filters_invalid_entries() {
        let set = MiddlewareSet::normalize(Some(&MiddlewareExport::Many(vec![
            mw("auth"),
            Exported::Value,
            err("four_args"),
            mw("log"),
        ])));
        assert_eq!(names(set.for_method(Method::Get)), vec!["auth", "log"]);
    }

    #[test]
    fn test_per_method_with_all_fallback() {
        let map = HashMap::from([
            ("post".to_string(), MiddlewareSlot::Many(vec![mw("csrf")])),
            ("all".to_string(), MiddlewareSlot::One(mw("log"))),
        ]);
        let set = MiddlewareSet::normalize(Some(&MiddlewareExport::PerMethod(map)));

        assert_eq!(names(set.for_method(Method::Post)), vec!["csrf"]);
        assert_eq!(names(set.for_method(Method::Get)), vec!["log"]);
    }

    #[test]
    fn test_per_method_present_empty_slot_wins_over_all() {
        let map = HashMap::from([
            ("get".to_string(), MiddlewareSlot::Many(vec![])),
            ("all".to_string(), MiddlewareSlot::One(mw("log"))),
        ]);
        let set = MiddlewareSet::normalize(Some(&MiddlewareExport::PerMethod(map)));

        assert!(set.for_method(Method::Get).is_empty());
        assert_eq!(names(set.for_method(Method::Post)), vec!["log"]);
    }

    #[test]
    fn test_per_method_unknown_keys_dropped() {
        let map = HashMap::from([("head".to_string(), MiddlewareSlot::One(mw("x")))]);
        let set = MiddlewareSet::normalize(Some(&MiddlewareExport::PerMethod(map)));
        for method in Method::REGISTRATION_ORDER {
            assert!(set.for_method(method).is_empty());
        }
    }

    #[test]
    fn test_error_single_must_classify() {
        let set = ErrorHandlerSet::normalize(Some(&ErrorExport::One(err("boom"))));
        assert_eq!(set.for_method(Method::Get).unwrap().name(), "boom");

        // A request handler in the error slot resolves to nothing.
        let set = ErrorHandlerSet::normalize(Some(&ErrorExport::One(mw("not_an_error"))));
        assert!(set.for_method(Method::Get).is_none());
    }

    #[test]
    fn test_error_per_method_invalid_slot_falls_back_to_all() {
        let map = HashMap::from([
            ("get".to_string(), Exported::Value),
            ("all".to_string(), err("fallback")),
        ]);
        let set = ErrorHandlerSet::normalize(Some(&ErrorExport::PerMethod(map)));

        assert_eq!(set.for_method(Method::Get).unwrap().name(), "fallback");
        assert_eq!(set.for_method(Method::Put).unwrap().name(), "fallback");
    }

    #[test]
    fn test_error_per_method_specific_wins() {
        let map = HashMap::from([
            ("get".to_string(), err("for_get")),
            ("all".to_string(), err("fallback")),
        ]);
        let set = ErrorHandlerSet::normalize(Some(&ErrorExport::PerMethod(map)));

        assert_eq!(set.for_method(Method::Get).unwrap().name(), "for_get");
        assert_eq!(set.for_method(Method::Post).unwrap().name(), "fallback");
    }

    #[test]
    fn test_error_absent() {
        let set = ErrorHandlerSet::normalize(None);
        assert!(set.for_method(Method::Get).is_none());
    }
}
