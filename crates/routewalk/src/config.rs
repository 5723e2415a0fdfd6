/// Per-node route configuration
///
/// A route module (or a directory's `_config` declaration file) may
/// export a `config` value that customizes the generated path pattern.
/// Absent config is equivalent to the empty default.

use crate::method::Method;
use regex::Regex;
use std::collections::HashMap;

/// A custom path pattern: literal source text or a compiled regex.
///
/// Both forms render to source text before being inlined into the
/// endpoint as a capture group; see
/// [`clean_pattern_source`](crate::path::clean_pattern_source).
#[derive(Debug, Clone)]
pub enum RoutePattern {
    Literal(String),
    Regex(Regex),
}

impl RoutePattern {
    /// Source text of the pattern, uncleaned.
    pub fn source(&self) -> &str {
        match self {
            RoutePattern::Literal(s) => s,
            RoutePattern::Regex(r) => r.as_str(),
        }
    }
}

impl From<&str> for RoutePattern {
    fn from(value: &str) -> Self {
        RoutePattern::Literal(value.to_string())
    }
}

impl From<String> for RoutePattern {
    fn from(value: String) -> Self {
        RoutePattern::Literal(value)
    }
}

impl From<Regex> for RoutePattern {
    fn from(value: Regex) -> Self {
        RoutePattern::Regex(value)
    }
}

/// Where a node's pattern comes from: one pattern for every verb, or a
/// per-verb map with an `all` fallback entry.
///
/// Map keys are raw strings; anything [`Method::parse`] rejects is a
/// dead entry that no lookup ever reaches.
#[derive(Debug, Clone)]
pub enum PatternSource {
    Single(RoutePattern),
    PerMethod(HashMap<String, RoutePattern>),
}

impl PatternSource {
    /// Builds a per-method source from `(verb, pattern)` pairs.
    pub fn per_method<K, P, I>(entries: I) -> Self
    where
        K: Into<String>,
        P: Into<RoutePattern>,
        I: IntoIterator<Item = (K, P)>,
    {
        PatternSource::PerMethod(
            entries
                .into_iter()
                .map(|(k, p)| (k.into(), p.into()))
                .collect(),
        )
    }

    /// Pattern for a specific verb. A single pattern applies to every
    /// verb; a per-method map falls back to its `all` entry.
    pub fn for_method(&self, method: Method) -> Option<&RoutePattern> {
        match self {
            PatternSource::Single(p) => Some(p),
            PatternSource::PerMethod(map) => map
                .get(method.as_str())
                .or_else(|| map.get(Method::All.as_str())),
        }
    }

    /// The single-pattern form, if that is what this source is.
    ///
    /// Directories only honor this form; a per-method map on a
    /// directory resolves to no pattern.
    pub fn single(&self) -> Option<&RoutePattern> {
        match self {
            PatternSource::Single(p) => Some(p),
            PatternSource::PerMethod(_) => None,
        }
    }
}

/// Optional per-node configuration.
///
/// # Examples
///
/// ```
/// use routewalk::{Method, PatternSource, RouteConfig};
///
/// let config = RouteConfig::with_pattern(PatternSource::per_method([("get", r"\d+")]));
/// assert!(config.pattern_for(Method::Get).is_some());
/// assert!(config.pattern_for(Method::Post).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteConfig {
    pub pattern: Option<PatternSource>,
}

impl RouteConfig {
    pub fn with_pattern(pattern: PatternSource) -> Self {
        Self {
            pattern: Some(pattern),
        }
    }

    /// Convenience for the single-pattern form.
    pub fn with_single_pattern(pattern: impl Into<RoutePattern>) -> Self {
        Self::with_pattern(PatternSource::Single(pattern.into()))
    }

    /// Pattern to apply when registering `method` on a file node.
    pub fn pattern_for(&self, method: Method) -> Option<&RoutePattern> {
        self.pattern.as_ref().and_then(|p| p.for_method(method))
    }

    /// Pattern to apply on a directory node (single form only).
    pub fn dir_pattern(&self) -> Option<&RoutePattern> {
        self.pattern.as_ref().and_then(PatternSource::single)
    }
}
