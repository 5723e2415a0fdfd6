/// Basename classification
///
/// Pure functions mapping filesystem names to route segments and
/// deciding which files are loadable route modules.

use std::path::{Path, PathBuf};

/// Source-file extensions recognized as route modules, checked
/// case-insensitively. Declaration files (`_config`, `_middleware`,
/// `_error`) are probed under the same two extensions.
pub const MODULE_EXTENSIONS: [&str; 2] = ["rs", "rsx"];

/// One path component derived from a single filesystem node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Literal name, or `:name` parameter token.
    pub name: String,
    /// Whether the basename was bracket-wrapped (`[id]`).
    pub is_param: bool,
}

/// Classifies a basename stem into a route segment.
///
/// A bracket-wrapped stem becomes a named-parameter token; everything
/// else is a literal segment. Empty brackets stay literal.
///
/// # Examples
///
/// ```
/// use routewalk::segment_from_stem;
///
/// let seg = segment_from_stem("[id]");
/// assert_eq!(seg.name, ":id");
/// assert!(seg.is_param);
///
/// let seg = segment_from_stem("users");
/// assert_eq!(seg.name, "users");
/// assert!(!seg.is_param);
/// ```
pub fn segment_from_stem(stem: &str) -> Segment {
    match stem.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(inner) if !inner.is_empty() => Segment {
            name: format!(":{inner}"),
            is_param: true,
        },
        _ => Segment {
            name: stem.to_string(),
            is_param: false,
        },
    }
}

/// Whether a basename carries one of the recognized route-module
/// extensions (case-insensitive).
///
/// # Examples
///
/// ```
/// use routewalk::is_route_module_file;
///
/// assert!(is_route_module_file("users.rs"));
/// assert!(is_route_module_file("users.RSX"));
/// assert!(!is_route_module_file("users.txt"));
/// assert!(!is_route_module_file("users"));
/// ```
pub fn is_route_module_file(basename: &str) -> bool {
    Path::new(basename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            MODULE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Probes a directory for a declaration file by base name, trying each
/// recognized extension in order. Returns the first path that exists
/// as a regular file.
pub fn resolve_module_file(dir: &Path, stem: &str) -> Option<PathBuf> {
    MODULE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_literal() {
        let seg = segment_from_stem("posts");
        assert_eq!(seg.name, "posts");
        assert!(!seg.is_param);
    }

    #[test]
    fn test_segment_parameter() {
        let seg = segment_from_stem("[userId]");
        assert_eq!(seg.name, ":userId");
        assert!(seg.is_param);
    }

    #[test]
    fn test_segment_empty_brackets_stay_literal() {
        let seg = segment_from_stem("[]");
        assert_eq!(seg.name, "[]");
        assert!(!seg.is_param);
    }

    #[test]
    fn test_segment_unbalanced_brackets_stay_literal() {
        assert!(!segment_from_stem("[id").is_param);
        assert!(!segment_from_stem("id]").is_param);
    }

    #[test]
    fn test_segment_empty_stem() {
        let seg = segment_from_stem("");
        assert_eq!(seg.name, "");
        assert!(!seg.is_param);
    }

    #[test]
    fn test_is_route_module_file() {
        assert!(is_route_module_file("index.rs"));
        assert!(is_route_module_file("index.rsx"));
        assert!(is_route_module_file("INDEX.Rs"));
        assert!(!is_route_module_file("notes.md"));
        assert!(!is_route_module_file("Makefile"));
    }

    #[test]
    fn test_resolve_module_file_probes_both_extensions() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve_module_file(dir.path(), "_config"), None);

        std::fs::write(dir.path().join("_config.rsx"), "").unwrap();
        let found = resolve_module_file(dir.path(), "_config").unwrap();
        assert_eq!(found, dir.path().join("_config.rsx"));

        // The first extension in MODULE_EXTENSIONS wins when both exist.
        std::fs::write(dir.path().join("_config.rs"), "").unwrap();
        let found = resolve_module_file(dir.path(), "_config").unwrap();
        assert_eq!(found, dir.path().join("_config.rs"));
    }
}
