/// Path-string utilities for endpoint construction
///
/// All functions are **pure**: given same input, always produce same
/// output with no side effects. Malformed input never panics; it just
/// produces a normalized string.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a trailing `/` plus regex flags, as rendered by pattern
/// sources written in `/body/flags` delimiter form.
static FLAGS_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/[a-zA-Z]*$").expect("flags-suffix regex is valid"));

/// Normalizes a value to carry exactly one leading slash.
///
/// Any run of leading `/` and `\` characters is stripped first, so
/// concatenated fragments never accumulate duplicate separators.
///
/// # Examples
///
/// ```
/// use routewalk::path::one_leading_slash;
///
/// assert_eq!(one_leading_slash("users"), "/users");
/// assert_eq!(one_leading_slash("/users"), "/users");
/// assert_eq!(one_leading_slash("//users"), "/users");
/// assert_eq!(one_leading_slash("\\users"), "/users");
/// assert_eq!(one_leading_slash(""), "/");
/// ```
pub fn one_leading_slash(value: &str) -> String {
    format!("/{}", value.trim_start_matches(['/', '\\']))
}

/// Renders a custom pattern's source text for inlining into a path.
///
/// Strips one leading `/` delimiter and a trailing `/`-plus-flags
/// suffix, so both bare sources (`\d+`) and delimiter-wrapped sources
/// (`/\d+/gi`) clean to the same body.
///
/// # Examples
///
/// ```
/// use routewalk::path::clean_pattern_source;
///
/// assert_eq!(clean_pattern_source(r"\d+"), r"\d+");
/// assert_eq!(clean_pattern_source(r"/\d+/gi"), r"\d+");
/// assert_eq!(clean_pattern_source(r"/[a-z]+/"), "[a-z]+");
/// ```
pub fn clean_pattern_source(source: &str) -> String {
    let stripped = source.strip_prefix('/').unwrap_or(source);
    FLAGS_SUFFIX.replace(stripped, "").into_owned()
}
