/// Endpoint composition
///
/// Pure string construction of the final path pattern for one node.
/// No I/O, no failure mode: malformed input yields a syntactically
/// valid (if odd) path rather than an error.

use crate::config::RoutePattern;
use crate::path::{clean_pattern_source, one_leading_slash};

/// Builds the endpoint pattern for a node.
///
/// Composition rule:
/// - both `route` (accumulated so far) and `name` are normalized to a
///   single leading slash;
/// - an `index` file name (case-insensitive, trimmed) collapses to the
///   empty segment — it contributes handlers, not a path component;
/// - a custom pattern renders to its cleaned source wrapped in a
///   capture group `( … )`, concatenated directly after a parameter
///   token (`/:id(\d+)`) or slash-prefixed as a sibling component
///   after a literal segment (`/users/(\d+)`).
///
/// # Examples
///
/// ```
/// use routewalk::{build_endpoint, RoutePattern};
///
/// assert_eq!(build_endpoint("/", "users", false, None, false), "/users");
/// assert_eq!(build_endpoint("/users", "index", false, None, true), "/users");
/// assert_eq!(build_endpoint("/users", ":id", true, None, true), "/users/:id");
///
/// let digits = RoutePattern::from(r"\d+");
/// assert_eq!(
///     build_endpoint("/users", ":id", true, Some(&digits), true),
///     r"/users/:id(\d+)"
/// );
/// assert_eq!(
///     build_endpoint("/users", "item", false, Some(&digits), true),
///     r"/users/item/(\d+)"
/// );
/// ```
pub fn build_endpoint(
    route: &str,
    name: &str,
    is_param: bool,
    pattern: Option<&RoutePattern>,
    is_file: bool,
) -> String {
    let trimmed = name.trim();
    let file_is_index = is_file && trimmed.eq_ignore_ascii_case("index");

    let name_part = if file_is_index {
        String::new()
    } else {
        one_leading_slash(trimmed)
    };
    let route_part = one_leading_slash(route);

    let mut endpoint = one_leading_slash(&format!("{route_part}{name_part}"));

    if let Some(pattern) = pattern {
        let group = format!("({})", clean_pattern_source(pattern.source()));
        if is_param {
            endpoint.push_str(&group);
        } else {
            endpoint.push('/');
            endpoint.push_str(&group);
        }
    }

    endpoint
}
