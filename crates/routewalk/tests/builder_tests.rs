//! Endpoint composition across chained segments, the way the mapper
//! threads accumulated routes through nested nodes.

use routewalk::{build_endpoint, one_leading_slash, segment_from_stem, RoutePattern};

/// Mirrors how the traversal feeds each node's endpoint back in as the
/// next level's accumulated route.
fn descend(route: &str, stem: &str, pattern: Option<&RoutePattern>, is_file: bool) -> String {
    let segment = segment_from_stem(stem);
    build_endpoint(route, &segment.name, segment.is_param, pattern, is_file)
}

#[test]
fn nested_directories_accumulate_segments() {
    let api = descend("", "api", None, false);
    let v1 = descend(&api, "v1", None, false);
    let users = descend(&v1, "users", None, false);
    assert_eq!(users, "/api/v1/users");
}

#[test]
fn parameter_directories_chain_with_literals() {
    let users = descend("", "users", None, false);
    let id = descend(&users, "[id]", None, false);
    let posts = descend(&id, "posts", None, false);
    let post_id = descend(&posts, "[postId]", None, true);
    assert_eq!(post_id, "/users/:id/posts/:postId");
}

#[test]
fn index_file_takes_its_directory_pattern() {
    let blog = descend("", "blog", None, false);
    assert_eq!(descend(&blog, "index", None, true), "/blog");
}

#[test]
fn directory_pattern_constrains_the_whole_subtree() {
    let digits = RoutePattern::from(r"\d{4}");
    let year = descend("", "[year]", Some(&digits), false);
    assert_eq!(year, r"/:year(\d{4})");

    let archive = descend(&year, "archive", None, true);
    assert_eq!(archive, r"/:year(\d{4})/archive");
}

#[test]
fn delimiters_and_flags_are_stripped_from_pattern_sources() {
    let delimited = RoutePattern::from("/[a-z]+/gi");
    assert_eq!(
        descend("/tags", "[tag]", Some(&delimited), true),
        "/tags/:tag([a-z]+)"
    );
}

#[test]
fn normalization_collapses_redundant_leading_slashes() {
    assert_eq!(one_leading_slash("//users"), "/users");
    assert_eq!(one_leading_slash(r"\users"), "/users");
    assert_eq!(descend("//", "users", None, false), "/users");
}

#[test]
fn root_route_is_a_single_slash() {
    assert_eq!(descend("", "", None, false), "/");
    assert_eq!(descend("/", "index", None, true), "/");
}
