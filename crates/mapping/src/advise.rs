//! Per-endpoint RouteMap (naming) and Transform (payload) advice.

use crate::endpoint::{Endpoint, HttpMethod};
use regex::Regex;
use std::sync::LazyLock;

pub const STRIP_VERSION_PREFIX: &str = "Strip versioned prefix (e.g., /api/v1) in RouteMap naming.";
pub const ALIAS_NESTED_PATH: &str =
    "Use RouteMap alias to shorten deeply nested paths for MCP ergonomics.";
pub const NORMALIZE_LIST_ENVELOPE: &str =
    "Consider response transform to normalize list envelopes and pagination fields.";
pub const FLATTEN_REQUEST_PAYLOAD: &str =
    "Consider request transform to flatten nested payload wrappers into tool args.";

/// Paths with at least this many `/` get an alias suggestion.
const NESTED_PATH_SLASHES: usize = 4;

static VERSIONED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/api/v\d+").expect("versioned prefix regex"));

/// RouteMap naming advice. At most one suggestion; the versioned-prefix rule wins.
#[must_use]
pub fn route_map_suggestion(endpoint: &Endpoint) -> Option<&'static str> {
    if VERSIONED_PREFIX.is_match(&endpoint.path) {
        return Some(STRIP_VERSION_PREFIX);
    }
    if endpoint.path.matches('/').count() >= NESTED_PATH_SLASHES {
        return Some(ALIAS_NESTED_PATH);
    }
    None
}

/// Payload transform advice.
///
/// The list check is a plain "path ends with `s`" test on the raw path string.
#[must_use]
pub fn transform_suggestion(endpoint: &Endpoint) -> Option<&'static str> {
    if endpoint.method == HttpMethod::Get && endpoint.path.ends_with('s') {
        return Some(NORMALIZE_LIST_ENVELOPE);
    }
    if endpoint.method.carries_body() {
        return Some(FLATTEN_REQUEST_PAYLOAD);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ep(method: HttpMethod, path: &str) -> Endpoint {
        Endpoint::new(method, path, "", "")
    }

    #[test]
    fn test_versioned_prefix_wins_over_nesting() {
        let e = ep(HttpMethod::Get, "/api/v2/orgs/{org}/teams/{team}/members");
        assert_eq!(route_map_suggestion(&e), Some(STRIP_VERSION_PREFIX));
    }

    #[test]
    fn test_versioned_prefix_is_anchored_and_needs_digits() {
        assert_eq!(
            route_map_suggestion(&ep(HttpMethod::Get, "/api/v10")),
            Some(STRIP_VERSION_PREFIX)
        );
        assert_eq!(route_map_suggestion(&ep(HttpMethod::Get, "/api/vx/users")), None);
        assert_eq!(route_map_suggestion(&ep(HttpMethod::Get, "/x/api/v1")), None);
    }

    #[test]
    fn test_nested_path_threshold() {
        assert_eq!(route_map_suggestion(&ep(HttpMethod::Get, "/a/b/c")), None);
        assert_eq!(
            route_map_suggestion(&ep(HttpMethod::Get, "/a/b/c/d")),
            Some(ALIAS_NESTED_PATH)
        );
    }

    #[test]
    fn test_get_plural_path_suggests_list_normalization() {
        assert_eq!(
            transform_suggestion(&ep(HttpMethod::Get, "/api/v1/users")),
            Some(NORMALIZE_LIST_ENVELOPE)
        );
        // The check looks at the raw string, so a trailing `}` never matches.
        assert_eq!(transform_suggestion(&ep(HttpMethod::Get, "/api/v1/users/{id}")), None);
        assert_eq!(
            transform_suggestion(&ep(HttpMethod::Get, "/status")),
            Some(NORMALIZE_LIST_ENVELOPE)
        );
    }

    #[test]
    fn test_body_methods_suggest_flattening() {
        for method in [HttpMethod::Post, HttpMethod::Put, HttpMethod::Patch] {
            assert_eq!(
                transform_suggestion(&ep(method, "/users")),
                Some(FLATTEN_REQUEST_PAYLOAD)
            );
        }
        assert_eq!(transform_suggestion(&ep(HttpMethod::Delete, "/users")), None);
        assert_eq!(transform_suggestion(&ep(HttpMethod::Head, "/users")), None);
    }
}
