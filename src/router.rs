//! Path classification for the catch-all route.
//!
//! Every request path falls into exactly one [`PathClass`]. Paths in the
//! reserved namespace resolve through a literal table of known endpoints;
//! everything else is handed to the SPA entry point.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::routes;

/// Which namespace a request path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Starts with `api/`.
    Reserved,
    /// Anything else, left to client-side routing.
    Application,
}

/// What a request path should be answered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Health,
    Hello,
    NotFound,
    StaticFallback,
}

const RESERVED_ENDPOINTS: &[(&str, Route)] = &[
    (routes::HEALTH, Route::Health),
    (routes::HELLO, Route::Hello),
];

/// Percent-decode a raw request path so `/%61pi/health` and `/api/health`
/// classify alike. Invalid UTF-8 is replaced, not rejected.
pub fn decode(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw).decode_utf8_lossy()
}

/// Strip a single leading slash, matching how a `{path}` capture sees it.
fn relative(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

pub fn classify(path: &str) -> PathClass {
    if relative(path).starts_with(routes::API_PREFIX) {
        PathClass::Reserved
    } else {
        PathClass::Application
    }
}

pub fn resolve(path: &str) -> Route {
    match classify(path) {
        PathClass::Application => Route::StaticFallback,
        PathClass::Reserved => RESERVED_ENDPOINTS
            .iter()
            .find(|(endpoint, _)| relative(endpoint) == relative(path))
            .map(|(_, route)| *route)
            .unwrap_or(Route::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_endpoints() {
        assert_eq!(resolve("/api/health"), Route::Health);
        assert_eq!(resolve("/api/hello"), Route::Hello);
        assert_eq!(resolve("api/health"), Route::Health);
    }

    #[test]
    fn test_unknown_api_paths_are_not_found() {
        for path in [
            "/api/",
            "/api/healthz",
            "/api/health/",
            "/api/hello/world",
            "/api/v1/users",
            "/api/HEALTH",
        ] {
            assert_eq!(classify(path), PathClass::Reserved, "{}", path);
            assert_eq!(resolve(path), Route::NotFound, "{}", path);
        }
    }

    #[test]
    fn test_application_paths_fall_back_to_entry_point() {
        for path in [
            "/",
            "",
            "/dashboard",
            "/o/acme/c/client/p/project",
            "/robots.txt",
            "/api",
            "/apis/health",
            "/v1/api/health",
            "/API/health",
        ] {
            assert_eq!(classify(path), PathClass::Application, "{}", path);
            assert_eq!(resolve(path), Route::StaticFallback, "{}", path);
        }
    }

    #[test]
    fn test_encoded_paths_classify_after_decoding() {
        assert_eq!(decode("/%61pi/health"), "/api/health");
        assert_eq!(resolve(&decode("/%61pi/health")), Route::Health);
        assert_eq!(resolve(&decode("/%61pi/unknown")), Route::NotFound);
        assert_eq!(resolve(&decode("/api%2Funknown")), Route::NotFound);
        assert_eq!(resolve(&decode("/docs%20page")), Route::StaticFallback);
    }

    #[test]
    fn test_decode_leaves_plain_paths_borrowed() {
        assert!(matches!(decode("/dashboard"), Cow::Borrowed("/dashboard")));
        assert_eq!(decode("/bad%FF"), "/bad\u{FFFD}");
    }

    #[test]
    fn test_only_one_leading_slash_is_stripped() {
        assert_eq!(classify("//api/health"), PathClass::Application);
        assert_eq!(resolve("//api/health"), Route::StaticFallback);
    }
}
