// Route path constants - single source of truth for all HTTP paths

pub const HEALTH: &str = "/api/health";
pub const HELLO: &str = "/api/hello";
pub const STATIC_MOUNT: &str = "/static";
pub const DOCS: &str = "/docs";
pub const OPENAPI: &str = "/openapi.json";

/// Namespace reserved for backend endpoints, without the leading slash.
pub const API_PREFIX: &str = "api/";

/// SPA entry point inside the frontend build directory.
pub const INDEX_FILE: &str = "index.html";
