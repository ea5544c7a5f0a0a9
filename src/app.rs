use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{frontend_handler, health_handler, hello_handler};
use crate::routes;
use crate::state::AppState;

/// Assemble the application router.
///
/// The `/static` mount exists only when the config resolved a frontend build
/// directory. Every path no route claims goes to [`frontend_handler`].
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route(routes::HEALTH, get(health_handler))
        .route(routes::HELLO, get(hello_handler));

    if let Some(dir) = &state.config.static_dir {
        router = router.nest_service(routes::STATIC_MOUNT, ServeDir::new(dir));
    }

    if state.config.api_docs {
        let docs = SwaggerUi::new(routes::DOCS).url(routes::OPENAPI, ApiDoc::openapi());
        router = router.merge(docs);
    }

    router
        .fallback(frontend_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{body::Body, http::Request, http::StatusCode};
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn setup_test_app(api_docs: bool) -> Router {
        let config = Config {
            service_host: "127.0.0.1".to_string(),
            service_port: 8000,
            frontend_build_dir: PathBuf::from("frontend/out"),
            static_dir: None,
            api_docs,
        };

        build_router(AppState::new(config))
    }

    async fn get_status(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_openapi_served_when_enabled() {
        let (status, body) = get_status(setup_test_app(true), "/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(doc["paths"]["/api/health"].is_object());
        assert!(doc["paths"]["/api/hello"].is_object());
    }

    #[tokio::test]
    async fn test_openapi_absent_by_default() {
        let (status, body) = get_status(setup_test_app(false), "/openapi.json").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&body).unwrap(),
            serde_json::json!({"error": "Not found"})
        );
    }

    #[tokio::test]
    async fn test_api_endpoints_unaffected_by_docs_flag() {
        for api_docs in [false, true] {
            let (status, body) = get_status(setup_test_app(api_docs), "/api/health").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(
                serde_json::from_slice::<serde_json::Value>(&body).unwrap(),
                serde_json::json!({"status": "healthy", "message": "Backend is running"})
            );
        }
    }
}
