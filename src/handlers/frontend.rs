use std::io;

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::config::Config;
use crate::error::ApiError;
use crate::handlers::{health_handler, hello_handler};
use crate::router::{self, Route};
use crate::state::AppState;

/// Fallback handler - SPA routing for every path no other route claimed
///
/// Paths outside the `api/` namespace get the frontend entry point, read
/// from disk on every request. Unknown `api/` paths get the not-found
/// payload.
pub async fn frontend_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, ApiError> {
    if method != Method::GET && method != Method::HEAD {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }

    let path = router::decode(uri.path());
    match router::resolve(&path) {
        Route::Health => Ok(health_handler().await.into_response()),
        Route::Hello => Ok(hello_handler().await.into_response()),
        Route::NotFound => {
            tracing::debug!("No API endpoint for path: {}", path);
            Err(ApiError::NotFound)
        }
        Route::StaticFallback => Ok(serve_entry_point(&state.config).await?.into_response()),
    }
}

async fn serve_entry_point(config: &Config) -> Result<Html<Vec<u8>>, ApiError> {
    let Some(index_path) = config.entry_point() else {
        tracing::debug!("No frontend build mounted, nothing to serve");
        return Err(ApiError::NotFound);
    };

    match tokio::fs::read(&index_path).await {
        Ok(contents) => Ok(Html(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("Entry point missing: {}", index_path.display());
            Err(ApiError::NotFound)
        }
        Err(err) => Err(anyhow::Error::new(err)
            .context(format!("Failed to read {}", index_path.display()))
            .into()),
    }
}
