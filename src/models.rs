use serde::{Deserialize, Serialize};

/// Response type for the health check endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            message: "Backend is running".to_string(),
        }
    }
}

/// Response type for the hello endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct HelloResponse {
    pub message: String,
}

impl HelloResponse {
    pub fn greeting() -> Self {
        Self {
            message: "Hello from FastAPI!".to_string(),
        }
    }
}
