pub mod api_doc;
pub mod app;
pub mod assets;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod orchestrator;
pub mod router;
pub mod routes;
pub mod state;
pub mod telemetry;
