//! Rent Receipt API Server
//!
//! Provides REST endpoints for the two-stage receipt pipeline:
//! - Intermediate template generation (base template + tenant fields)
//! - Final document generation (intermediate template + month dates)
//! - Bulk generation for all twelve months of a year
//! - Template listing and document lookup

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod handlers;
mod models;
mod state;

use state::AppState;

fn app(state: Arc<AppState>) -> Router {
    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Generation endpoints
        .route(
            "/generate-intermediate-template",
            post(handlers::generate_intermediate_template),
        )
        .route("/generate-document", post(handlers::generate_document))
        .route(
            "/generate-all-documents",
            post(handlers::generate_all_documents),
        )
        // Listing and lookup
        .route("/list-base-templates", get(handlers::list_base_templates))
        .route(
            "/list-intermediate-templates",
            get(handlers::list_intermediate_templates),
        )
        .route("/document-info", get(handlers::document_info))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("receipt_api=info".parse()?)
                .add_directive("receipt_core=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Initialize application state (creates the store roots if missing)
    info!("Initializing receipt API...");
    let state = Arc::new(AppState::from_env()?);

    // Parse bind address
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting receipt API on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
