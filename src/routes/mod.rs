//! API Routes
//!
//! - `/` - Single-page study helper UI
//! - `/api/files` - Upload a PDF/DOCX and extract its text
//! - `/api/ask` - Generate a mark-weighted answer
//! - `/api/export/*` - Download or print the extracted text
//! - `/api/health` - Health check

pub mod ask;
pub mod export;
pub mod files;
pub mod health;
pub mod ui;

use axum::{extract::DefaultBodyLimit, Router};
use crate::middleware;
use crate::models::AppState;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let api_router = Router::new()
        .merge(files::router())
        .merge(ask::router(state.clone()))
        .merge(export::router())
        .merge(health::router(state.clone()));

    let router = Router::new()
        .merge(api_router)
        .merge(ui::router())
        .layer(DefaultBodyLimit::max(state.config.server.max_upload_bytes))
        .layer(TraceLayer::new_for_http());

    middleware::apply_cors(router, &state.config.server.cors_allowed_origins)
}
