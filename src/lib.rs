// Study Helper - extract text from study notes and ask an LLM mark-weighted questions

pub mod config;
pub mod models;
pub mod types;
pub mod agents;
pub mod documents; // PDF/DOCX text extraction and exports
pub mod llm;
pub mod routes;
pub mod middleware;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
