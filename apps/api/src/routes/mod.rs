pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers;
use crate::state::AppState;
use crate::templates::handlers::handle_list_templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Templates
        .route("/api/v1/templates", get(handle_list_templates))
        // Preview (HTML only, never rasterized here)
        .route("/api/v1/preview", post(handlers::handle_preview_record))
        .route(
            "/api/v1/resumes/:id/preview",
            get(handlers::handle_resume_preview),
        )
        .route(
            "/api/v1/cover-letters/:id/preview",
            get(handlers::handle_cover_letter_preview),
        )
        // Export (PDF, falling back to HTML)
        .route(
            "/api/v1/resumes/:id/export",
            get(handlers::handle_resume_export),
        )
        .route(
            "/api/v1/cover-letters/:id/export",
            get(handlers::handle_cover_letter_export),
        )
        .with_state(state)
}
