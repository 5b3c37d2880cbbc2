pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as extraction_handlers;
use crate::extraction::text::MAX_UPLOAD_BYTES;
use crate::generator::handlers as generator_handlers;
use crate::portfolios::handlers as portfolio_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume ingestion
        .route(
            "/api/v1/resumes/upload",
            post(extraction_handlers::handle_resume_upload),
        )
        // Portfolio CRUD
        .route(
            "/api/v1/portfolios",
            get(portfolio_handlers::handle_list).post(portfolio_handlers::handle_create),
        )
        .route(
            "/api/v1/portfolios/:id",
            get(portfolio_handlers::handle_get)
                .put(portfolio_handlers::handle_update)
                .delete(portfolio_handlers::handle_delete),
        )
        // Generation and delivery
        .route(
            "/api/v1/portfolios/generate",
            post(generator_handlers::handle_generate),
        )
        .route(
            "/api/v1/portfolios/:id/download",
            get(portfolio_handlers::handle_download),
        )
        .route(
            "/api/v1/portfolios/:id/preview",
            get(portfolio_handlers::handle_preview),
        )
        // Multipart uploads carry the file plus form fields; leave headroom
        // above the per-file ceiling enforced in extraction::text.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024))
        .with_state(state)
}
