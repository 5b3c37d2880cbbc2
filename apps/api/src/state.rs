use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::extraction::parser::ResumeExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable resume structuring backend. Default: LlmResumeExtractor.
    pub extractor: Arc<dyn ResumeExtractor>,
}
