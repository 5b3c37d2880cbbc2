use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generator::{self, GeneratedPortfolio};
use crate::models::resume::ResumeData;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub portfolio_data: ResumeData,
}

/// POST /api/v1/portfolios/generate
///
/// Stateless generation: takes resume data in the request body and returns
/// the HTML/CSS/JS bundle without touching the database. Used by the preview
/// editor to re-render after client-side edits.
pub async fn handle_generate(
    State(_state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GeneratedPortfolio>, AppError> {
    let mut data = req.portfolio_data;
    data.normalize();

    let category = generator::effective_category(&data);
    info!("Generating portfolio bundle (category: {category})");

    Ok(Json(generator::generate(&data)))
}
