use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{self, CodeFile};
use crate::models::portfolio::PortfolioRow;
use crate::models::resume::ResumeData;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct DownloadQuery {
    pub user_id: Uuid,
    #[serde(default)]
    pub standalone: bool,
}

#[derive(Deserialize)]
pub struct CreatePortfolioRequest {
    pub user_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub data: ResumeData,
}

#[derive(Deserialize)]
pub struct UpdatePortfolioRequest {
    pub user_id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub data: Option<ResumeData>,
}

#[derive(Serialize)]
pub struct DownloadResponse {
    pub files: Vec<CodeFile>,
}

/// Fetches a portfolio by id, enforcing ownership. A record owned by another
/// user is indistinguishable from a missing one.
async fn fetch_owned(db: &PgPool, id: Uuid, user_id: Uuid) -> Result<PortfolioRow, AppError> {
    let row: Option<PortfolioRow> =
        sqlx::query_as("SELECT * FROM portfolios WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(db)
            .await?;
    row.ok_or_else(|| AppError::NotFound(format!("Portfolio {id} not found")))
}

/// Deserializes the stored data blob back into `ResumeData`. A blob that no
/// longer matches the wire shape means the record was corrupted out of band.
fn resume_data_from_row(row: &PortfolioRow) -> Result<ResumeData, AppError> {
    let mut data: ResumeData = serde_json::from_value(row.data.clone()).map_err(|e| {
        AppError::UnprocessableEntity(format!("Stored portfolio data is invalid: {e}"))
    })?;
    data.normalize();
    Ok(data)
}

/// GET /api/v1/portfolios
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<PortfolioRow>>, AppError> {
    let rows: Vec<PortfolioRow> =
        sqlx::query_as("SELECT * FROM portfolios WHERE user_id = $1 ORDER BY updated_at DESC")
            .bind(params.user_id)
            .fetch_all(&state.db)
            .await?;
    Ok(Json(rows))
}

/// POST /api/v1/portfolios
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<CreatePortfolioRequest>,
) -> Result<(StatusCode, Json<PortfolioRow>), AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("title must not be empty".to_string()));
    }

    let mut data = req.data;
    data.normalize();

    let row: PortfolioRow = sqlx::query_as(
        r#"
        INSERT INTO portfolios (user_id, title, description, data)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(req.user_id)
    .bind(req.title.trim())
    .bind(&req.description)
    .bind(serde_json::to_value(&data).map_err(anyhow::Error::from)?)
    .fetch_one(&state.db)
    .await?;

    info!("Portfolio {} created", row.id);
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/portfolios/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<PortfolioRow>, AppError> {
    let row = fetch_owned(&state.db, id, params.user_id).await?;
    Ok(Json(row))
}

/// PUT /api/v1/portfolios/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePortfolioRequest>,
) -> Result<Json<PortfolioRow>, AppError> {
    let existing = fetch_owned(&state.db, id, req.user_id).await?;

    let title = match req.title {
        Some(t) if !t.trim().is_empty() => t.trim().to_string(),
        Some(_) => return Err(AppError::Validation("title must not be empty".to_string())),
        None => existing.title,
    };
    let description = req.description.unwrap_or(existing.description);
    let data_value = match req.data {
        Some(mut data) => {
            data.normalize();
            serde_json::to_value(&data).map_err(anyhow::Error::from)?
        }
        None => existing.data,
    };

    let row: PortfolioRow = sqlx::query_as(
        r#"
        UPDATE portfolios
        SET title = $1, description = $2, data = $3, updated_at = NOW()
        WHERE id = $4 AND user_id = $5
        RETURNING *
        "#,
    )
    .bind(&title)
    .bind(&description)
    .bind(&data_value)
    .bind(id)
    .bind(req.user_id)
    .fetch_one(&state.db)
    .await?;

    info!("Portfolio {} updated", row.id);
    Ok(Json(row))
}

/// DELETE /api/v1/portfolios/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM portfolios WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(params.user_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Portfolio {id} not found")));
    }

    info!("Portfolio {id} deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/portfolios/:id/download
///
/// Returns the exportable file set as JSON. `?standalone=true` appends the
/// single-file variant with styles and scripts inlined.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<DownloadQuery>,
) -> Result<Json<DownloadResponse>, AppError> {
    let row = fetch_owned(&state.db, id, params.user_id).await?;
    let data = resume_data_from_row(&row)?;

    let files = export::portfolio_files(&data, params.standalone);
    info!("Portfolio {} exported ({} files)", id, files.len());
    Ok(Json(DownloadResponse { files }))
}

/// GET /api/v1/portfolios/:id/preview
///
/// Renders the portfolio as a single self-contained HTML document, suitable
/// for an iframe srcdoc or direct browser viewing.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Html<String>, AppError> {
    let row = fetch_owned(&state.db, id, params.user_id).await?;
    let data = resume_data_from_row(&row)?;
    Ok(Html(export::standalone_document(&data)))
}
