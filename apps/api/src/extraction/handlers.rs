use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::text::extract_text;
use crate::models::portfolio::PortfolioRow;
use crate::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub portfolio: PortfolioRow,
}

/// POST /api/v1/resumes/upload
///
/// Multipart form with a `file` part (PDF or plain text) and a `user_id`
/// part. Extracts text, structures it with the LLM, and persists the result
/// as a new portfolio record.
pub async fn handle_resume_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file_bytes: Option<Vec<u8>> = None;
    let mut mime_type = String::new();
    let mut user_id: Option<Uuid> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        match field.name() {
            Some("file") => {
                mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?;
                file_bytes = Some(bytes.to_vec());
            }
            Some("user_id") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read user_id: {e}")))?;
                user_id = Some(
                    raw.trim()
                        .parse()
                        .map_err(|_| AppError::Validation("user_id must be a UUID".to_string()))?,
                );
            }
            _ => {} // ignore unknown parts
        }
    }

    let file_bytes = file_bytes
        .ok_or_else(|| AppError::Validation("Missing 'file' part in upload".to_string()))?;
    let user_id =
        user_id.ok_or_else(|| AppError::Validation("Missing 'user_id' part in upload".to_string()))?;

    info!(
        "Resume upload: {} bytes, mime {}, user {}",
        file_bytes.len(),
        mime_type,
        user_id
    );

    let resume_text = extract_text(&file_bytes, &mime_type)?;
    let data = state.extractor.extract(&resume_text).await?;

    let name = data.personal_info.name.trim();
    let title = if name.is_empty() {
        "Portfolio".to_string()
    } else {
        format!("{name}'s Portfolio")
    };
    let description = data.summary.clone();

    let row: PortfolioRow = sqlx::query_as(
        r#"
        INSERT INTO portfolios (user_id, title, description, data)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&title)
    .bind(&description)
    .bind(serde_json::to_value(&data).map_err(anyhow::Error::from)?)
    .fetch_one(&state.db)
    .await?;

    info!("Portfolio {} created from resume upload", row.id);
    Ok(Json(UploadResponse { portfolio: row }))
}
