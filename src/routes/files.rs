use axum::{extract::Multipart, routing::post, Json, Router};
use crate::documents::{self, UploadedDocument, PREVIEW_CHARS};
use crate::models::UploadResponse;
use crate::types::{AppError, AppResult};
use tracing::info;

pub fn router() -> Router {
    Router::new().route("/api/files", post(upload_file))
}

/// POST /api/files - Extract text from an uploaded PDF or DOCX
async fn upload_file(mut multipart: Multipart) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidRequest(format!("malformed upload: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::InvalidRequest("file field has no file name".to_string()))?;
        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidRequest(format!("failed to read upload: {}", e)))?;

        info!(filename = %filename, bytes = content.len(), "File upload received");

        let document = UploadedDocument::new(filename.clone(), content.to_vec());
        let format = document.format();
        let text = tokio::task::spawn_blocking(move || documents::extract_text(&document))
            .await
            .map_err(|e| AppError::Internal(format!("extraction task failed: {}", e)))??;

        return Ok(Json(UploadResponse {
            preview: documents::preview(&text, PREVIEW_CHARS).to_string(),
            characters: text.chars().count(),
            filename,
            format,
            text,
        }));
    }

    Err(AppError::InvalidRequest("missing 'file' field".to_string()))
}
