use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::post,
    Json, Router,
};
use crate::documents::{render_printable, EXPORT_FILE_NAME};
use crate::models::ExportRequest;

pub fn router() -> Router {
    Router::new()
        .route("/api/export/text", post(download_text))
        .route("/api/export/print", post(printable_view))
}

/// POST /api/export/text - Extracted text as a UTF-8 attachment
async fn download_text(Json(request): Json<ExportRequest>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        request.text,
    )
}

/// POST /api/export/print - Printable HTML view of the extracted text
async fn printable_view(Json(request): Json<ExportRequest>) -> Html<String> {
    Html(render_printable(&request.text))
}
