use axum::{extract::State, routing::post, Json, Router};
use crate::agents;
use crate::models::{AppState, AskOutcome, AskRequest};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/ask", post(ask))
        .with_state(state)
}

/// POST /api/ask - Generate a mark-weighted answer from the extracted notes
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Json<AskOutcome> {
    info!(
        question_len = request.question.len(),
        marks = %request.marks,
        "Received ask request"
    );

    let outcome = agents::answer_question(
        &state.agent,
        &request.text,
        &request.question,
        request.marks,
    )
    .await;

    Json(outcome)
}
