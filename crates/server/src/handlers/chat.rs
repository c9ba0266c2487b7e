//! # Conversational Endpoint
//!
//! The `/api/chat` handler runs the full pipeline for one question. Each
//! request is stateless: no conversation memory, no prompt caching, a fresh
//! data fetch per data-dependent question.

use crate::{
    errors::AppError,
    state::AppState,
    types::{ChatRequest, ChatResponse},
};
use axum::{extract::State, Json};
use tracing::info;

/// Answers one user question.
///
/// A failing model call is not an error here: the pipeline substitutes the
/// gateway fallback text and this handler still returns HTTP success.
/// Unexpected pipeline faults surface as `AppError::Pipeline` and become a
/// structured error response at the boundary.
pub async fn chat_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    info!("Received chat message: '{}'", payload.message);

    let reply = app_state.chat_client.answer(&payload.message).await?;

    Ok(Json(ChatResponse { response: reply }))
}
