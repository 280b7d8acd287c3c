//! Chat Routes - Persona chat via the generation client

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{ChatRequest, ChatResponse, ErrorBody};
use crate::AppState;

/// Answer a message in character
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Generated reply", body = ChatResponse),
        (status = 422, description = "Malformed request", body = ErrorBody),
        (status = 500, description = "All models failed", body = ErrorBody)
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(payload) = payload?;

    let response = state
        .chat_service
        .chat(&payload.message)
        .await
        .map_err(ApiError::chat)?;

    Ok(Json(ChatResponse { response }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/chat", post(chat))
}
