//! Model Routes - Diagnostic listing of available models

use axum::{extract::State, routing::get, Json, Router};

use crate::error::ApiError;
use crate::models::{ErrorBody, ModelList};
use crate::AppState;

/// List models available to the configured API key
#[utoipa::path(
    get,
    path = "/api/models",
    responses(
        (status = 200, description = "Available models", body = ModelList),
        (status = 500, description = "Listing failed", body = ErrorBody)
    ),
    tag = "Models"
)]
pub async fn list_models(State(state): State<AppState>) -> Result<Json<ModelList>, ApiError> {
    let names = state
        .chat_service
        .list_models()
        .await
        .map_err(ApiError::models)?;

    tracing::info!("Listed {} models", names.len());

    Ok(Json(names.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/models", get(list_models))
}
