//! Health Routes

use axum::{routing::get, Json, Router};

use crate::models::HealthStatus;
use crate::AppState;

/// Liveness check
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API is running", body = HealthStatus)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "online".to_string(),
        message: "Persona Chatbot API is running".to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}
