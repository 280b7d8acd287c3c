//! HTTP error mapping
//!
//! Every failure leaves the API as `{"detail": "..."}` with a status code.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use persona::DomainError;
use thiserror::Error;

use crate::models::ErrorBody;

/// Errors returned by route handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request rejected before reaching business logic
    #[error("{0}")]
    Validation(String),

    #[error("Error generating response: {0}")]
    Generation(String),

    #[error("Error listing models: {0}")]
    ModelListing(String),
}

impl ApiError {
    /// Map a chat failure
    pub fn chat(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            other => Self::Generation(other.to_string()),
        }
    }

    /// Map a model listing failure
    pub fn models(err: DomainError) -> Self {
        match err {
            DomainError::ExternalService(msg) => Self::ModelListing(msg),
            other => Self::ModelListing(other.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Generation(_) | Self::ModelListing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
