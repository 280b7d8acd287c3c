//! Domain Errors
//!
//! Error types for domain operations.

use std::time::Duration;

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Persona load error: {0}")]
    PersonaLoad(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("External service error: {0}")]
    ExternalService(String),
}

/// Failure of a single call to the generation provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Rate limited{}", retry_suffix(.retry_after))]
    RateLimited { retry_after: Option<Duration> },

    #[error("Model {model} returned no text")]
    EmptyResponse { model: String },
}

fn retry_suffix(retry_after: &Option<Duration>) -> String {
    retry_after
        .map(|d| format!(", retry after {:?}", d))
        .unwrap_or_default()
}

/// Both the primary and the fallback model failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error with all models: {primary} and {secondary}")]
pub struct GenerationError {
    pub primary: ProviderError,
    pub secondary: ProviderError,
}
