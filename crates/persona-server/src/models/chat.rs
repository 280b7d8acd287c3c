//! Chat API models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Chat request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// Message from the user
    #[schema(example = "What's your favorite hobby?")]
    pub message: String,
}

/// Chat response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    /// Reply generated in character
    pub response: String,
}

/// A model available to the configured credential
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModelDescriptor {
    #[schema(example = "models/gemini-2.0-flash-001")]
    pub name: String,
}

/// Model listing response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModelList {
    pub models: Vec<ModelDescriptor>,
}

impl From<Vec<String>> for ModelList {
    fn from(names: Vec<String>) -> Self {
        Self {
            models: names
                .into_iter()
                .map(|name| ModelDescriptor { name })
                .collect(),
        }
    }
}

/// Liveness payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "online")]
    pub status: String,
    pub message: String,
}

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}
