//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ChatRequest, ChatResponse, ErrorBody, HealthStatus, ModelDescriptor, ModelList};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::health_check,
        super::chat::chat,
        super::models::list_models,
    ),
    info(
        title = "Persona Chatbot API",
        version = "0.1.0",
        description = "Chat with a configured persona, backed by Gemini with a fallback model.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Chat", description = "Persona chat"),
        (name = "Models", description = "Diagnostic model listing"),
    ),
    components(
        schemas(
            ChatRequest,
            ChatResponse,
            ModelDescriptor,
            ModelList,
            HealthStatus,
            ErrorBody,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/chat"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/models"));
        assert_eq!(doc.info.title, "Persona Chatbot API");
    }
}
