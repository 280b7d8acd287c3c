//! Persona Chatbot API Server
//!
//! HTTP surface, configuration and infrastructure adapters for the
//! [`persona`] domain crate.

use std::sync::Arc;

use axum::Router;
use persona::GenerationProvider;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod adapters;
pub mod application;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;

#[cfg(test)]
mod testing;

use adapters::{persona_file, GeminiProvider};
use application::{ChatService, GenerationClient};
use config::ServerConfig;

/// Chat service over whichever provider was configured at startup
pub type AppChatService = ChatService<dyn GenerationProvider>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<AppChatService>,
}

impl AppState {
    pub fn new(chat_service: Arc<AppChatService>) -> Self {
        Self { chat_service }
    }

    /// Wire the Gemini provider, fallback models and persona from `config`
    ///
    /// Loads the persona document; this is the only place it is read.
    pub fn from_config(config: &ServerConfig) -> Self {
        let persona = Arc::new(persona_file::load(&config.persona_path));
        let provider: Arc<dyn GenerationProvider> = Arc::new(
            GeminiProvider::new(config.api_key.clone()).with_base_url(config.gemini_base_url.clone()),
        );
        let generator = GenerationClient::new(
            provider,
            config.primary_model.clone(),
            config.fallback_model.clone(),
        );

        Self::new(Arc::new(ChatService::new(persona, generator)))
    }
}

/// Build the full router with docs, tracing and permissive CORS
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi))
        .merge(routes::health::router())
        .merge(routes::chat::router())
        .merge(routes::models::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedProvider;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use persona::{PersonaProfile, ProviderError};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const PRIMARY: &str = "gemini-2.5-flash-preview-04-17";
    const FALLBACK: &str = "gemini-2.0-flash-001";

    fn app(provider: ScriptedProvider) -> (Arc<ScriptedProvider>, Router) {
        let provider = Arc::new(provider);
        let dyn_provider: Arc<dyn GenerationProvider> = provider.clone();
        let generator = GenerationClient::new(dyn_provider, PRIMARY, FALLBACK);
        let service = ChatService::new(Arc::new(PersonaProfile::default()), generator);
        (provider, build_router(AppState::new(Arc::new(service))))
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[test]
    fn test_state_from_config_falls_back_to_default_persona() {
        let config = ServerConfig::new("key")
            .with_persona_path(std::env::temp_dir().join("persona-state-missing.json"));

        let state = AppState::from_config(&config);
        assert_eq!(state.chat_service.persona(), &PersonaProfile::default());
    }

    #[tokio::test]
    async fn test_root_is_online() {
        let (_, router) = app(ScriptedProvider::new());
        let (status, body) = send(router, get("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"status": "online", "message": "Persona Chatbot API is running"})
        );
    }

    #[tokio::test]
    async fn test_chat_primary_reply() {
        let (provider, router) =
            app(ScriptedProvider::new().reply(PRIMARY, "I love tinkering with gadgets!"));

        let (status, body) =
            send(router, chat_request(r#"{"message": "What's your favorite hobby?"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"response": "I love tinkering with gadgets!"}));
        assert_eq!(provider.calls(), vec![PRIMARY]);
    }

    #[tokio::test]
    async fn test_chat_fallback_reply() {
        let (provider, router) = app(
            ScriptedProvider::new()
                .fail(PRIMARY, ProviderError::RequestFailed("operation timed out".to_string()))
                .reply(FALLBACK, "Fallback answer"),
        );

        let (status, body) = send(router, chat_request(r#"{"message": "Hello"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"response": "Fallback answer"}));
        assert_eq!(provider.calls(), vec![PRIMARY, FALLBACK]);
    }

    #[tokio::test]
    async fn test_chat_all_models_fail() {
        let (_, router) = app(
            ScriptedProvider::new()
                .fail(PRIMARY, ProviderError::RequestFailed("operation timed out".to_string()))
                .fail(
                    FALLBACK,
                    ProviderError::ApiError {
                        status: 503,
                        message: "model overloaded".to_string(),
                    },
                ),
        );

        let (status, body) = send(router, chat_request(r#"{"message": "Hello"}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.starts_with("Error generating response: Error with all models:"));
        assert!(detail.contains("operation timed out"));
        assert!(detail.contains("model overloaded"));
    }

    #[tokio::test]
    async fn test_chat_error_detail_hides_api_key() {
        let mut config = ServerConfig::new("SECRET-KEY-123");
        config.gemini_base_url = "http://127.0.0.1:1/v1beta".to_string();
        config.persona_path = std::env::temp_dir().join("persona-key-missing.json");
        let router = build_router(AppState::from_config(&config));

        let (status, body) = send(router, chat_request(r#"{"message": "Hello"}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.contains("Request failed"));
        assert!(!detail.contains("SECRET-KEY-123"), "key leaked: {detail}");
    }

    #[tokio::test]
    async fn test_chat_missing_message_is_422() {
        let (provider, router) = app(ScriptedProvider::new().reply(PRIMARY, "unused"));

        let (status, body) = send(router, chat_request(r#"{"text": "Hello"}"#)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("message"));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_chat_invalid_json_is_422() {
        let (_, router) = app(ScriptedProvider::new());
        let (status, body) = send(router, chat_request("{not json")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_chat_blank_message_is_422() {
        let (provider, router) = app(ScriptedProvider::new().reply(PRIMARY, "unused"));
        let (status, _) = send(router, chat_request(r#"{"message": "  "}"#)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_list_models() {
        let (_, router) = app(ScriptedProvider::new().models(Ok(vec![
            "models/gemini-2.0-flash-001".to_string(),
            "models/gemini-2.5-flash-preview-04-17".to_string(),
        ])));

        let (status, body) = send(router, get("/api/models")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"models": [
                {"name": "models/gemini-2.0-flash-001"},
                {"name": "models/gemini-2.5-flash-preview-04-17"}
            ]})
        );
    }

    #[tokio::test]
    async fn test_list_models_failure_is_500() {
        let (_, router) = app(ScriptedProvider::new().models(Err(ProviderError::ApiError {
            status: 400,
            message: "API key not valid".to_string(),
        })));

        let (status, body) = send(router, get("/api/models")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["detail"],
            "Error listing models: API error (400): API key not valid"
        );
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let (_, router) = app(ScriptedProvider::new());
        let request = Request::builder()
            .uri("/")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let (_, router) = app(ScriptedProvider::new());
        let (status, body) = send(router, get("/openapi.json")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"]["title"], "Persona Chatbot API");
    }
}
