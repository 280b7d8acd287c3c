//! Gemini generation provider
//!
//! Calls the Generative Language REST API directly:
//! `models/{model}:generateContent` for text and `models` for listing.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use persona::{GenerationProvider, ProviderError};
use reqwest::{
    header::{HeaderMap, RETRY_AFTER},
    Client, Response, StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// The API key is only ever sent in this header, never in a request URL.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini-backed [`GenerationProvider`]
#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiProvider {
    /// Creates a provider using the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the REST base URL (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/{}:generateContent", self.base_url, model_path(model))
    }

    fn models_url(&self) -> String {
        format!("{}/models", self.base_url)
    }
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    async fn generate_content(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.generate_url(model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(request_failed)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let payload: Value = response.json().await.map_err(parse_failed)?;

        extract_text(&payload).ok_or_else(|| ProviderError::EmptyResponse {
            model: model.to_string(),
        })
    }

    async fn list_models(&self) -> Result<Vec<String>, ProviderError> {
        let mut names = Vec::new();
        let mut seen_tokens = HashSet::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(self.models_url())
                .header(API_KEY_HEADER, &self.api_key);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = request.send().await.map_err(request_failed)?;

            if !response.status().is_success() {
                return Err(error_from_response(response).await);
            }

            let page: ListModelsResponse = response.json().await.map_err(parse_failed)?;
            names.extend(page.models.into_iter().map(|m| m.name));

            page_token = next_page_token(&mut seen_tokens, page.next_page_token);
            if page_token.is_none() {
                break;
            }
        }

        tracing::debug!("Gemini listed {} models", names.len());
        Ok(names)
    }

    fn provider_name(&self) -> &str {
        "google"
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
struct ModelEntry {
    name: String,
}

// ============================================
// Helper Functions
// ============================================

/// `gemini-2.0-flash` → `models/gemini-2.0-flash`; ids from the listing
/// endpoint already carry the prefix.
fn model_path(model: &str) -> String {
    if model.starts_with("models/") || model.starts_with("tunedModels/") {
        model.to_string()
    } else {
        format!("models/{}", model)
    }
}

/// Concatenate the text parts of the first candidate
fn extract_text(root: &Value) -> Option<String> {
    let parts = root
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn request_failed(err: reqwest::Error) -> ProviderError {
    ProviderError::RequestFailed(err.without_url().to_string())
}

fn parse_failed(err: reqwest::Error) -> ProviderError {
    ProviderError::ParseError(err.without_url().to_string())
}

/// Build the error for a non-2xx response; headers are read before the body
async fn error_from_response(response: Response) -> ProviderError {
    let status = response.status();
    let retry_after = parse_retry_after(response.headers());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error body".to_string());
    map_http_error(status, retry_after, body)
}

/// `Retry-After` in delay-seconds form; HTTP dates are ignored
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// Next token to request, or `None` when paging is done. A token the
/// server already handed out ends paging.
fn next_page_token(seen: &mut HashSet<String>, token: Option<String>) -> Option<String> {
    let token = token.filter(|t| !t.is_empty())?;
    if !seen.insert(token.clone()) {
        tracing::warn!("Gemini repeated page token {} - stopping model listing", token);
        return None;
    }
    Some(token)
}

fn map_http_error(status: StatusCode, retry_after: Option<Duration>, body: String) -> ProviderError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return ProviderError::RateLimited { retry_after };
    }

    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    ProviderError::ApiError {
        status: status.as_u16(),
        message,
    }
}
