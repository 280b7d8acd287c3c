//! Persona Chatbot API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

/// API Client for the Persona Chatbot server
pub struct PersonaClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct ModelDescriptor {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ModelList {
    pub models: Vec<ModelDescriptor>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

impl PersonaClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Check the server is running
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Persona API")?;

        parse(resp).await
    }

    /// Send a message to the persona
    pub async fn chat(&self, message: &str) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .await
            .context("Failed to connect to Persona API")?;

        let chat: ChatResponse = parse(resp).await?;
        Ok(chat.response)
    }

    /// List models available to the server
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/models", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Persona API")?;

        let list: ModelList = parse(resp).await?;
        Ok(list.models.into_iter().map(|m| m.name).collect())
    }
}

async fn parse<T: for<'de> Deserialize<'de>>(resp: Response) -> Result<T> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("API error ({}): {}", status, error_detail(&body));
    }

    resp.json().await.context("Failed to parse response")
}

/// Pull `detail` out of an error body, or return the body unchanged
fn error_detail(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| body.to_string())
}
