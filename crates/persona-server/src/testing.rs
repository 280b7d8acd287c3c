//! In-memory provider for unit tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use persona::{GenerationProvider, ProviderError};

/// Provider that answers from a per-model script and records every call
#[derive(Default)]
pub struct ScriptedProvider {
    replies: HashMap<String, Result<String, ProviderError>>,
    models: Option<Result<Vec<String>, ProviderError>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, model: &str, text: &str) -> Self {
        self.replies.insert(model.to_string(), Ok(text.to_string()));
        self
    }

    pub fn fail(mut self, model: &str, error: ProviderError) -> Self {
        self.replies.insert(model.to_string(), Err(error));
        self
    }

    pub fn models(mut self, result: Result<Vec<String>, ProviderError>) -> Self {
        self.models = Some(result);
        self
    }

    /// Models passed to `generate_content`, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationProvider for ScriptedProvider {
    async fn generate_content(&self, model: &str, _prompt: &str) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(model.to_string());
        self.replies
            .get(model)
            .cloned()
            .unwrap_or_else(|| Err(ProviderError::RequestFailed(format!("no script for {}", model))))
    }

    async fn list_models(&self) -> Result<Vec<String>, ProviderError> {
        self.models.clone().unwrap_or_else(|| Ok(vec![]))
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}
