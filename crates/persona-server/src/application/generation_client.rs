//! Generation Client - primary model with a single fallback
//!
//! Every attempt yields a `Result`; the fallback is a plain sequential
//! check. There is exactly one fallback attempt and no backoff.

use std::sync::Arc;

use persona::{GenerationError, GenerationProvider, ProviderError};

/// Two-tier generation over a [`GenerationProvider`]
pub struct GenerationClient<P: GenerationProvider + ?Sized> {
    provider: Arc<P>,
    primary_model: String,
    secondary_model: String,
}

impl<P: GenerationProvider + ?Sized> GenerationClient<P> {
    pub fn new(
        provider: Arc<P>,
        primary_model: impl Into<String>,
        secondary_model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            primary_model: primary_model.into(),
            secondary_model: secondary_model.into(),
        }
    }

    pub fn primary_model(&self) -> &str {
        &self.primary_model
    }

    pub fn secondary_model(&self) -> &str {
        &self.secondary_model
    }

    /// Generate text for `prompt`, falling back to the secondary model once
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let primary = match self.attempt(&self.primary_model, prompt).await {
            Ok(text) => return Ok(text),
            Err(e) => e,
        };

        tracing::warn!(
            "Error with primary model {}: {} - trying {}",
            self.primary_model,
            primary,
            self.secondary_model
        );

        match self.attempt(&self.secondary_model, prompt).await {
            Ok(text) => Ok(text),
            Err(secondary) => {
                tracing::error!(
                    "Error with fallback model {}: {}",
                    self.secondary_model,
                    secondary
                );
                Err(GenerationError { primary, secondary })
            }
        }
    }

    /// List the provider's available model identifiers
    pub async fn list_models(&self) -> Result<Vec<String>, ProviderError> {
        self.provider.list_models().await
    }

    async fn attempt(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        tracing::debug!(
            "Generating with {} model {} ({} chars)",
            self.provider.provider_name(),
            model,
            prompt.len()
        );
        self.provider.generate_content(model, prompt).await
    }
}
