//! Chat Application Service (Use Case)
//!
//! Renders the persona prompt for a message and runs it through the
//! generation client.

use std::sync::Arc;

use persona::{build_prompt, DomainError, GenerationProvider, PersonaProfile};

use super::GenerationClient;

/// Application service for chat operations
pub struct ChatService<P: GenerationProvider + ?Sized> {
    persona: Arc<PersonaProfile>,
    generator: GenerationClient<P>,
}

impl<P: GenerationProvider + ?Sized> ChatService<P> {
    pub fn new(persona: Arc<PersonaProfile>, generator: GenerationClient<P>) -> Self {
        Self { persona, generator }
    }

    pub fn persona(&self) -> &PersonaProfile {
        &self.persona
    }

    /// Answer `message` in character
    pub async fn chat(&self, message: &str) -> Result<String, DomainError> {
        if message.trim().is_empty() {
            return Err(DomainError::Validation("message must not be empty".to_string()));
        }

        let prompt = build_prompt(&self.persona, message);
        let response = self.generator.generate(&prompt).await?;

        tracing::info!(
            "Chat as {}: {} chars in, {} chars out",
            self.persona.display_name(),
            message.len(),
            response.len()
        );

        Ok(response)
    }

    /// Model identifiers available to the configured credential
    pub async fn list_models(&self) -> Result<Vec<String>, DomainError> {
        self.generator
            .list_models()
            .await
            .map_err(|e| DomainError::ExternalService(e.to_string()))
    }
}
