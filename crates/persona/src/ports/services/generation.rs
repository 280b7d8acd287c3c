//! Generation Provider Port
//!
//! Abstract interface for the remote generative-language API.
//! Implementations can be swapped between providers (Gemini, test doubles).

use async_trait::async_trait;

use crate::domain::errors::ProviderError;

/// Text generation provider
///
/// Each call is a single attempt against a single model. Retry and
/// fallback policy belong to the caller.
///
/// # Example
///
/// ```rust,ignore
/// use persona::ports::GenerationProvider;
///
/// struct GeminiProvider { /* ... */ }
///
/// #[async_trait]
/// impl GenerationProvider for GeminiProvider {
///     async fn generate_content(&self, model: &str, prompt: &str)
///         -> Result<String, ProviderError> {
///         // Call generateContent
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generate text for `prompt` with the given model
    async fn generate_content(&self, model: &str, prompt: &str) -> Result<String, ProviderError>;

    /// List the model identifiers available to this credential
    async fn list_models(&self) -> Result<Vec<String>, ProviderError>;

    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;
}
