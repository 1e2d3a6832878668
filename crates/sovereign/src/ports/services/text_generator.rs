//! Text Generator Port
//!
//! Abstract interface for a remote text-generation service.
//! The provider behind it (Gemini today) can be swapped without touching
//! the advisory logic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Sampling options for a generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Temperature (0.0 - 2.0)
    pub temperature: f32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self { temperature: 0.8 }
    }
}

/// One generation call: persona instructions plus the per-call prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// System-level instructions applied by the service
    pub system_instruction: String,
    /// User content for this call
    pub prompt: String,
    pub options: GenerationOptions,
}

impl GenerationRequest {
    pub fn new(system_instruction: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            prompt: prompt.into(),
            options: GenerationOptions::default(),
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.options.temperature = temperature;
        self
    }
}

/// Response from the generation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Generated text; `None` when the service answered with no text
    pub text: Option<String>,
    /// Model that generated the response
    pub model: String,
}

/// Text generation interface
///
/// # Example
///
/// ```rust,ignore
/// use sovereign::ports::TextGenerator;
///
/// struct GeminiGenerator { /* ... */ }
///
/// #[async_trait]
/// impl TextGenerator for GeminiGenerator {
///     async fn generate(
///         &self,
///         request: &GenerationRequest,
///     ) -> Result<GenerationResponse, DomainError> {
///         // Call Gemini generateContent
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a request
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, DomainError>;

    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
