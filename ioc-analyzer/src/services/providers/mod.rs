//! Inference provider abstraction.
//!
//! The analyze handler only needs "prompt in, full text out". Providers hide
//! how the text is produced so the handler can run against a local Ollama
//! server in production and a scripted mock in tests.

pub mod mock;
pub mod ollama;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Inference server returned {status}: {body}")]
    StatusError { status: u16, body: String },

    #[error("Malformed stream record on line {line}: {reason}")]
    DecodeError { line: usize, reason: String },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Generation parameters for a single request.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    pub temperature: f32,
}

/// Trait for text generation backends.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Generate the complete response text for `prompt`.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
