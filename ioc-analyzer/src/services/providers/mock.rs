//! Mock provider implementation for testing.

use super::{GenerationParams, InferenceProvider, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;

enum Behavior {
    Respond(String),
    Fail,
}

/// Scripted provider: either always answers with a fixed text or always
/// fails as if the inference server were unreachable. Prompts are recorded.
pub struct MockInferenceProvider {
    behavior: Behavior,
    prompts: Mutex<Vec<String>>,
}

impl MockInferenceProvider {
    pub fn responding(text: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Respond(text.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            behavior: Behavior::Fail,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl InferenceProvider for MockInferenceProvider {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.behavior {
            Behavior::Respond(text) => Ok(text.clone()),
            Behavior::Fail => Err(ProviderError::NetworkError(
                "connection refused (mock)".to_string(),
            )),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match self.behavior {
            Behavior::Respond(_) => Ok(()),
            Behavior::Fail => Err(ProviderError::NetworkError(
                "connection refused (mock)".to_string(),
            )),
        }
    }
}
