//! Ollama provider implementation.
//!
//! Posts `{model, prompt, temperature}` to the generate endpoint and
//! reassembles the newline-delimited JSON stream it answers with.

use super::{GenerationParams, InferenceProvider, ProviderError};
use crate::config::InferenceConfig;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
}

/// One record of the streamed reply. Other fields (`done`, timings, context)
/// are ignored.
#[derive(Debug, Deserialize)]
struct GenerateChunk {
    response: String,
}

pub struct OllamaProvider {
    config: InferenceConfig,
    client: Client,
}

impl OllamaProvider {
    pub fn new(config: InferenceConfig) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ProviderError::NotConfigured(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// `/api/tags` on the same host as the generate endpoint.
    fn tags_url(&self) -> Result<Url, ProviderError> {
        Url::parse(&self.config.url)
            .and_then(|url| url.join("/api/tags"))
            .map_err(|e| ProviderError::NotConfigured(format!("{}: {}", self.config.url, e)))
    }
}

/// Concatenate the `response` field of every non-blank line, in order.
///
/// Any line that is not a JSON object with a string `response` fails the
/// whole body; partial output is never returned.
pub fn aggregate_stream(body: &str) -> Result<String, ProviderError> {
    body.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str::<GenerateChunk>(line)
                .map(|chunk| chunk.response)
                .map_err(|e| ProviderError::DecodeError {
                    line: idx + 1,
                    reason: e.to_string(),
                })
        })
        .collect()
}

#[async_trait]
impl InferenceProvider for OllamaProvider {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            temperature: params.temperature,
        };

        tracing::debug!(
            model = %self.config.model,
            prompt = %prompt,
            "Sending prompt to model"
        );

        let response = self
            .client
            .post(&self.config.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::StatusError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        let text = aggregate_stream(&body)?;

        tracing::debug!(
            model = %self.config.model,
            records = body.lines().filter(|l| !l.trim().is_empty()).count(),
            response_len = text.len(),
            "Assembled model response"
        );

        Ok(text)
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        let response = self
            .client
            .get(self.tags_url()?)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ProviderError::StatusError {
                status: response.status().as_u16(),
                body: String::new(),
            })
        }
    }
}
