use config::{builder::DefaultState, ConfigBuilder};
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::time::Duration;

/// Ollama-compatible generate endpoint on the local machine.
pub const DEFAULT_INFERENCE_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "tinyllama";

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub inference: InferenceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    /// Full URL of the generate endpoint.
    pub url: String,
    pub model: String,
    pub temperature: f32,
    /// Unset means the HTTP client default, which never times out.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl InferenceConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_INFERENCE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            timeout_secs: None,
        }
    }
}

impl AnalyzerConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_sources(core_config::sources())
    }

    /// Apply the inference defaults underneath `sources` and deserialize.
    pub fn from_sources(sources: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let config = sources
            .set_default("inference.url", DEFAULT_INFERENCE_URL)?
            .set_default("inference.model", DEFAULT_MODEL)?
            .set_default("inference.temperature", 0.0)?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Config as Cfg;

    #[test]
    fn falls_back_to_local_inference_defaults() {
        let config = AnalyzerConfig::from_sources(Cfg::builder()).expect("Failed to load config");

        assert_eq!(config.inference.url, DEFAULT_INFERENCE_URL);
        assert_eq!(config.inference.model, DEFAULT_MODEL);
        assert_eq!(config.inference.temperature, 0.0);
        assert!(config.inference.timeout().is_none());
        assert_eq!(config.common.host, "127.0.0.1");
        assert_eq!(config.common.port, 5000);
        assert_eq!(config.common.log_level, "info");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let sources = Cfg::builder()
            .set_override("port", 8080)
            .unwrap()
            .set_override("inference.model", "llama3")
            .unwrap()
            .set_override("inference.timeout_secs", 30)
            .unwrap();

        let config = AnalyzerConfig::from_sources(sources).expect("Failed to load config");

        assert_eq!(config.common.port, 8080);
        assert_eq!(config.inference.model, "llama3");
        assert_eq!(config.inference.url, DEFAULT_INFERENCE_URL);
        assert_eq!(config.inference.timeout(), Some(Duration::from_secs(30)));
    }
}
