use config::{Config as Cfg, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;

/// Settings shared by every service: where to listen and how loud to log.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

/// Configuration sources in precedence order: an optional `configuration.*`
/// file, then `APP__`-prefixed environment variables (`APP__INFERENCE__MODEL`
/// maps to `inference.model`). Services layer their own defaults on top.
pub fn sources() -> ConfigBuilder<DefaultState> {
    dotenvy::dotenv().ok();

    Cfg::builder()
        .add_source(File::with_name("configuration").required(false))
        .add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        )
}
