use ioc_analyzer::config::AnalyzerConfig;
use ioc_analyzer::startup::Application;
use service_core::observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AnalyzerConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing(
        "ioc-analyzer",
        &config.common.log_level,
        otlp_endpoint.as_deref(),
    );

    let metrics = init_metrics();

    let app = Application::build(config, metrics).await?;
    tracing::info!(port = app.port(), "Starting ioc-analyzer");

    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
