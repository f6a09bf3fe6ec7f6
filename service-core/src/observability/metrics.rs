use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder behind the `metrics` facade and return a
/// handle for rendering the exposition text.
///
/// Safe to call more than once; later calls return the first handle.
pub fn init_metrics() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let recorder = PrometheusBuilder::new().build_recorder();
            let handle = recorder.handle();
            if let Err(e) = metrics::set_global_recorder(recorder) {
                tracing::warn!("Metrics recorder already installed: {}", e);
            }
            handle
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent_and_renders_counters() {
        let first = init_metrics();
        let second = init_metrics();

        metrics::counter!("observability_test_total").increment(1);

        assert!(first.render().contains("observability_test_total"));
        assert!(second.render().contains("observability_test_total"));
    }
}
