use anyhow::Context;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the global Prometheus recorder. Safe to call more than once.
pub fn init() -> anyhow::Result<()> {
    HANDLE.get_or_try_init(|| {
        PrometheusBuilder::new()
            .install_recorder()
            .context("install prometheus recorder")
    })?;
    Ok(())
}

/// Text exposition of everything recorded so far, `None` before `init`.
pub fn render() -> Option<String> {
    HANDLE.get().map(PrometheusHandle::render)
}
