use anyhow::Result;
use dashboard_service::{
    api::{self, AppState},
    config::AppConfig,
    load_snapshot, observability,
};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    // Load configuration
    let cfg = AppConfig::load()?;

    let metrics = if cfg.metrics_enabled() {
        Some(observability::install_metrics_recorder()?)
    } else {
        None
    };

    // The snapshot is read once and shared read-only by every request.
    let snapshot = load_snapshot(&cfg.source.path, cfg.source.format, cfg.source.strict).await?;
    if snapshot.skipped() > 0 {
        tracing::warn!(skipped = snapshot.skipped(), "some readings were skipped during load");
    }

    let addr: SocketAddr = cfg
        .http
        .bind_addr
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid http.bind_addr: {e}"))?;

    let app = api::create_router(AppState::new(snapshot, metrics));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "dashboard API listening");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
