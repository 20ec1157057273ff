mod config;
mod errors;
mod models;
mod routes;
mod service;
mod upstream;

use tracing::info;

use crate::config::ServerConfig;
use crate::routes::build_router;
use crate::service::proxy_service::ProxyService;
use crate::upstream::UpstreamClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_site=debug,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env();
    info!(
        chat = %config.chat_upstream_url,
        stats = %config.stats_upstream_url,
        static_dir = %config.static_dir.display(),
        "Configuration loaded"
    );

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let upstream = UpstreamClient::new(config.upstream_timeout)?;
    let proxy = ProxyService::new(
        upstream,
        config.chat_upstream_url.clone(),
        config.stats_upstream_url.clone(),
    );

    // ── Router ────────────────────────────────────────────────────────────────
    let app = build_router(proxy, &config);

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}
