pub mod api_routes;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;
use crate::service::proxy_service::ProxyService;
use api_routes::{chat_proxy_handler, health_handler, leetcode_proxy_handler};

/// API routes plus the built frontend as the fallback.
pub fn build_router(service: ProxyService, config: &ServerConfig) -> Router {
    let index = config.static_dir.join("index.html");
    let static_files = ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(index));

    let mut app = Router::new()
        .route("/api/chat", post(chat_proxy_handler))
        .route("/api/leetcode", post(leetcode_proxy_handler))
        .route("/health", get(health_handler))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(service);

    if let Some(origin) = &config.cors_allow_origin {
        match origin.parse::<HeaderValue>() {
            Ok(origin) => {
                app = app.layer(
                    CorsLayer::new()
                        .allow_origin(origin)
                        .allow_methods([Method::GET, Method::POST])
                        .allow_headers([header::CONTENT_TYPE]),
                );
            }
            Err(e) => warn!("Ignoring invalid CORS_ALLOW_ORIGIN {origin:?}: {e}"),
        }
    }

    app
}
