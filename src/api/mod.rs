//! NeuroLens Site Host
//!
//! HTTP layer that serves the compiled UI bundle, built with Axum. The pages
//! run entirely in the browser; the host only delivers files.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Landing page
//! - `GET /dashboard` - Text-preview simulator demo
//! - `GET /developer` - Developer portal demo
//!
//! All three return the bundle's `index.html`. Any other path is looked up in
//! the bundle directory; misses return `index.html` with a 404 status so the
//! client router can render its not-found page.
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use neurolens::api::{serve, AppState};
//! use neurolens::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(ServerConfig::default());
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::site::Route;

/// Build the site router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let mut page_routes = Router::new();
    for route in Route::ALL {
        page_routes = page_routes.route(route.path(), get(routes::site::app_shell));
    }

    let assets = ServeDir::new(state.dist_dir())
        .not_found_service(ServeFile::new(state.index_path()));

    let shared_state = Arc::new(state);

    page_routes
        .nest("/health", health_routes)
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the site host
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();

    if !state.has_ui_bundle() {
        tracing::warn!(
            "UI bundle not found in {:?}; pages will return 503 until it is built",
            state.dist_dir()
        );
    }

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("NeuroLens site listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("NeuroLens site shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::HealthResponse;
    use crate::config::ServerConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>NeuroLens</body></html>";

    fn create_test_app(with_bundle: bool) -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        if with_bundle {
            std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
            std::fs::write(dir.path().join("neurolens-ui.js"), "console.log('ui')").unwrap();
        }

        let config = ServerConfig {
            dist_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };

        (build_router(AppState::new(config)), dir)
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&bytes).to_string())
    }

    #[tokio::test]
    async fn test_pages_serve_app_shell() {
        for path in ["/", "/dashboard", "/developer"] {
            let (app, _dir) = create_test_app(true);
            let (status, body) = fetch(app, path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body, INDEX);
        }
    }

    #[tokio::test]
    async fn test_static_asset() {
        let (app, _dir) = create_test_app(true);
        let (status, body) = fetch(app, "/neurolens-ui.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("console.log"));
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_with_404() {
        let (app, _dir) = create_test_app(true);
        let (status, body) = fetch(app, "/settings").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_missing_bundle_is_unavailable() {
        let (app, _dir) = create_test_app(false);
        let (status, body) = fetch(app, "/dashboard").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "SERVICE_UNAVAILABLE");
        assert!(json["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(false);
        let (status, _) = fetch(app, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (app, _dir) = create_test_app(true);
        let (status, _) = fetch(app, "/health/ready").await;
        assert_eq!(status, StatusCode::OK);

        let (app, _dir) = create_test_app(false);
        let (status, _) = fetch(app, "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(false);
        let (status, body) = fetch(app, "/health").await;
        assert_eq!(status, StatusCode::OK);

        let health: HealthResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(health.status, "degraded");
        assert_eq!(health.ui_bundle, "missing");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }
}
