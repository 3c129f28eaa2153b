use crate::handlers::health::health_check;
use crate::schemas::AppState;
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create application router: health check plus the static frontend bundle.
///
/// Unknown paths fall back to `index.html` so the host page always mounts
/// the dashboard.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let index = state.dist_dir.join("index.html");
    let assets = ServeDir::new(state.dist_dir.as_path()).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(assets)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}
