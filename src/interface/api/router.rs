//! API Router configuration

use super::metrics_handler::metrics_handler;
use super::voice_handler::{health_check, incoming_call_form, incoming_call_query, AppState};
use axum::{routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

/// Build the API router
pub fn build_router(state: AppState, prometheus_handle: PrometheusHandle) -> Router {
    let webhook_path = state.webhook.path.clone();

    // Health check route
    let health_routes = Router::new().route("/health", get(health_check));

    // Voice webhook, the platform may be configured for either method
    let voice_routes = Router::new().route(
        &webhook_path,
        get(incoming_call_query).post(incoming_call_form),
    );

    // Metrics route (separate state)
    let metrics_routes = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(prometheus_handle);

    Router::new()
        .merge(health_routes)
        .merge(voice_routes)
        .with_state(state)
        .merge(metrics_routes)
        .layer(TraceLayer::new_for_http())
}
