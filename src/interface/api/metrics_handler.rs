//! Prometheus metrics handler

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::{Duration, Instant};

const WEBHOOK_DURATION: &str = "voice_webhook_duration_seconds";

fn builder() -> Result<PrometheusBuilder, BuildError> {
    PrometheusBuilder::new().set_buckets_for_metric(
        Matcher::Full(WEBHOOK_DURATION.to_string()),
        &[0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0],
    )
}

/// Install the global Prometheus recorder. Call once per process.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = builder()?.install_recorder()?;

    describe_counter!(
        "voice_inbound_calls_total",
        "Inbound calls answered, by target kind"
    );
    describe_counter!(
        "voice_webhook_rejected_total",
        "Webhook requests rejected before routing"
    );
    describe_counter!(
        "voice_webhook_failures_total",
        "Webhook requests that failed to produce a voice response"
    );
    describe_histogram!(WEBHOOK_DURATION, "Webhook handling duration in seconds");

    Ok(handle)
}

/// Handle backed by a recorder that is not installed globally
pub fn detached_metrics() -> Result<PrometheusHandle, BuildError> {
    Ok(builder()?.build_recorder().handle())
}

/// HTTP metrics handler
pub async fn metrics_handler(State(prometheus_handle): State<PrometheusHandle>) -> Response {
    let metrics = prometheus_handle.render();
    (StatusCode::OK, metrics).into_response()
}

/// Record an answered inbound call
pub fn record_inbound_call(target: &'static str) {
    counter!("voice_inbound_calls_total", "target" => target).increment(1);
}

/// Record a webhook request rejected before routing
pub fn record_webhook_rejected(reason: &'static str) {
    counter!("voice_webhook_rejected_total", "reason" => reason).increment(1);
}

/// Record a webhook request that failed while answering
pub fn record_webhook_failure() {
    counter!("voice_webhook_failures_total").increment(1);
}

pub fn record_webhook_duration(duration: Duration) {
    histogram!(WEBHOOK_DURATION).record(duration.as_secs_f64());
}

/// Timer for measuring durations
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
