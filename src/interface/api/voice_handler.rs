//! Inbound voice webhook handlers

use axum::{
    extract::{OriginalUri, Query, State},
    http::{header, HeaderMap, Uri},
    response::{IntoResponse, Response},
    Form, Json,
};
use std::sync::Arc;
use tracing::{error, warn};

use super::dto::ApiResponse;
use super::metrics_handler::{
    record_inbound_call, record_webhook_duration, record_webhook_failure, record_webhook_rejected,
    Timer,
};
use crate::application::InboundCallService;
use crate::config::WebhookConfig;
use crate::domain::call::CallEvent;
use crate::domain::shared::DomainError;
use crate::infrastructure::webhook::{SignatureValidator, SIGNATURE_HEADER};

/// Content type of voice response documents
pub const VOICE_RESPONSE_CONTENT_TYPE: &str = "text/xml";

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub calls: InboundCallService,
    pub webhook: Arc<WebhookConfig>,
    /// Present only when an auth token is configured
    pub validator: Option<Arc<SignatureValidator>>,
}

impl AppState {
    pub fn new(webhook: WebhookConfig) -> Self {
        let validator = if webhook.signature_checks_enabled() {
            webhook
                .auth_token
                .as_deref()
                .map(|token| Arc::new(SignatureValidator::new(token)))
        } else {
            None
        };

        Self {
            calls: InboundCallService::new(),
            webhook: Arc::new(webhook),
            validator,
        }
    }
}

/// POST webhook: parameters arrive form-encoded and are part of the signature
pub async fn incoming_call_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
    Form(params): Form<Vec<(String, String)>>,
) -> Response {
    handle_incoming(&state, &headers, &uri, params, true)
}

/// GET webhook: parameters arrive in the query string, which is already in the signed URL
pub async fn incoming_call_query(
    State(state): State<AppState>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    handle_incoming(&state, &headers, &uri, params, false)
}

/// Liveness probe
pub async fn health_check() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("OK"))
}

fn handle_incoming(
    state: &AppState,
    headers: &HeaderMap,
    uri: &Uri,
    params: Vec<(String, String)>,
    params_signed: bool,
) -> Response {
    let timer = Timer::new();
    let response = answer_incoming(state, headers, uri, params, params_signed);

    // Covers rejected and failed requests too.
    record_webhook_duration(timer.elapsed());
    response
}

fn answer_incoming(
    state: &AppState,
    headers: &HeaderMap,
    uri: &Uri,
    params: Vec<(String, String)>,
    params_signed: bool,
) -> Response {
    let signed: &[(String, String)] = if params_signed { &params } else { &[] };
    if let Err(e) = verify_signature(state, headers, uri, signed) {
        warn!("Rejected webhook request for {}: {}", uri.path(), e);
        return e.into_response();
    }

    let event = CallEvent::from_pairs(params);
    match state.calls.answer(&event) {
        Ok(answered) => {
            record_inbound_call(answered.target.label());
            (
                [(header::CONTENT_TYPE, VOICE_RESPONSE_CONTENT_TYPE)],
                answered.document,
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to answer call {:?}: {}", event.call_sid(), e);
            record_webhook_failure();
            e.into_response()
        }
    }
}

fn verify_signature(
    state: &AppState,
    headers: &HeaderMap,
    uri: &Uri,
    signed: &[(String, String)],
) -> Result<(), DomainError> {
    let Some(validator) = &state.validator else {
        return Ok(());
    };

    let Some(signature) = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok()) else {
        record_webhook_rejected("missing_signature");
        return Err(DomainError::InvalidSignature(format!(
            "missing {} header",
            SIGNATURE_HEADER
        )));
    };

    let url = signed_url(&state.webhook, headers, uri);
    validator.validate(&url, signed, signature).inspect_err(|_| {
        record_webhook_rejected("invalid_signature");
    })
}

/// Reconstruct the URL the platform signed
pub fn signed_url(webhook: &WebhookConfig, headers: &HeaderMap, uri: &Uri) -> String {
    let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    match &webhook.public_url {
        Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
        None => {
            let host = headers
                .get(header::HOST)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("localhost");
            format!("https://{}{}", host, path)
        }
    }
}
