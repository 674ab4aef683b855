//! Webhook endpoint handlers.
//!
//! The GET handler answers Meta's one-time subscription handshake and the
//! POST handler verifies the delivery signature before handing the
//! envelope to the notification dispatcher. The platform expects a prompt
//! 200 for every authenticated delivery, so inner processing outcomes
//! never change the response.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::graph::GraphClient;
use crate::process::{process_notification, WebhookEnvelope};
use crate::web::signature::verify_webhook_signature;
use crate::zapier::Forwarder;
use crate::Config;

/// Mode value Meta sends during the subscription handshake.
const SUBSCRIBE_MODE: &str = "subscribe";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub graph: GraphClient,
    pub forwarder: Forwarder,
}

impl AppState {
    pub fn new(config: Config, graph: GraphClient, forwarder: Forwarder) -> Self {
        Self {
            config: Arc::new(config),
            graph,
            forwarder,
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now(),
    })
}

// =============================================================================
// Webhook Verification (GET)
// =============================================================================

/// Query parameters of Meta's subscription handshake.
#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// Webhook verification endpoint.
///
/// Instagram calls this once when the subscription is created. The
/// challenge is echoed back only when the mode is `subscribe` and the
/// token matches the configured secret.
pub async fn verify_webhook(
    State(state): State<AppState>,
    Query(params): Query<VerifyParams>,
) -> impl IntoResponse {
    let mode_ok = params.mode.as_deref() == Some(SUBSCRIBE_MODE);
    let token_ok = params.verify_token.as_deref() == Some(state.config.verify_token.as_str());

    if mode_ok && token_ok {
        let challenge = params.challenge.unwrap_or_default();
        info!(
            challenge_length = challenge.len(),
            "webhook_verification_ok"
        );
        (StatusCode::OK, challenge)
    } else {
        warn!(
            mode = ?params.mode,
            mode_ok = mode_ok,
            token_ok = token_ok,
            "webhook_verification_failed"
        );
        (StatusCode::FORBIDDEN, "Forbidden".to_string())
    }
}

// =============================================================================
// Webhook Notifications (POST)
// =============================================================================

/// Webhook notification endpoint.
///
/// The body is taken as raw bytes so the signature is verified over the
/// exact payload as received, before any JSON parsing. Authenticated
/// deliveries are always acknowledged with 200, even when every inner
/// change is skipped.
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let signature = headers
        .get("x-hub-signature-256")
        .and_then(|v| v.to_str().ok());

    if !verify_webhook_signature(&state.config.app_secret, &body, signature) {
        warn!(body_length = body.len(), "webhook_rejected");
        return (StatusCode::FORBIDDEN, "Forbidden");
    }

    let envelope: WebhookEnvelope = match serde_json::from_slice(&body) {
        Ok(envelope) => envelope,
        Err(e) => {
            // Authenticated but unparseable payloads are acknowledged and ignored.
            warn!(error = %e, body_length = body.len(), "webhook_payload_unparseable");
            return (StatusCode::OK, "OK");
        }
    };

    info!(
        object = %envelope.object,
        entries = envelope.entry.len(),
        "webhook_received"
    );

    let outcome = process_notification(&state.graph, &state.forwarder, envelope).await;

    info!(
        comment_changes = outcome.comment_changes,
        forwarded = outcome.forwarded,
        skipped = outcome.skipped,
        "webhook_processed"
    );

    (StatusCode::OK, "OK")
}
