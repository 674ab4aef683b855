//! Web server module for handling Instagram webhooks.
//!
//! This module provides the HTTP surface of the relay:
//! - Answers Meta's one-time subscription handshake
//! - Verifies payload signatures over the raw request body
//! - Hands authenticated envelopes to the notification dispatcher
//! - Always acknowledges authenticated deliveries with 200 OK

pub mod handlers;
pub mod signature;

use axum::{routing::get, Router};

pub use handlers::{health, receive_webhook, verify_webhook, AppState, HealthResponse, VerifyParams};
pub use signature::verify_webhook_signature;

/// Build the relay router with all routes attached.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/webhook", get(verify_webhook).post(receive_webhook))
        .with_state(state)
}
