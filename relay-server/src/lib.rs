//! GramHook - Instagram comment webhook relay.
//!
//! This library backs the `gramhook-server` binary, which:
//! - Answers Instagram's webhook subscription handshake
//! - Verifies `X-Hub-Signature-256` payload signatures
//! - Enriches comment notifications via the Graph API
//! - Forwards normalized events to a Zapier catch hook
//!
//! ## Architecture
//!
//! ```text
//! Instagram → POST /webhook → verify signature → fetch comment + media → Zapier
//! ```

pub mod config;
pub mod graph;
pub mod process;
pub mod web;
pub mod zapier;

// Re-export commonly used types
pub use config::Config;
pub use graph::{CommentDetails, FetchError, GraphClient, MediaDetails};
pub use process::{process_notification, DispatchOutcome, WebhookEnvelope};
pub use web::AppState;
pub use zapier::{Forwarder, NormalizedEvent};
