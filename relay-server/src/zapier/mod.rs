//! Zapier integration - the downstream automation endpoint.
//!
//! Assembled events are delivered with a single POST to a configured
//! catch-hook URL. Delivery is fire-and-forget: failures are logged by
//! the caller, never retried, and never affect the inbound webhook
//! response.

pub mod forwarder;
pub mod types;

pub use forwarder::Forwarder;
pub use types::{CommentPayload, NormalizedEvent, PostPayload, EVENT_TYPE_NEW_COMMENT};
