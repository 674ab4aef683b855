//! Inbound webhook payload types.
//!
//! Meta delivers change notifications as a nested envelope. Every field
//! the relay does not strictly need is optional: payloads with absent
//! pieces are skipped, never treated as errors.

use serde::Deserialize;

/// `object` value identifying Instagram as the source platform.
pub const INSTAGRAM_OBJECT: &str = "instagram";

/// Change field name carrying comment notifications.
pub const COMMENTS_FIELD: &str = "comments";

/// Top-level webhook payload.
#[derive(Debug, Deserialize)]
pub struct WebhookEnvelope {
    /// Source platform identifier, `"instagram"` for this relay
    #[serde(default)]
    pub object: String,
    /// One item per subscribed object with pending changes
    #[serde(default)]
    pub entry: Vec<EntryItem>,
}

/// One subscribed object's batch of changes.
#[derive(Debug, Deserialize)]
pub struct EntryItem {
    #[serde(default)]
    pub changes: Option<Vec<ChangeEvent>>,
}

/// A single state change within an entry.
#[derive(Debug, Deserialize)]
pub struct ChangeEvent {
    /// Subscription field; only `"comments"` is acted on
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub value: Option<ChangeValue>,
}

/// Identifier payload of a comment change.
#[derive(Debug, Deserialize)]
pub struct ChangeValue {
    /// Comment identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Parent post reference
    #[serde(default)]
    pub media: Option<MediaRef>,
}

/// Reference to the post a comment belongs to.
#[derive(Debug, Deserialize)]
pub struct MediaRef {
    #[serde(default)]
    pub id: Option<String>,
}
