//! Outbound event document sent to Zapier.
//!
//! The document flattens the two fetched Graph API records into a fixed
//! shape that downstream automations can rely on.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::graph::{CommentDetails, MediaDetails};

/// `event_type` value for comment notifications.
pub const EVENT_TYPE_NEW_COMMENT: &str = "new_comment";

/// Normalized event document posted to the Zapier catch hook.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedEvent {
    /// Event discriminator, currently always `new_comment`
    pub event_type: &'static str,
    /// The enriched comment
    pub comment: CommentPayload,
    /// The post the comment was left on
    pub post: PostPayload,
    /// When this event was assembled for forwarding (not receipt time)
    pub notification_time: DateTime<Utc>,
}

impl NormalizedEvent {
    /// Assemble a `new_comment` event from the two fetched records,
    /// stamping the notification time.
    pub fn new_comment(comment: CommentDetails, media: MediaDetails) -> Self {
        Self {
            event_type: EVENT_TYPE_NEW_COMMENT,
            comment: comment.into(),
            post: media.into(),
            notification_time: Utc::now(),
        }
    }
}

/// Comment sub-object of the normalized event.
#[derive(Debug, Clone, Serialize)]
pub struct CommentPayload {
    pub id: String,
    pub text: String,
    pub username: String,
    pub timestamp: String,
}

impl From<CommentDetails> for CommentPayload {
    fn from(details: CommentDetails) -> Self {
        Self {
            id: details.id,
            text: details.text,
            username: details.username,
            timestamp: details.timestamp,
        }
    }
}

/// Post sub-object of the normalized event.
#[derive(Debug, Clone, Serialize)]
pub struct PostPayload {
    pub id: String,
    pub caption: String,
    pub media_type: String,
    pub permalink: String,
    pub timestamp: String,
}

impl From<MediaDetails> for PostPayload {
    fn from(details: MediaDetails) -> Self {
        Self {
            id: details.id,
            caption: details.caption,
            media_type: details.media_type,
            permalink: details.permalink,
            timestamp: details.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_comment() -> CommentDetails {
        serde_json::from_value(serde_json::json!({
            "id": "17843102735",
            "text": "Love this!",
            "username": "someuser",
            "timestamp": "2024-05-01T12:00:00+0000"
        }))
        .unwrap()
    }

    fn sample_media() -> MediaDetails {
        serde_json::from_value(serde_json::json!({
            "id": "17902341876",
            "media_type": "IMAGE",
            "permalink": "https://www.instagram.com/p/abc/",
            "timestamp": "2024-05-01T10:00:00+0000"
        }))
        .unwrap()
    }

    #[test]
    fn test_normalized_event_shape() {
        let event = NormalizedEvent::new_comment(sample_comment(), sample_media());
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event_type"], "new_comment");
        assert_eq!(json["comment"]["id"], "17843102735");
        assert_eq!(json["comment"]["username"], "someuser");
        assert_eq!(json["post"]["id"], "17902341876");
        assert_eq!(json["post"]["caption"], "");
        assert!(json["notification_time"].is_string());
    }

    #[test]
    fn test_notification_time_is_assembly_time() {
        let before = Utc::now();
        let event = NormalizedEvent::new_comment(sample_comment(), sample_media());
        let after = Utc::now();

        assert!(event.notification_time >= before);
        assert!(event.notification_time <= after);
    }
}
