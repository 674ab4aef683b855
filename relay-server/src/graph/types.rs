//! Typed records returned by the Graph API.
//!
//! Only `id` is guaranteed to be present; every other field defaults to
//! an empty string when the platform omits it.

use serde::Deserialize;

/// Comment record fetched from the Graph API.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentDetails {
    /// Upstream comment identifier
    pub id: String,
    /// Comment text
    #[serde(default)]
    pub text: String,
    /// Username of the commenter
    #[serde(default)]
    pub username: String,
    /// Creation timestamp as reported by the platform
    #[serde(default)]
    pub timestamp: String,
}

/// Media (post) record fetched from the Graph API.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaDetails {
    /// Upstream media identifier
    pub id: String,
    /// Post caption, absent for caption-less media
    #[serde(default)]
    pub caption: String,
    /// Media type, e.g. `IMAGE`, `VIDEO`, `CAROUSEL_ALBUM`
    #[serde(default)]
    pub media_type: String,
    /// Public permalink to the post
    #[serde(default)]
    pub permalink: String,
    /// Publication timestamp as reported by the platform
    #[serde(default)]
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_details_deserialization() {
        let json = r#"{
            "id": "17843102735",
            "text": "Love this!",
            "username": "someuser",
            "timestamp": "2024-05-01T12:00:00+0000",
            "media": {"id": "17902341876"}
        }"#;

        let details: CommentDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.id, "17843102735");
        assert_eq!(details.text, "Love this!");
        assert_eq!(details.username, "someuser");
    }

    #[test]
    fn test_comment_details_missing_optional_fields() {
        let details: CommentDetails = serde_json::from_str(r#"{"id": "123"}"#).unwrap();
        assert_eq!(details.id, "123");
        assert_eq!(details.text, "");
        assert_eq!(details.username, "");
    }

    #[test]
    fn test_comment_details_missing_id_fails() {
        let result: Result<CommentDetails, _> = serde_json::from_str(r#"{"text": "hi"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_media_details_missing_caption_defaults_empty() {
        let json = r#"{
            "id": "17902341876",
            "media_type": "IMAGE",
            "permalink": "https://www.instagram.com/p/abc/",
            "timestamp": "2024-05-01T10:00:00+0000"
        }"#;

        let details: MediaDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.id, "17902341876");
        assert_eq!(details.caption, "");
        assert_eq!(details.media_type, "IMAGE");
    }
}
