//! Zapier delivery - posting normalized events downstream.

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;
use url::Url;

use super::types::NormalizedEvent;

/// Posts normalized events to the configured Zapier catch hook.
#[derive(Clone)]
pub struct Forwarder {
    http: Client,
    webhook_url: Url,
}

impl Forwarder {
    /// Create a new forwarder for the given catch-hook URL.
    pub fn new(http: Client, webhook_url: Url) -> Self {
        Self { http, webhook_url }
    }

    /// Deliver one event with a single POST.
    ///
    /// Single attempt, no retry. The caller decides what a failure
    /// means; the inbound webhook response never depends on it.
    pub async fn forward(&self, event: &NormalizedEvent) -> Result<()> {
        let response = self
            .http
            .post(self.webhook_url.clone())
            .json(event)
            .send()
            .await
            .context("Failed to send event to Zapier")?;

        let status = response.status();
        response
            .error_for_status()
            .context("Zapier returned an error status")?;

        info!(
            status = status.as_u16(),
            event_type = event.event_type,
            comment_id = %event.comment.id,
            "zapier_forward_ok"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{CommentDetails, MediaDetails};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_event() -> NormalizedEvent {
        let comment: CommentDetails = serde_json::from_value(json!({
            "id": "c1",
            "text": "Nice!",
            "username": "alice",
            "timestamp": "2024-05-01T12:00:00+0000"
        }))
        .unwrap();
        let media: MediaDetails = serde_json::from_value(json!({
            "id": "m1",
            "caption": "Sunset",
            "media_type": "IMAGE",
            "permalink": "https://www.instagram.com/p/abc/",
            "timestamp": "2024-05-01T10:00:00+0000"
        }))
        .unwrap();
        NormalizedEvent::new_comment(comment, media)
    }

    #[tokio::test]
    async fn test_forward_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/hooks/catch/123/abc"))
            .and(body_partial_json(json!({
                "event_type": "new_comment",
                "comment": {"id": "c1", "username": "alice"},
                "post": {"id": "m1", "caption": "Sunset"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .expect(1)
            .mount(&server)
            .await;

        let forwarder = Forwarder::new(
            Client::new(),
            Url::parse(&format!("{}/hooks/catch/123/abc", server.uri())).unwrap(),
        );

        forwarder.forward(&sample_event()).await.unwrap();
    }

    #[tokio::test]
    async fn test_forward_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let forwarder = Forwarder::new(Client::new(), Url::parse(&server.uri()).unwrap());

        assert!(forwarder.forward(&sample_event()).await.is_err());
    }

    #[tokio::test]
    async fn test_forward_connection_refused() {
        let forwarder = Forwarder::new(
            Client::new(),
            Url::parse("http://127.0.0.1:1/hook").unwrap(),
        );

        assert!(forwarder.forward(&sample_event()).await.is_err());
    }
}
