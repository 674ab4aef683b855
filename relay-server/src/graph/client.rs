//! Graph API read client.
//!
//! Comment and media lookups share one request shape and differ only in
//! the identifier and the requested field list, so both go through a
//! single generic fetch operation.

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::types::{CommentDetails, MediaDetails};

/// Fields requested for comment lookups.
const COMMENT_FIELDS: &str = "id,text,username,timestamp,media";

/// Fields requested for media lookups.
const MEDIA_FIELDS: &str = "id,caption,media_type,permalink,timestamp";

/// Why a detail fetch failed.
///
/// Fetch failures are an expected outcome for the dispatcher, which logs
/// the reason and drops the affected change.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The resource id could not be joined onto the base URL
    #[error("invalid resource URL: {0}")]
    Url(#[from] url::ParseError),

    /// Network failure or unreadable response body
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("unexpected status {status}")]
    Status { status: reqwest::StatusCode },
}

/// Read client for the Instagram Graph API.
///
/// Holds the shared HTTP client plus the credentials loaded at startup.
/// Requests are single-attempt; retry policy belongs to the caller, and
/// this relay deliberately has none.
#[derive(Clone)]
pub struct GraphClient {
    http: Client,
    base_url: Url,
    access_token: String,
}

impl GraphClient {
    /// Create a new client against the given Graph API base URL.
    pub fn new(http: Client, base_url: Url, access_token: String) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    /// Fetch full comment details by comment id.
    pub async fn fetch_comment(&self, comment_id: &str) -> Result<CommentDetails, FetchError> {
        self.fetch_resource(comment_id, COMMENT_FIELDS).await
    }

    /// Fetch full media (post) details by media id.
    pub async fn fetch_media(&self, media_id: &str) -> Result<MediaDetails, FetchError> {
        self.fetch_resource(media_id, MEDIA_FIELDS).await
    }

    /// Fetch one resource record: `GET {base}/{id}?fields=...&access_token=...`.
    async fn fetch_resource<T>(&self, id: &str, fields: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let url = self.base_url.join(id)?;

        debug!(resource_id = id, fields = fields, "graph_fetch_start");

        let response = self
            .http
            .get(url)
            .query(&[("fields", fields), ("access_token", self.access_token.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let record = response.json::<T>().await?;

        debug!(resource_id = id, "graph_fetch_complete");

        Ok(record)
    }
}
