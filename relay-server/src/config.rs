//! Configuration module for environment variable parsing.
//!
//! All settings come from environment variables, loaded once at startup
//! into an immutable struct that is passed explicitly to every component.

use std::env;

use anyhow::{Context, Result};
use url::Url;

/// Default Graph API endpoint for detail fetches.
const DEFAULT_GRAPH_API_BASE_URL: &str = "https://graph.instagram.com";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Token Instagram must echo during the subscription handshake
    pub verify_token: String,

    /// App secret used to verify webhook payload signatures
    pub app_secret: String,

    /// Zapier catch-hook URL that receives normalized events
    pub zapier_webhook_url: Url,

    /// Access token for Graph API detail fetches
    pub access_token: String,

    /// Base URL of the Graph API
    pub graph_api_base_url: Url,

    /// HTTP request timeout in milliseconds for outbound calls
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing or malformed required variables fail startup with the
    /// variable named in the error; optional ones fall back to defaults.
    pub fn from_env() -> Result<Self> {
        let zapier_webhook_url = parse_url(&require("ZAPIER_WEBHOOK_URL")?)
            .context("ZAPIER_WEBHOOK_URL is not a valid URL")?;

        let graph_api_base_url = parse_url(
            &env::var("GRAPH_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GRAPH_API_BASE_URL.to_string()),
        )
        .context("GRAPH_API_BASE_URL is not a valid URL")?;

        Ok(Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),

            verify_token: require("VERIFY_TOKEN")?,

            app_secret: require("APP_SECRET")?,

            zapier_webhook_url,

            access_token: require("ACCESS_TOKEN")?,

            graph_api_base_url,

            request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        })
    }
}

/// Read a required environment variable.
fn require(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{} must be set", name))
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).with_context(|| format!("Invalid URL: {}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_present() {
        env::set_var("GRAMHOOK_TEST_REQUIRED", "value");
        let result = require("GRAMHOOK_TEST_REQUIRED");
        assert_eq!(result.unwrap(), "value");
        env::remove_var("GRAMHOOK_TEST_REQUIRED");
    }

    #[test]
    fn test_require_missing() {
        let result = require("GRAMHOOK_TEST_NONEXISTENT");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("GRAMHOOK_TEST_NONEXISTENT"));
    }

    #[test]
    fn test_parse_url_valid() {
        let url = parse_url("https://hooks.zapier.com/hooks/catch/123/abc/").unwrap();
        assert_eq!(url.host_str(), Some("hooks.zapier.com"));
    }

    #[test]
    fn test_parse_url_invalid() {
        assert!(parse_url("not a url").is_err());
    }
}
