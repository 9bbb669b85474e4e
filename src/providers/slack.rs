//! Slack profile status publisher.

use phstatus_core::provider::StatusPublisher;
use phstatus_core::status::StatusUpdate;
use phstatus_core::{PhStatusError, PhStatusResult};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{REQUEST_TIMEOUT, http_client};
use crate::config::SlackConfig;

#[derive(Serialize)]
struct ProfileSetRequest<'a> {
    profile: &'a StatusUpdate,
}

/// Slack Web API envelope: `{"ok": true}` or `{"ok": false, "error": "..."}`
#[derive(Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

pub struct SlackPublisher {
    http: reqwest::Client,
    token: String,
    api_base: String,
}

impl SlackPublisher {
    pub fn new(config: &SlackConfig) -> PhStatusResult<Self> {
        SlackPublisher::with_timeout(config, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(config: &SlackConfig, timeout: Duration) -> PhStatusResult<Self> {
        Ok(SlackPublisher {
            http: http_client(timeout)?,
            token: config.token.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn profile_set_url(&self) -> String {
        format!("{}/users.profile.set", self.api_base)
    }
}

impl StatusPublisher for SlackPublisher {
    async fn publish(&self, update: &StatusUpdate) -> PhStatusResult<()> {
        debug!(url = %self.profile_set_url(), "Setting Slack profile status");

        let response = self
            .http
            .post(self.profile_set_url())
            .bearer_auth(&self.token)
            .json(&ProfileSetRequest { profile: update })
            .send()
            .await
            .map_err(|e| PhStatusError::PublishRejected(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PhStatusError::PublishRejected(format!("HTTP {status}")));
        }

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| PhStatusError::PublishRejected(format!("invalid response: {e}")))?;

        if body.ok {
            Ok(())
        } else {
            Err(PhStatusError::PublishRejected(
                body.error.unwrap_or_else(|| "unknown_error".to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn slack_config(api_base: String) -> SlackConfig {
        SlackConfig {
            token: "xoxp-test".to_string(),
            today_emoji: ":red_circle:".to_string(),
            upcoming_emoji: ":large_yellow_circle:".to_string(),
            api_base,
        }
    }

    fn publisher_for(server: &mockito::ServerGuard) -> SlackPublisher {
        SlackPublisher::new(&slack_config(server.url())).unwrap()
    }

    fn update() -> StatusUpdate {
        StatusUpdate {
            status_text: "PH: Christmas Day".to_string(),
            status_emoji: ":red_circle:".to_string(),
            status_expiration: 1_735_257_600,
        }
    }

    #[tokio::test]
    async fn test_publish_sends_profile_with_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/users.profile.set")
            .match_header("authorization", "Bearer xoxp-test")
            .match_body(Matcher::Json(serde_json::json!({
                "profile": {
                    "status_text": "PH: Christmas Day",
                    "status_emoji": ":red_circle:",
                    "status_expiration": 1_735_257_600
                }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        publisher_for(&server).publish(&update()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_publish_reports_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/users.profile.set")
            .with_status(200)
            .with_body(r#"{"ok": false, "error": "invalid_auth"}"#)
            .create_async()
            .await;

        let err = publisher_for(&server).publish(&update()).await.unwrap_err();
        assert!(matches!(err, PhStatusError::PublishRejected(ref reason) if reason == "invalid_auth"));
    }

    #[tokio::test]
    async fn test_publish_reports_http_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/users.profile.set")
            .with_status(500)
            .create_async()
            .await;

        let err = publisher_for(&server).publish(&update()).await.unwrap_err();
        assert!(matches!(err, PhStatusError::PublishRejected(ref reason) if reason.contains("500")));
    }

    #[tokio::test]
    async fn test_publish_times_out_on_silent_server() {
        // Accepts connections but never answers
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let api_base = format!("http://{}", listener.local_addr().unwrap());
        let publisher =
            SlackPublisher::with_timeout(&slack_config(api_base), Duration::from_millis(200)).unwrap();

        let err = publisher.publish(&update()).await.unwrap_err();
        assert!(matches!(err, PhStatusError::PublishRejected(ref reason) if reason.starts_with("request failed")));
        drop(listener);
    }
}
