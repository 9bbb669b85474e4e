//! ntfy push notifications.

use phstatus_core::provider::PushNotifier;
use phstatus_core::status::Notification;
use phstatus_core::{PhStatusError, PhStatusResult};

use super::{REQUEST_TIMEOUT, http_client};
use crate::config::NtfyConfig;

pub struct NtfyNotifier {
    http: reqwest::Client,
    topic_url: String,
}

impl NtfyNotifier {
    pub fn new(config: &NtfyConfig) -> PhStatusResult<Self> {
        Ok(NtfyNotifier {
            http: http_client(REQUEST_TIMEOUT)?,
            topic_url: format!("{}/{}", config.server.trim_end_matches('/'), config.topic),
        })
    }
}

impl PushNotifier for NtfyNotifier {
    async fn notify(&self, notification: &Notification) -> PhStatusResult<()> {
        self.http
            .post(&self.topic_url)
            .header("Title", &notification.title)
            .header("Tags", &notification.tag)
            .body(notification.body.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| PhStatusError::NotifyFailed(e.to_string()))?;

        Ok(())
    }
}
