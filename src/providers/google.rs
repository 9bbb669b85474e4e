//! Google Calendar holiday source.

use anyhow::{Context, Result};
use google_calendar::Client;
use google_calendar::types::{Event, OrderBy};
use phstatus_core::date_range::QueryWindow;
use phstatus_core::provider::{CalendarSource, skip_malformed};
use phstatus_core::{PhStatusError, PhStatusResult, RawEvent};
use tracing::debug;

use crate::config::GoogleConfig;

/// Unused by the refresh-token flow, but required by the client
const REDIRECT_URI: &str = "http://localhost:8085/callback";

pub struct GoogleCalendarSource {
    config: GoogleConfig,
}

impl GoogleCalendarSource {
    pub fn new(config: GoogleConfig) -> Self {
        GoogleCalendarSource { config }
    }

    fn create_client(&self, access_token: String) -> Client {
        Client::new(
            self.config.client_id.clone(),
            self.config.client_secret.clone(),
            REDIRECT_URI.to_string(),
            access_token,
            self.config.refresh_token.clone(),
        )
    }

    /// Exchange the stored refresh token for a fresh access token.
    async fn authenticated_client(&self) -> Result<Client> {
        let access_token = self
            .create_client(String::new())
            .refresh_access_token()
            .await
            .context("Failed to refresh Google access token")?;

        Ok(self.create_client(access_token.access_token))
    }

    async fn fetch_events(&self, window: &QueryWindow) -> Result<Vec<Event>> {
        let client = self.authenticated_client().await?;

        let time_min = window.time_min_rfc3339();
        let time_max = window.time_max_rfc3339();

        let response = client
            .events()
            .list_all(
                &self.config.calendar_id,
                "",                 // i_cal_uid
                0,                  // max_attendees
                OrderBy::StartTime, // order_by
                &[],                // private_extended_property
                "",                 // q (search query)
                &[],                // shared_extended_property
                false,              // show_deleted
                false,              // show_hidden_invitations
                true,               // single_events
                &time_max,          // time_max
                &time_min,          // time_min
                "",                 // time_zone
                "",                 // updated_min
            )
            .await
            .with_context(|| format!("Failed to fetch events from {}", self.config.calendar_id))?;

        Ok(response.body)
    }
}

impl CalendarSource for GoogleCalendarSource {
    async fn list_events(&self, window: &QueryWindow) -> PhStatusResult<Vec<RawEvent>> {
        let events = self
            .fetch_events(window)
            .await
            .map_err(|e| PhStatusError::SourceUnavailable(format!("{e:#}")))?;

        Ok(skip_malformed(events.into_iter().filter_map(to_raw_event)))
    }
}

/// Convert a Google event to a holiday entry.
///
/// Returns `None` for entries that are out of scope (cancelled, or timed
/// rather than all-day) and an error for all-day entries that cannot be used.
fn to_raw_event(event: Event) -> Option<PhStatusResult<RawEvent>> {
    if event.status == "cancelled" {
        return None;
    }

    let timed = |time: &Option<google_calendar::types::EventDateTime>| {
        time.as_ref().is_some_and(|t| t.date_time.is_some())
    };
    if timed(&event.start) || timed(&event.end) {
        debug!(summary = %event.summary, "Skipping timed event");
        return None;
    }

    let summary = event.summary;
    if summary.trim().is_empty() {
        return Some(Err(PhStatusError::malformed("(No title)", "missing summary")));
    }

    let Some(start) = event.start.and_then(|t| t.date) else {
        return Some(Err(PhStatusError::malformed(summary, "missing start date")));
    };
    let Some(end) = event.end.and_then(|t| t.date) else {
        return Some(Err(PhStatusError::malformed(summary, "missing end date")));
    };

    Some(RawEvent::try_new(summary, &event.description, start, end))
}
