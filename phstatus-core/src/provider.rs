//! Collaborator traits and the holiday check.
//!
//! The calendar feed, the status publisher and the push notifier are all
//! external services. The binary supplies concrete implementations; this
//! module only decides what to send and how to react to their failures:
//! - a [`CalendarSource`] failure aborts the check
//! - a rejected status update is logged and reported in the outcome
//! - a failed notification is logged and otherwise ignored

use std::future::Future;

use chrono::{NaiveDate, TimeZone};
use tracing::{debug, error, info, warn};

use crate::date_range::QueryWindow;
use crate::error::{PhStatusError, PhStatusResult};
use crate::event::{MergedHoliday, RawEvent};
use crate::lookup::{DEFAULT_LOOKAHEAD_DAYS, HolidayMatch, resolve_status};
use crate::merge::merge_holidays;
use crate::status::{Notification, StatusEmojis, StatusUpdate};

pub const DEFAULT_NOTIFICATION_TITLE: &str = "Slack status updated";
pub const DEFAULT_NOTIFICATION_TAG: &str = "mega";

/// Supplies all-day entries for a window.
pub trait CalendarSource {
    /// Entries overlapping `window`, in feed order. Entries that could not be
    /// parsed are expected to be dropped already (see [`skip_malformed`]).
    fn list_events(
        &self,
        window: &QueryWindow,
    ) -> impl Future<Output = PhStatusResult<Vec<RawEvent>>>;
}

/// Publishes a presence status.
pub trait StatusPublisher {
    fn publish(&self, update: &StatusUpdate) -> impl Future<Output = PhStatusResult<()>>;
}

/// Best-effort push notifications.
pub trait PushNotifier {
    fn notify(
        &self,
        notification: &Notification,
    ) -> impl Future<Output = PhStatusResult<()>>;
}

/// An absent notifier accepts every notification.
impl<T: PushNotifier> PushNotifier for Option<T> {
    async fn notify(&self, notification: &Notification) -> PhStatusResult<()> {
        match self {
            Some(notifier) => notifier.notify(notification).await,
            None => Ok(()),
        }
    }
}

/// Keep the well-formed entries, logging and dropping the rest.
pub fn skip_malformed(
    entries: impl IntoIterator<Item = PhStatusResult<RawEvent>>,
) -> Vec<RawEvent> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(event) => Some(event),
            Err(e) => {
                warn!("Skipping calendar entry: {}", e);
                None
            }
        })
        .collect()
}

/// Settings for a single check.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub lookahead_days: u32,
    pub emojis: StatusEmojis,
    pub notification_title: String,
    pub notification_tag: String,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions {
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            emojis: StatusEmojis::default(),
            notification_title: DEFAULT_NOTIFICATION_TITLE.to_string(),
            notification_tag: DEFAULT_NOTIFICATION_TAG.to_string(),
        }
    }
}

/// The status a check would publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStatus {
    pub matched: HolidayMatch,
    pub update: StatusUpdate,
    pub notification: Notification,
}

/// Result of [`run_check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Neither today nor the lookahead days fall in a holiday
    NoHoliday,
    Published(PlannedStatus),
    /// The publisher refused the update; no notification was sent
    Rejected { planned: PlannedStatus, reason: String },
}

/// Fetch the window's entries and merge them into holiday spans.
pub async fn fetch_holidays<S: CalendarSource>(
    source: &S,
    window: &QueryWindow,
) -> PhStatusResult<Vec<MergedHoliday>> {
    let events = source.list_events(window).await?;
    debug!(count = events.len(), "Fetched calendar entries");
    Ok(merge_holidays(events))
}

/// Decide which status to publish for `today`, if any.
pub fn plan_status<Tz: TimeZone>(
    holidays: &[MergedHoliday],
    today: NaiveDate,
    options: &CheckOptions,
    tz: &Tz,
) -> Option<PlannedStatus> {
    let matched = resolve_status(holidays, today, options.lookahead_days)?;
    let update = StatusUpdate::for_match(&matched, &options.emojis, tz);
    let notification = Notification::for_holiday(
        &matched.holiday,
        &options.notification_title,
        &options.notification_tag,
    );

    Some(PlannedStatus {
        matched,
        update,
        notification,
    })
}

/// Run one holiday check: fetch, merge, resolve, then publish and notify.
///
/// At most one status update is published.
pub async fn run_check<S, P, N, Tz>(
    source: &S,
    publisher: &P,
    notifier: &N,
    today: NaiveDate,
    options: &CheckOptions,
    tz: &Tz,
) -> PhStatusResult<CheckOutcome>
where
    S: CalendarSource,
    P: StatusPublisher,
    N: PushNotifier,
    Tz: TimeZone,
{
    let window = QueryWindow::lookahead(today, options.lookahead_days);
    let holidays = fetch_holidays(source, &window).await?;

    let Some(planned) = plan_status(&holidays, today, options, tz) else {
        info!(%today, "No holiday today or in the next {} days", options.lookahead_days);
        return Ok(CheckOutcome::NoHoliday);
    };

    info!(status = %planned.update.status_text, "Publishing holiday status");

    match publisher.publish(&planned.update).await {
        Ok(()) => {}
        Err(PhStatusError::PublishRejected(reason)) => {
            error!("Error updating status: {}", reason);
            return Ok(CheckOutcome::Rejected { planned, reason });
        }
        Err(e) => {
            error!("Error updating status: {}", e);
            return Ok(CheckOutcome::Rejected {
                planned,
                reason: e.to_string(),
            });
        }
    }

    if let Err(e) = notifier.notify(&planned.notification).await {
        warn!("Error sending notification: {}", e);
    }

    Ok(CheckOutcome::Published(planned))
}
