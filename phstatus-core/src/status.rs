//! Rendering a matched holiday as a presence status.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, TimeZone};
use serde::Serialize;

use crate::event::MergedHoliday;
use crate::lookup::{HolidayMatch, MatchKind};

pub const DEFAULT_TODAY_EMOJI: &str = ":red_circle:";
pub const DEFAULT_UPCOMING_EMOJI: &str = ":large_yellow_circle:";

/// Emoji identifiers used for the two status forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEmojis {
    pub today: String,
    pub upcoming: String,
}

impl Default for StatusEmojis {
    fn default() -> Self {
        StatusEmojis {
            today: DEFAULT_TODAY_EMOJI.to_string(),
            upcoming: DEFAULT_UPCOMING_EMOJI.to_string(),
        }
    }
}

/// A presence status ready to hand to a status publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status_text: String,
    pub status_emoji: String,
    /// Unix timestamp at which the status clears itself
    pub status_expiration: i64,
}

impl StatusUpdate {
    /// Status for a holiday that includes today: `PH: {summary}`, expiring at
    /// midnight of the span's exclusive end.
    pub fn today<Tz: TimeZone>(holiday: &MergedHoliday, emoji: &str, tz: &Tz) -> Self {
        StatusUpdate {
            status_text: format!("PH: {}", holiday.summary),
            status_emoji: emoji.to_string(),
            status_expiration: local_midnight_timestamp(holiday.end, tz),
        }
    }

    /// Status for a holiday starting soon: `Upcoming PH: [{range}] {summary}`,
    /// expiring at midnight of its first day.
    pub fn upcoming<Tz: TimeZone>(holiday: &MergedHoliday, emoji: &str, tz: &Tz) -> Self {
        StatusUpdate {
            status_text: format!(
                "Upcoming PH: [{}] {}",
                date_range_label(holiday),
                holiday.summary
            ),
            status_emoji: emoji.to_string(),
            status_expiration: local_midnight_timestamp(holiday.start, tz),
        }
    }

    pub fn for_match<Tz: TimeZone>(matched: &HolidayMatch, emojis: &StatusEmojis, tz: &Tz) -> Self {
        match matched.kind {
            MatchKind::Today => StatusUpdate::today(&matched.holiday, &emojis.today, tz),
            MatchKind::Upcoming { .. } => {
                StatusUpdate::upcoming(&matched.holiday, &emojis.upcoming, tz)
            }
        }
    }
}

/// `d/m` for a single-day holiday, `d/m-d/m` (inclusive) otherwise.
pub fn date_range_label(holiday: &MergedHoliday) -> String {
    let real_end = holiday.last_day();
    if holiday.start == real_end {
        day_month(holiday.start)
    } else {
        format!("{}-{}", day_month(holiday.start), day_month(real_end))
    }
}

fn day_month(date: NaiveDate) -> String {
    format!("{}/{}", date.day(), date.month())
}

/// Unix timestamp of midnight at the start of `date` in `tz`.
///
/// When midnight falls in a DST gap, the first instant an hour later is used.
pub fn local_midnight_timestamp<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(midnight + Duration::hours(1))).earliest())
        .map(|dt| dt.timestamp())
        .unwrap_or_else(|| midnight.and_utc().timestamp())
}

/// Push notification announcing a status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub tag: String,
}

impl Notification {
    pub fn for_holiday(holiday: &MergedHoliday, title: &str, tag: &str) -> Self {
        Notification {
            title: title.to_string(),
            body: format!("PH: {}", holiday.summary),
            tag: tag.to_string(),
        }
    }
}
