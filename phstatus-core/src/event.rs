//! Holiday value types.
//!
//! Both types use the all-day convention of calendar feeds: `start` is the
//! first day and `end` is exclusive, so a single-day entry has
//! `end == start + 1 day`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{PhStatusError, PhStatusResult};

/// One all-day calendar entry as delivered by a calendar source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    pub summary: String,
    /// First line of the entry's description (empty if none)
    pub description: String,
    pub start: NaiveDate,
    /// Exclusive end date
    pub end: NaiveDate,
}

impl RawEvent {
    /// Build an entry, keeping only the text before the first line break of
    /// `description`.
    pub fn new(
        summary: impl Into<String>,
        description: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        RawEvent {
            summary: summary.into(),
            description: first_line(description).to_string(),
            start,
            end,
        }
    }

    /// Like [`RawEvent::new`], but rejects entries whose range is empty or
    /// inverted.
    pub fn try_new(
        summary: impl Into<String>,
        description: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> PhStatusResult<Self> {
        let summary = summary.into();
        if end <= start {
            return Err(PhStatusError::malformed(
                summary,
                format!("end date {end} is not after start date {start}"),
            ));
        }
        Ok(RawEvent::new(summary, description, start, end))
    }
}

fn first_line(description: &str) -> &str {
    description.split('\n').next().unwrap_or_default()
}

/// A contiguous holiday span produced by merging equivalent raw entries.
///
/// Invariant: `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedHoliday {
    /// Canonical label of the group this span came from
    pub summary: String,
    pub description: String,
    pub start: NaiveDate,
    /// Exclusive end date
    pub end: NaiveDate,
}

impl MergedHoliday {
    /// Whether `date` falls on one of the span's days.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// The last holiday day (inclusive).
    pub fn last_day(&self) -> NaiveDate {
        self.end.pred_opt().unwrap_or(self.end)
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
