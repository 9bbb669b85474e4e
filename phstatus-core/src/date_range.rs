//! Date window for fetching holiday entries.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

/// Calendar days to query, inclusive of both `start` and `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl QueryWindow {
    /// Window covering `today` and the following `lookahead_days` days.
    pub fn lookahead(today: NaiveDate, lookahead_days: u32) -> Self {
        let end = today
            .checked_add_days(Days::new(lookahead_days.into()))
            .unwrap_or(NaiveDate::MAX);
        QueryWindow { start: today, end }
    }

    /// Midnight UTC at the start of the window.
    pub fn time_min(&self) -> DateTime<Utc> {
        self.start.and_time(NaiveTime::MIN).and_utc()
    }

    /// Midnight UTC after the last day, so the whole `end` day is included.
    pub fn time_max(&self) -> DateTime<Utc> {
        self.end
            .succ_opt()
            .unwrap_or(self.end)
            .and_time(NaiveTime::MIN)
            .and_utc()
    }

    pub fn time_min_rfc3339(&self) -> String {
        self.time_min().to_rfc3339()
    }

    pub fn time_max_rfc3339(&self) -> String {
        self.time_max().to_rfc3339()
    }
}
