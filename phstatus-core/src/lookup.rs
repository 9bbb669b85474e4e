//! Finding the holiday that covers a date.

use chrono::{Days, NaiveDate};

use crate::event::MergedHoliday;

/// Number of days after today checked for an upcoming holiday.
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 3;

/// Return the first span in `holidays` containing `date`.
pub fn find_holiday_for_date(holidays: &[MergedHoliday], date: NaiveDate) -> Option<&MergedHoliday> {
    holidays.iter().find(|holiday| holiday.contains(date))
}

/// Whether the matched holiday is happening today or coming up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Today,
    Upcoming { days_ahead: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayMatch {
    pub kind: MatchKind,
    pub holiday: MergedHoliday,
}

/// Check today first, then each of the next `lookahead_days` days in order,
/// stopping at the first holiday found.
pub fn resolve_status(
    holidays: &[MergedHoliday],
    today: NaiveDate,
    lookahead_days: u32,
) -> Option<HolidayMatch> {
    if let Some(holiday) = find_holiday_for_date(holidays, today) {
        return Some(HolidayMatch {
            kind: MatchKind::Today,
            holiday: holiday.clone(),
        });
    }

    (1..=lookahead_days).find_map(|days_ahead| {
        let date = today.checked_add_days(Days::new(days_ahead.into()))?;
        find_holiday_for_date(holidays, date).map(|holiday| HolidayMatch {
            kind: MatchKind::Upcoming { days_ahead },
            holiday: holiday.clone(),
        })
    })
}
