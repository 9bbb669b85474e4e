pub mod check;
pub mod holidays;
pub mod init;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

/// Parse `--date` (YYYY-MM-DD), defaulting to today's local date.
pub fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s)),
        None => Ok(Local::now().date_naive()),
    }
}
