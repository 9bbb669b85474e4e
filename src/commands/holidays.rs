use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use phstatus_core::date_range::QueryWindow;
use phstatus_core::provider::fetch_holidays;

use crate::config::Config;
use crate::providers::google::GoogleCalendarSource;
use crate::render::Render;

/// List the merged holidays between `from` and `from + days` (inclusive).
pub async fn run(config: &Config, from: NaiveDate, days: Option<u32>, json: bool) -> Result<()> {
    let window = QueryWindow::lookahead(from, days.unwrap_or(config.lookahead_days));
    let source = GoogleCalendarSource::new(config.google.clone());

    let holidays = fetch_holidays(&source, &window).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&holidays)?);
        return Ok(());
    }

    if holidays.is_empty() {
        println!(
            "{}",
            format!("No holidays between {} and {}", window.start, window.end).dimmed()
        );
        return Ok(());
    }

    for holiday in &holidays {
        let marker = if holiday.contains(from) { "●".red().to_string() } else { " ".to_string() };
        println!("{} {}", marker, holiday.render());
    }

    Ok(())
}
