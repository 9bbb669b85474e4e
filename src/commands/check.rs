use anyhow::Result;
use chrono::{Local, NaiveDate};
use phstatus_core::date_range::QueryWindow;
use phstatus_core::provider::{fetch_holidays, plan_status, run_check};
use tracing::warn;

use crate::config::Config;
use crate::providers::google::GoogleCalendarSource;
use crate::providers::ntfy::NtfyNotifier;
use crate::providers::slack::SlackPublisher;
use crate::render::Render;

/// Check `today` and the lookahead days, then publish the matching status.
pub async fn run(config: &Config, today: NaiveDate, dry_run: bool) -> Result<()> {
    let source = GoogleCalendarSource::new(config.google.clone());
    let options = config.check_options();

    if dry_run {
        let window = QueryWindow::lookahead(today, options.lookahead_days);
        let holidays = fetch_holidays(&source, &window).await?;

        match plan_status(&holidays, today, &options, &Local) {
            Some(planned) => {
                println!("Would set: {}", planned.render());
                println!("  expires at {}", planned.update.status_expiration);
            }
            None => println!("No holiday today or in the next {} days", options.lookahead_days),
        }
        return Ok(());
    }

    let publisher = SlackPublisher::new(&config.slack)?;
    let notifier = config.ntfy.as_ref().and_then(|ntfy| match NtfyNotifier::new(ntfy) {
        Ok(notifier) => Some(notifier),
        Err(e) => {
            warn!("Notifications disabled: {}", e);
            None
        }
    });

    let outcome = run_check(&source, &publisher, &notifier, today, &options, &Local).await?;
    println!("{}", outcome.render());

    Ok(())
}
