//! Terminal rendering for phstatus-core types.
//!
//! Extension traits that add colored output using owo_colors.

use owo_colors::OwoColorize;
use phstatus_core::MergedHoliday;
use phstatus_core::lookup::MatchKind;
use phstatus_core::provider::{CheckOutcome, PlannedStatus};
use phstatus_core::status::StatusUpdate;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for MergedHoliday {
    fn render(&self) -> String {
        let range = if self.days() == 1 {
            self.start.to_string()
        } else {
            format!("{} → {}", self.start, self.last_day())
        };

        if self.description.is_empty() {
            format!("{} {}", range.dimmed(), self.summary.bold())
        } else {
            format!(
                "{} {} {}",
                range.dimmed(),
                self.summary.bold(),
                format!("({})", self.description).dimmed()
            )
        }
    }
}

impl Render for StatusUpdate {
    fn render(&self) -> String {
        format!("{} {}", self.status_emoji, self.status_text)
    }
}

impl Render for PlannedStatus {
    fn render(&self) -> String {
        let when = match self.matched.kind {
            MatchKind::Today => "today".to_string(),
            MatchKind::Upcoming { days_ahead: 1 } => "tomorrow".to_string(),
            MatchKind::Upcoming { days_ahead } => format!("in {days_ahead} days"),
        };
        format!("{} ({})", self.update.render(), when.dimmed())
    }
}

impl Render for CheckOutcome {
    fn render(&self) -> String {
        match self {
            CheckOutcome::NoHoliday => "No upcoming holiday, status left unchanged".dimmed().to_string(),
            CheckOutcome::Published(planned) => {
                format!("{} Status set: {}", "✓".green(), planned.render())
            }
            CheckOutcome::Rejected { planned, reason } => format!(
                "{} Status update rejected ({}): {}",
                "✗".red(),
                reason,
                planned.render()
            ),
        }
    }
}
